//! Tunis style: thin crust, harissa-spiked tomato sauce.

use std::any::Any;

use common::Region;

use super::{Pizza, PizzaKind, Recipe};

const DOUGH: &str = "Thin Crust Dough";
const SAUCE: &str = "Harissa Tomato Sauce";

#[derive(Debug, Clone)]
pub struct TunisStyleCheesePizza {
    recipe: Recipe,
}

impl TunisStyleCheesePizza {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(
                "Tunis Style Cheese Pizza",
                DOUGH,
                SAUCE,
                &["Grated Mozzarella", "Sheep's Milk Cheese"],
            ),
        }
    }
}

impl Default for TunisStyleCheesePizza {
    fn default() -> Self {
        Self::new()
    }
}

impl Pizza for TunisStyleCheesePizza {
    fn region(&self) -> Region {
        Region::Tunis
    }

    fn kind(&self) -> PizzaKind {
        PizzaKind::Cheese
    }

    fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone)]
pub struct TunisStylePepperoniPizza {
    recipe: Recipe,
}

impl TunisStylePepperoniPizza {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(
                "Tunis Style Pepperoni Pizza",
                DOUGH,
                SAUCE,
                &["Grated Mozzarella", "Merguez Pepperoni", "Black Olives"],
            ),
        }
    }
}

impl Default for TunisStylePepperoniPizza {
    fn default() -> Self {
        Self::new()
    }
}

impl Pizza for TunisStylePepperoniPizza {
    fn region(&self) -> Region {
        Region::Tunis
    }

    fn kind(&self) -> PizzaKind {
        PizzaKind::Pepperoni
    }

    fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone)]
pub struct TunisStyleClamPizza {
    recipe: Recipe,
}

impl TunisStyleClamPizza {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(
                "Tunis Style Clam Pizza",
                DOUGH,
                SAUCE,
                &["Grated Mozzarella", "Fresh Clams from La Goulette"],
            ),
        }
    }
}

impl Default for TunisStyleClamPizza {
    fn default() -> Self {
        Self::new()
    }
}

impl Pizza for TunisStyleClamPizza {
    fn region(&self) -> Region {
        Region::Tunis
    }

    fn kind(&self) -> PizzaKind {
        PizzaKind::Clam
    }

    fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
