//! Sfax style: thick crust, plum tomato sauce, baked longer and cut into squares.

use std::any::Any;

use common::Region;

use super::{CutStyle, Pizza, PizzaKind, Recipe};

const DOUGH: &str = "Extra Thick Crust Dough";
const SAUCE: &str = "Plum Tomato Sauce";
const BAKE_MINUTES: u32 = 35;

#[derive(Debug, Clone)]
pub struct SfaxStyleCheesePizza {
    recipe: Recipe,
}

impl SfaxStyleCheesePizza {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(
                "Sfax Style Cheese Pizza",
                DOUGH,
                SAUCE,
                &["Shredded Mozzarella", "Aged Gouda"],
            ),
        }
    }
}

impl Default for SfaxStyleCheesePizza {
    fn default() -> Self {
        Self::new()
    }
}

impl Pizza for SfaxStyleCheesePizza {
    fn region(&self) -> Region {
        Region::Sfax
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

    fn bake_minutes(&self) -> u32 {
        BAKE_MINUTES
    }

    fn cut_style(&self) -> CutStyle {
        CutStyle::Squares
    }
}

#[derive(Debug, Clone)]
pub struct SfaxStylePepperoniPizza {
    recipe: Recipe,
}

impl SfaxStylePepperoniPizza {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(
                "Sfax Style Pepperoni Pizza",
                DOUGH,
                SAUCE,
                &["Shredded Mozzarella", "Sliced Pepperoni", "Green Peppers"],
            ),
        }
    }
}

impl Default for SfaxStylePepperoniPizza {
    fn default() -> Self {
        Self::new()
    }
}

impl Pizza for SfaxStylePepperoniPizza {
    fn region(&self) -> Region {
        Region::Sfax
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

    fn bake_minutes(&self) -> u32 {
        BAKE_MINUTES
    }

    fn cut_style(&self) -> CutStyle {
        CutStyle::Squares
    }
}

#[derive(Debug, Clone)]
pub struct SfaxStyleClamPizza {
    recipe: Recipe,
}

impl SfaxStyleClamPizza {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(
                "Sfax Style Clam Pizza",
                DOUGH,
                SAUCE,
                &["Shredded Mozzarella", "Kerkennah Clams", "Parsley"],
            ),
        }
    }
}

impl Default for SfaxStyleClamPizza {
    fn default() -> Self {
        Self::new()
    }
}

impl Pizza for SfaxStyleClamPizza {
    fn region(&self) -> Region {
        Region::Sfax
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

    fn bake_minutes(&self) -> u32 {
        BAKE_MINUTES
    }

    fn cut_style(&self) -> CutStyle {
        CutStyle::Squares
    }
}
