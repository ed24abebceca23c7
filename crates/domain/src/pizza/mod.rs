//! Pizza products and their regional variants.

mod sfax;
mod tunis;

pub use sfax::{SfaxStyleCheesePizza, SfaxStyleClamPizza, SfaxStylePepperoniPizza};
pub use tunis::{TunisStyleCheesePizza, TunisStyleClamPizza, TunisStylePepperoniPizza};

use std::any::Any;
use std::fmt::Debug;

use common::Region;
use serde::{Deserialize, Serialize};

/// The flavors every store recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaKind {
    Cheese,
    Pepperoni,
    Clam,
}

impl PizzaKind {
    /// Returns every kind, in menu order.
    pub fn all() -> &'static [PizzaKind] {
        &[PizzaKind::Cheese, PizzaKind::Pepperoni, PizzaKind::Clam]
    }

    /// Matches an order label exactly against the known literals.
    ///
    /// Matching is case-sensitive and does not trim: `"Cheese"` and
    /// `" cheese"` are not recognized.
    pub fn from_label(label: &str) -> Option<PizzaKind> {
        PizzaKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == label)
    }

    /// Returns the order label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaKind::Cheese => "cheese",
            PizzaKind::Pepperoni => "pepperoni",
            PizzaKind::Clam => "clam",
        }
    }
}

impl std::fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a baked pizza is sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutStyle {
    Diagonal,
    Squares,
}

/// What goes into a pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub dough: String,
    pub sauce: String,
    pub toppings: Vec<String>,
}

impl Recipe {
    /// Creates a recipe from its parts.
    pub fn new(
        name: impl Into<String>,
        dough: impl Into<String>,
        sauce: impl Into<String>,
        toppings: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            dough: dough.into(),
            sauce: sauce.into(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A pizza produced by a regional store.
///
/// Concrete products provide their identity and recipe; the preparation
/// steps have default implementations that regional styles may override.
/// Each step returns a description of what was done.
pub trait Pizza: Any + Debug + Send + Sync {
    /// The region whose style this pizza follows.
    fn region(&self) -> Region;

    /// The flavor of this pizza.
    fn kind(&self) -> PizzaKind;

    /// The recipe this pizza was built from.
    fn recipe(&self) -> &Recipe;

    /// Exposes the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the display name.
    fn name(&self) -> &str {
        &self.recipe().name
    }

    /// Minutes in the oven.
    fn bake_minutes(&self) -> u32 {
        25
    }

    /// How the pizza is sliced after baking.
    fn cut_style(&self) -> CutStyle {
        CutStyle::Diagonal
    }

    fn prepare(&self) -> String {
        let recipe = self.recipe();
        let step = format!(
            "Preparing {}: tossing {}, adding {}, topping with {}",
            recipe.name,
            recipe.dough,
            recipe.sauce,
            recipe.toppings.join(", ")
        );
        tracing::debug!(pizza = %recipe.name, "{step}");
        step
    }

    fn bake(&self) -> String {
        let step = format!("Baking {} for {} minutes", self.name(), self.bake_minutes());
        tracing::debug!(pizza = %self.name(), "{step}");
        step
    }

    fn cut(&self) -> String {
        let step = match self.cut_style() {
            CutStyle::Diagonal => format!("Cutting {} into diagonal slices", self.name()),
            CutStyle::Squares => format!("Cutting {} into square slices", self.name()),
        };
        tracing::debug!(pizza = %self.name(), "{step}");
        step
    }

    fn box_up(&self) -> String {
        let step = format!("Placing {} in an official {} box", self.name(), self.region());
        tracing::debug!(pizza = %self.name(), "{step}");
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_matches_literals() {
        assert_eq!(PizzaKind::from_label("cheese"), Some(PizzaKind::Cheese));
        assert_eq!(PizzaKind::from_label("pepperoni"), Some(PizzaKind::Pepperoni));
        assert_eq!(PizzaKind::from_label("clam"), Some(PizzaKind::Clam));
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(PizzaKind::from_label("Cheese"), None);
        assert_eq!(PizzaKind::from_label(" cheese"), None);
        assert_eq!(PizzaKind::from_label("cheese "), None);
        assert_eq!(PizzaKind::from_label(""), None);
        assert_eq!(PizzaKind::from_label("anchovy"), None);
    }

    #[test]
    fn test_display_round_trips_through_label() {
        for kind in PizzaKind::all() {
            assert_eq!(PizzaKind::from_label(&kind.to_string()), Some(*kind));
        }
    }

    #[test]
    fn test_default_steps_describe_the_pizza() {
        let pizza = TunisStyleCheesePizza::new();

        assert!(pizza.prepare().contains("Thin Crust Dough"));
        assert_eq!(
            pizza.bake(),
            "Baking Tunis Style Cheese Pizza for 25 minutes"
        );
        assert_eq!(
            pizza.cut(),
            "Cutting Tunis Style Cheese Pizza into diagonal slices"
        );
        assert_eq!(
            pizza.box_up(),
            "Placing Tunis Style Cheese Pizza in an official tunis box"
        );
    }

    #[test]
    fn test_regional_overrides() {
        let pizza = SfaxStyleCheesePizza::new();

        assert_eq!(pizza.bake_minutes(), 35);
        assert_eq!(pizza.cut_style(), CutStyle::Squares);
        assert_eq!(
            pizza.cut(),
            "Cutting Sfax Style Cheese Pizza into square slices"
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PizzaKind::Pepperoni).unwrap();
        assert_eq!(json, "\"pepperoni\"");
    }
}
