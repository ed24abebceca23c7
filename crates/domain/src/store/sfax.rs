//! Sfax-style store.

use common::Region;

use crate::pizza::{
    Pizza, PizzaKind, SfaxStyleCheesePizza, SfaxStyleClamPizza, SfaxStylePepperoniPizza,
};

use super::{Menu, PizzaStore, build};

static MENU: Menu = Menu::new(
    Region::Sfax,
    &[
        (PizzaKind::Cheese, build::<SfaxStyleCheesePizza>),
        (PizzaKind::Pepperoni, build::<SfaxStylePepperoniPizza>),
        (PizzaKind::Clam, build::<SfaxStyleClamPizza>),
    ],
);

/// Bakes Sfax-style pizzas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SfaxStylePizzaStore;

impl PizzaStore for SfaxStylePizzaStore {
    fn region(&self) -> Region {
        Region::Sfax
    }

    fn menu(&self) -> &'static Menu {
        &MENU
    }

    fn create_pizza(&self, kind: &str) -> Option<Box<dyn Pizza>> {
        MENU.create(kind)
    }
}
