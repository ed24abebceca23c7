//! Tunis-style store.

use common::Region;

use crate::pizza::{
    Pizza, PizzaKind, TunisStyleCheesePizza, TunisStyleClamPizza, TunisStylePepperoniPizza,
};

use super::{Menu, PizzaStore, build};

static MENU: Menu = Menu::new(
    Region::Tunis,
    &[
        (PizzaKind::Cheese, build::<TunisStyleCheesePizza>),
        (PizzaKind::Pepperoni, build::<TunisStylePepperoniPizza>),
        (PizzaKind::Clam, build::<TunisStyleClamPizza>),
    ],
);

/// Bakes Tunis-style pizzas.
#[derive(Debug, Clone, Copy, Default)]
pub struct TunisStylePizzaStore;

impl PizzaStore for TunisStylePizzaStore {
    fn region(&self) -> Region {
        Region::Tunis
    }

    fn menu(&self) -> &'static Menu {
        &MENU
    }

    fn create_pizza(&self, kind: &str) -> Option<Box<dyn Pizza>> {
        MENU.create(kind)
    }
}
