//! Static lookup from pizza kind to product constructor.

use common::Region;

use crate::pizza::{Pizza, PizzaKind};

/// Builds a fresh product.
pub type PizzaConstructor = fn() -> Box<dyn Pizza>;

/// Constructs `P` through its `Default` impl.
pub fn build<P: Pizza + Default>() -> Box<dyn Pizza> {
    Box::new(P::default())
}

/// The fixed set of pizzas one region bakes.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    region: Region,
    entries: &'static [(PizzaKind, PizzaConstructor)],
}

impl Menu {
    pub const fn new(region: Region, entries: &'static [(PizzaKind, PizzaConstructor)]) -> Self {
        Self { region, entries }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Lists the kinds on this menu, in menu order.
    pub fn kinds(&self) -> impl Iterator<Item = PizzaKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    /// Returns the constructor for `kind`, if this region bakes it.
    pub fn find(&self, kind: PizzaKind) -> Option<PizzaConstructor> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == kind)
            .map(|(_, constructor)| *constructor)
    }

    /// Builds a new pizza for an order label, or `None` if the label is not on the menu.
    pub fn create(&self, label: &str) -> Option<Box<dyn Pizza>> {
        let kind = PizzaKind::from_label(label)?;
        self.find(kind).map(|constructor| constructor())
    }
}
