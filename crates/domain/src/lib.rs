//! Domain layer for the regional pizza stores.
//!
//! This crate provides:
//! - The `Pizza` product capability and its Tunis and Sfax variants
//! - The `PizzaStore` factory method with one store per region
//! - The order workflow that takes a pizza from creation to the box

pub mod error;
pub mod order;
pub mod pizza;
pub mod store;

pub use error::DomainError;
pub use order::{Order, OrderError, OrderState, OrderTicket};
pub use pizza::{
    CutStyle, Pizza, PizzaKind, Recipe, SfaxStyleCheesePizza, SfaxStyleClamPizza,
    SfaxStylePepperoniPizza, TunisStyleCheesePizza, TunisStyleClamPizza,
    TunisStylePepperoniPizza,
};
pub use store::{Menu, PizzaStore, SfaxStylePizzaStore, TunisStylePizzaStore, for_region};
