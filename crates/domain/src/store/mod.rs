//! Regional pizza stores.
//!
//! Every store answers the same factory method, [`PizzaStore::create_pizza`],
//! with products in its own regional style. The shared ordering workflow in
//! [`PizzaStore::order_pizza`] only ever sees the abstract [`Pizza`].

mod menu;
mod sfax;
mod tunis;

pub use menu::{Menu, PizzaConstructor, build};
pub use sfax::SfaxStylePizzaStore;
pub use tunis::TunisStylePizzaStore;

use common::Region;

use crate::order::{Order, OrderError};
use crate::pizza::Pizza;

/// A store that turns order labels into pizzas.
pub trait PizzaStore: Send + Sync {
    /// The region this store bakes for.
    fn region(&self) -> Region;

    /// The pizzas this store makes.
    fn menu(&self) -> &'static Menu;

    /// Builds a new pizza for `kind`.
    ///
    /// Recognizes exactly `"cheese"`, `"pepperoni"` and `"clam"`. Any other
    /// label yields `None`. Every call constructs a fresh instance.
    fn create_pizza(&self, kind: &str) -> Option<Box<dyn Pizza>>;

    /// Takes an order: creates the pizza, then prepares, bakes, cuts and boxes it.
    ///
    /// Returns [`OrderError::UnknownPizza`] when `create_pizza` has nothing
    /// for the label.
    #[tracing::instrument(skip(self), fields(region = %self.region()))]
    fn order_pizza(&self, kind: &str) -> Result<Order, OrderError> {
        let region = self.region();

        let Some(pizza) = self.create_pizza(kind) else {
            metrics::counter!("pizza_orders_rejected_total", "region" => region.as_str())
                .increment(1);
            return Err(OrderError::UnknownPizza {
                region,
                requested: kind.to_string(),
            });
        };

        let mut order = Order::new(pizza);
        order.prepare()?;
        order.bake()?;
        order.cut()?;
        order.box_up()?;

        metrics::counter!(
            "pizzas_ordered_total",
            "region" => region.as_str(),
            "kind" => order.kind().as_str()
        )
        .increment(1);
        tracing::info!(order_id = %order.id(), pizza = %order.pizza().name(), "order ready");

        Ok(order)
    }
}

/// Opens the store for `region`.
pub fn for_region(region: Region) -> Box<dyn PizzaStore> {
    match region {
        Region::Tunis => Box::new(TunisStylePizzaStore),
        Region::Sfax => Box::new(SfaxStylePizzaStore),
    }
}
