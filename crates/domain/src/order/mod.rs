//! Pizza orders and the kitchen workflow state.

mod pizza_order;
mod state;

pub use pizza_order::{Order, OrderTicket};
pub use state::OrderState;

use common::Region;
use thiserror::Error;

/// Errors that can occur while taking or working an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The store has no pizza matching the requested label.
    #[error("{region} store does not make {requested:?} pizza")]
    UnknownPizza { region: Region, requested: String },

    /// Order is not in the expected state.
    #[error("Invalid state transition: cannot {action} from {current_state} state")]
    InvalidStateTransition {
        current_state: OrderState,
        action: &'static str,
    },
}
