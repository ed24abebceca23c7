//! Domain error types.

use common::ParseRegionError;
use thiserror::Error;

use crate::order::OrderError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred while working an order.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// A region name could not be resolved to a store.
    #[error(transparent)]
    Region(#[from] ParseRegionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Region;

    #[test]
    fn test_wraps_order_error() {
        let err: DomainError = OrderError::UnknownPizza {
            region: Region::Tunis,
            requested: "anchovy".to_string(),
        }
        .into();

        assert!(matches!(err, DomainError::Order(_)));
        assert_eq!(
            err.to_string(),
            "Order error: tunis store does not make \"anchovy\" pizza"
        );
    }

    #[test]
    fn test_wraps_region_error() {
        let err: DomainError = "gabes".parse::<Region>().unwrap_err().into();

        assert_eq!(err.to_string(), "Unknown region: \"gabes\"");
    }
}
