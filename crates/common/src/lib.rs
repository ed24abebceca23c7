//! Shared value types used across the pizzeria crates.

pub mod types;

pub use types::{OrderId, ParseRegionError, Region};
