use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a placed pizza order.
///
/// Wraps a UUID so order IDs cannot be mixed up with other
/// UUID-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random order ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an order ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<OrderId> for Uuid {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// The region a store operates in. Each region bakes its own style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Tunis,
    Sfax,
}

impl Region {
    /// Returns every known region.
    pub fn all() -> &'static [Region] {
        &[Region::Tunis, Region::Sfax]
    }

    /// Returns the region name as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Tunis => "tunis",
            Region::Sfax => "sfax",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a region name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown region: {0:?}")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Region::all()
            .iter()
            .copied()
            .find(|region| region.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}
