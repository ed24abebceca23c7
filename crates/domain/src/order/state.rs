//! Pizza order state machine.

use serde::{Deserialize, Serialize};

/// The state of a pizza order as it moves through the kitchen.
///
/// State transitions:
/// ```text
/// Created ──► Prepared ──► Baked ──► Cut ──► Boxed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderState {
    /// The store has produced the pizza, nothing has been done to it yet.
    #[default]
    Created,

    /// Dough tossed, sauce and toppings added.
    Prepared,

    /// Out of the oven.
    Baked,

    /// Sliced.
    Cut,

    /// Boxed and ready for pickup (terminal state).
    Boxed,
}

impl OrderState {
    /// Returns true if the pizza can be prepared in this state.
    pub fn can_prepare(&self) -> bool {
        matches!(self, OrderState::Created)
    }

    /// Returns true if the pizza can be baked in this state.
    pub fn can_bake(&self) -> bool {
        matches!(self, OrderState::Prepared)
    }

    /// Returns true if the pizza can be cut in this state.
    pub fn can_cut(&self) -> bool {
        matches!(self, OrderState::Baked)
    }

    /// Returns true if the pizza can be boxed in this state.
    pub fn can_box(&self) -> bool {
        matches!(self, OrderState::Cut)
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Boxed)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Created => "Created",
            OrderState::Prepared => "Prepared",
            OrderState::Baked => "Baked",
            OrderState::Cut => "Cut",
            OrderState::Boxed => "Boxed",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_created() {
        assert_eq!(OrderState::default(), OrderState::Created);
    }

    #[test]
    fn test_created_can_prepare() {
        assert!(OrderState::Created.can_prepare());
        assert!(!OrderState::Prepared.can_prepare());
        assert!(!OrderState::Baked.can_prepare());
        assert!(!OrderState::Cut.can_prepare());
        assert!(!OrderState::Boxed.can_prepare());
    }

    #[test]
    fn test_prepared_can_bake() {
        assert!(!OrderState::Created.can_bake());
        assert!(OrderState::Prepared.can_bake());
        assert!(!OrderState::Baked.can_bake());
        assert!(!OrderState::Cut.can_bake());
        assert!(!OrderState::Boxed.can_bake());
    }

    #[test]
    fn test_baked_can_cut() {
        assert!(!OrderState::Created.can_cut());
        assert!(!OrderState::Prepared.can_cut());
        assert!(OrderState::Baked.can_cut());
        assert!(!OrderState::Cut.can_cut());
        assert!(!OrderState::Boxed.can_cut());
    }

    #[test]
    fn test_cut_can_box() {
        assert!(!OrderState::Created.can_box());
        assert!(!OrderState::Prepared.can_box());
        assert!(!OrderState::Baked.can_box());
        assert!(OrderState::Cut.can_box());
        assert!(!OrderState::Boxed.can_box());
    }

    #[test]
    fn test_only_boxed_is_terminal() {
        assert!(!OrderState::Created.is_terminal());
        assert!(!OrderState::Prepared.is_terminal());
        assert!(!OrderState::Baked.is_terminal());
        assert!(!OrderState::Cut.is_terminal());
        assert!(OrderState::Boxed.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderState::Created.to_string(), "Created");
        assert_eq!(OrderState::Prepared.to_string(), "Prepared");
        assert_eq!(OrderState::Baked.to_string(), "Baked");
        assert_eq!(OrderState::Cut.to_string(), "Cut");
        assert_eq!(OrderState::Boxed.to_string(), "Boxed");
    }

    #[test]
    fn test_serialization() {
        let state = OrderState::Baked;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: OrderState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
