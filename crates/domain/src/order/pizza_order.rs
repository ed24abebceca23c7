//! A single pizza taken through the kitchen.

use chrono::{DateTime, Utc};
use common::{OrderId, Region};
use serde::{Deserialize, Serialize};

use crate::pizza::{Pizza, PizzaKind};

use super::{OrderError, OrderState};

/// An order for one pizza.
///
/// Holds the product the store created and records each kitchen step
/// as it happens.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    pizza: Box<dyn Pizza>,
    state: OrderState,
    steps: Vec<String>,
    placed_at: DateTime<Utc>,
}

/// Serializable summary of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub order_id: OrderId,
    pub region: Region,
    pub kind: PizzaKind,
    pub pizza: String,
    pub state: OrderState,
    pub steps: Vec<String>,
    pub placed_at: DateTime<Utc>,
}

// Query methods
impl Order {
    /// Opens an order for a freshly created pizza.
    pub fn new(pizza: Box<dyn Pizza>) -> Self {
        Self {
            id: OrderId::new(),
            pizza,
            state: OrderState::default(),
            steps: Vec::new(),
            placed_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn region(&self) -> Region {
        self.pizza.region()
    }

    pub fn kind(&self) -> PizzaKind {
        self.pizza.kind()
    }

    /// Returns the pizza being worked.
    pub fn pizza(&self) -> &dyn Pizza {
        self.pizza.as_ref()
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Returns the step descriptions recorded so far, oldest first.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Returns true once the pizza is boxed.
    pub fn is_ready(&self) -> bool {
        self.state.is_terminal()
    }

    /// Builds a serializable summary of the order.
    pub fn ticket(&self) -> OrderTicket {
        OrderTicket {
            order_id: self.id,
            region: self.region(),
            kind: self.kind(),
            pizza: self.pizza.name().to_string(),
            state: self.state,
            steps: self.steps.clone(),
            placed_at: self.placed_at,
        }
    }
}

// Kitchen steps
impl Order {
    pub fn prepare(&mut self) -> Result<(), OrderError> {
        self.ensure(self.state.can_prepare(), "prepare")?;
        let step = self.pizza.prepare();
        self.record(step, OrderState::Prepared);
        Ok(())
    }

    pub fn bake(&mut self) -> Result<(), OrderError> {
        self.ensure(self.state.can_bake(), "bake")?;
        let step = self.pizza.bake();
        self.record(step, OrderState::Baked);
        Ok(())
    }

    pub fn cut(&mut self) -> Result<(), OrderError> {
        self.ensure(self.state.can_cut(), "cut")?;
        let step = self.pizza.cut();
        self.record(step, OrderState::Cut);
        Ok(())
    }

    pub fn box_up(&mut self) -> Result<(), OrderError> {
        self.ensure(self.state.can_box(), "box")?;
        let step = self.pizza.box_up();
        self.record(step, OrderState::Boxed);
        Ok(())
    }

    fn ensure(&self, allowed: bool, action: &'static str) -> Result<(), OrderError> {
        if allowed {
            Ok(())
        } else {
            Err(OrderError::InvalidStateTransition {
                current_state: self.state,
                action,
            })
        }
    }

    fn record(&mut self, step: String, next: OrderState) {
        self.steps.push(step);
        self.state = next;
    }
}
