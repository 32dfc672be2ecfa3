//! Order intent — the engine's directional decision, decoupled from sizing.

use crate::domain::OrderSide;
use serde::{Deserialize, Serialize};

/// Directional trading decision for one finalized bar.
///
/// Carries no quantity: sizing is derived separately from the host-owned
/// position at the moment of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderIntent {
    /// No action for this observation.
    None,
    /// Short average crossed above the long average.
    EnterLong,
    /// Short average crossed below the long average.
    EnterShort,
}

impl OrderIntent {
    /// The order side this intent maps to, if any.
    pub fn side(&self) -> Option<OrderSide> {
        match self {
            OrderIntent::EnterLong => Some(OrderSide::Buy),
            OrderIntent::EnterShort => Some(OrderSide::Sell),
            OrderIntent::None => None,
        }
    }

    /// Check whether the intent asks for an order at all.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, OrderIntent::None)
    }
}
