//! Order request types emitted toward the host's order-routing sink.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// The opposite direction (used when flattening a position).
    pub fn opposite(&self) -> Self {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }
}

/// What kind of order the core asks the host to route.
///
/// The crossover core only ever emits market orders; the enum exists so the
/// request shape stays stable if a host-side policy layer adds other types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    /// Fill immediately at the prevailing price.
    Market,
}

/// A fully-specified order request handed to the host.
///
/// Fire-and-forget from the core's perspective: fills, rejections, and
/// partial executions are entirely the host's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
}

impl OrderRequest {
    /// Create a market order request.
    pub fn market(side: OrderSide, quantity: Decimal) -> Self {
        Self {
            side,
            order_type: OrderType::Market,
            quantity,
        }
    }
}
