//! Signed position quantity, owned by the host and read-only to the core.

use super::order::OrderSide;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed position: positive = long, negative = short, zero = flat.
///
/// The host owns the real position; the core receives a fresh snapshot at
/// every decision point and never caches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position(pub Decimal);

impl Position {
    pub fn flat() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_long(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_short(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_flat(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Unsigned size of the position.
    pub fn magnitude(&self) -> Decimal {
        self.0.abs()
    }

    /// The order side that flattens this position, or `None` when flat.
    pub fn closing_side(&self) -> Option<OrderSide> {
        if self.is_long() {
            Some(OrderSide::Sell)
        } else if self.is_short() {
            Some(OrderSide::Buy)
        } else {
            None
        }
    }
}

impl From<Decimal> for Position {
    fn from(quantity: Decimal) -> Self {
        Self(quantity)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
