//! Order sizing — resolves a directional intent against the host-owned
//! position into a concrete market order request.
//!
//! The core is always either flat or holding one net position, so an entry
//! in the opposite direction both flattens the open position and establishes
//! the new one in a single order.

use crate::domain::{OrderRequest, Position};
use crate::signals::OrderIntent;
use rust_decimal::Decimal;

/// Resolve an entry intent into an order request.
///
/// Quantity is `base_volume` when flat, and `base_volume + |position|`
/// otherwise — one formula covers both reversing an opposite position and
/// adding to a same-direction one.
///
/// `base_volume` is accepted as-is; a non-positive volume is the host's
/// configuration mistake, not a core error.
pub fn entry_order(
    intent: OrderIntent,
    current_position: Position,
    base_volume: Decimal,
) -> Option<OrderRequest> {
    let side = intent.side()?;
    let quantity = if current_position.is_flat() {
        base_volume
    } else {
        base_volume + current_position.magnitude()
    };
    Some(OrderRequest::market(side, quantity))
}

/// Resolve the order that flattens `current_position`, or `None` when flat.
pub fn closing_order(current_position: Position) -> Option<OrderRequest> {
    let side = current_position.closing_side()?;
    Some(OrderRequest::market(side, current_position.magnitude()))
}
