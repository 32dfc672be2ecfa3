//! Domain types shared across the crossover core.

pub mod order;
pub mod position;

pub use order::{OrderRequest, OrderSide, OrderType};
pub use position::Position;
