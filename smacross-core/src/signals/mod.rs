//! Signal generation — position-agnostic crossover detection.
//!
//! Signals never depend on position state; they express "what do I want?"
//! based purely on the two rolling-average streams. Sizing against the
//! actual position happens in [`crate::sizing`].

pub mod engine;
pub mod intent;

pub use engine::{CrossoverEngine, CrossoverError};
pub use intent::OrderIntent;
