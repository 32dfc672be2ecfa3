//! SMACROSS Core — host-independent moving-average crossover strategy core.
//!
//! This crate contains the decision-making heart of a dual-SMA crossover
//! strategy, with everything host-specific (data feed, order routing, UI,
//! parameter metadata) pushed behind narrow collaborator traits:
//! - Domain types (order requests, order sides, signed positions)
//! - Incremental rolling average with in-place revision of the live bar
//! - Crossover signal engine (explicit state machine over finalized bars)
//! - Order sizing from signal intent + externally-owned position state
//! - Strategy facade wiring the pieces into the host callback shape
//!
//! The host delivers `(index, price)` observations one at a time on a single
//! logical thread; the core never blocks, spawns, or retries.

pub mod config;
pub mod domain;
pub mod host;
pub mod rolling;
pub mod signals;
pub mod sizing;
pub mod strategy;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: core types are Send + Sync.
    ///
    /// A host may drive one strategy instance per symbol from a worker pool;
    /// each instance owns its state exclusively, but the types themselves
    /// must be movable across threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::OrderRequest>();
        require_sync::<domain::OrderRequest>();
        require_send::<domain::Position>();
        require_sync::<domain::Position>();

        require_send::<rolling::RollingAverage>();
        require_sync::<rolling::RollingAverage>();

        require_send::<signals::OrderIntent>();
        require_sync::<signals::OrderIntent>();
        require_send::<signals::CrossoverEngine>();
        require_sync::<signals::CrossoverEngine>();

        require_send::<config::StrategySettings>();
        require_sync::<config::StrategySettings>();

        require_send::<strategy::CrossoverStrategy>();
        require_sync::<strategy::CrossoverStrategy>();
    }
}
