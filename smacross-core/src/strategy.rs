//! Strategy facade — the host-callback surface of the crossover core.
//!
//! Mirrors the shape of a host-driven strategy: one call per delivered
//! `(index, price)` observation, one call on shutdown. All state mutation
//! happens strictly inside these calls; there is no background work.

use crate::config::StrategySettings;
use crate::domain::{OrderRequest, Position};
use crate::rolling::{AverageError, RollingAverage};
use crate::signals::{CrossoverEngine, CrossoverError, OrderIntent};
use crate::sizing;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the strategy facade.
///
/// None of these are recoverable inside the core; the host guarantees
/// monotonic delivery and supplies observations before requesting averages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error(transparent)]
    Average(#[from] AverageError),
    #[error(transparent)]
    Crossover(#[from] CrossoverError),
}

/// Result of one observation: both averages through the observed index,
/// plus the derived intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub short_avg: Decimal,
    pub long_avg: Decimal,
    pub intent: OrderIntent,
}

/// Dual-SMA crossover strategy core.
///
/// Created once per strategy instance and alive for its whole run; state is
/// never destroyed mid-run, only recomputed when the period parameters
/// change.
#[derive(Debug, Clone)]
pub struct CrossoverStrategy {
    settings: StrategySettings,
    short: RollingAverage,
    long: RollingAverage,
    engine: CrossoverEngine,
}

impl CrossoverStrategy {
    pub fn new(settings: StrategySettings) -> Self {
        let short = RollingAverage::new(settings.effective_short_period());
        let long = RollingAverage::new(settings.effective_long_period());
        Self {
            settings,
            short,
            long,
            engine: CrossoverEngine::new(),
        }
    }

    pub fn settings(&self) -> &StrategySettings {
        &self.settings
    }

    /// The short rolling average (host-side rendering reads values here).
    pub fn short_average(&self) -> &RollingAverage {
        &self.short
    }

    /// The long rolling average.
    pub fn long_average(&self) -> &RollingAverage {
        &self.long
    }

    /// Replace the settings.
    ///
    /// If either period changed, both averages fully recompute over the
    /// retained series and the crossover state is rebuilt by replaying the
    /// recomputed pairs with intents discarded — a historical replay must
    /// never re-fire signals. Volume and close-on-stop changes take effect
    /// without any recomputation.
    pub fn configure(&mut self, settings: StrategySettings) -> Result<(), StrategyError> {
        let periods_changed = settings.effective_short_period()
            != self.settings.effective_short_period()
            || settings.effective_long_period() != self.settings.effective_long_period();
        self.settings = settings;

        if !periods_changed {
            return Ok(());
        }

        self.short.set_period(self.settings.effective_short_period());
        self.long.set_period(self.settings.effective_long_period());

        // Suppressed replay: rebuild the engine snapshot from the
        // recomputed series without emitting any intent.
        self.engine.reset();
        let indices: Vec<usize> = self.short.indices().collect();
        for index in indices {
            let short = self.short.value_at(index)?;
            let long = self.long.value_at(index)?;
            self.engine.process(index, short, long)?;
        }
        Ok(())
    }

    /// Deliver one `(index, price)` observation.
    ///
    /// Ordering is validated before either average is touched: a rejected
    /// call mutates nothing.
    pub fn on_observation(
        &mut self,
        index: usize,
        price: Decimal,
    ) -> Result<Observation, StrategyError> {
        if let Some(tracked) = self.engine.tracked_index() {
            if index < tracked {
                return Err(CrossoverError::OutOfOrderIndex { index, tracked }.into());
            }
        }

        let short_avg = self.short.update(index, price);
        let long_avg = self.long.update(index, price);
        let intent = self.engine.process(index, short_avg, long_avg)?;

        Ok(Observation {
            short_avg,
            long_avg,
            intent,
        })
    }

    /// Shutdown hook: the order that flattens `current_position`, if the
    /// strategy is configured to close on stop and the position is open.
    pub fn on_stop(&self, current_position: Position) -> Option<OrderRequest> {
        if !self.settings.close_on_stop {
            return None;
        }
        sizing::closing_order(current_position)
    }
}
