//! Crossover engine — explicit state machine over finalized bars.
//!
//! The engine only ever compares **finalized** bars. A bar finalizes when a
//! strictly greater index arrives; repeated deliveries of the same index are
//! in-progress revisions and never produce a signal. This makes the host's
//! call-ordering assumption an explicit, testable state machine rather than
//! an incidental early-return.

use super::intent::OrderIntent;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from signal processing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrossoverError {
    #[error("observation index {index} precedes tracked index {tracked}")]
    OutOfOrderIndex { index: usize, tracked: usize },
}

/// Engine state: waiting for the first observation, or tracking the live
/// bar plus the last finalized average pair.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CrossoverState {
    AwaitingFirst,
    Tracking {
        /// Index of the in-progress bar.
        index: usize,
        /// Live short/long averages for the in-progress bar.
        short: Decimal,
        long: Decimal,
        /// Finalized (short, long) pair of the bar before the live one.
        finalized_prev: Option<(Decimal, Decimal)>,
    },
}

/// Detects sign changes in the short/long average difference across
/// consecutive finalized bars.
///
/// State is owned exclusively by one strategy instance and mutated only
/// inside [`CrossoverEngine::process`]; a host driving multiple symbols
/// needs one engine each.
#[derive(Debug, Clone)]
pub struct CrossoverEngine {
    state: CrossoverState,
}

impl Default for CrossoverEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossoverEngine {
    pub fn new() -> Self {
        Self {
            state: CrossoverState::AwaitingFirst,
        }
    }

    /// Index of the in-progress bar, if any observation has arrived.
    pub fn tracked_index(&self) -> Option<usize> {
        match self.state {
            CrossoverState::AwaitingFirst => None,
            CrossoverState::Tracking { index, .. } => Some(index),
        }
    }

    /// Drop all state and return to awaiting the first observation.
    pub fn reset(&mut self) {
        self.state = CrossoverState::AwaitingFirst;
    }

    /// Feed the averages for `index` and derive an intent.
    ///
    /// - Same index as the live bar: revise the live values, emit
    ///   [`OrderIntent::None`] (no double-firing).
    /// - Greater index: the live bar finalizes; if a previously finalized
    ///   pair exists, evaluate the crossover between that pair and the
    ///   just-finalized one.
    /// - Smaller index: [`CrossoverError::OutOfOrderIndex`].
    pub fn process(
        &mut self,
        index: usize,
        short: Decimal,
        long: Decimal,
    ) -> Result<OrderIntent, CrossoverError> {
        match &mut self.state {
            CrossoverState::AwaitingFirst => {
                self.state = CrossoverState::Tracking {
                    index,
                    short,
                    long,
                    finalized_prev: None,
                };
                Ok(OrderIntent::None)
            }
            CrossoverState::Tracking {
                index: tracked,
                short: live_short,
                long: live_long,
                finalized_prev,
            } => {
                if index < *tracked {
                    return Err(CrossoverError::OutOfOrderIndex {
                        index,
                        tracked: *tracked,
                    });
                }

                if index == *tracked {
                    // Bar still in progress: track the revision, no signal.
                    *live_short = short;
                    *live_long = long;
                    return Ok(OrderIntent::None);
                }

                // The tracked bar just finalized with its last live values.
                let finalized = (*live_short, *live_long);
                let intent = match finalized_prev {
                    Some(prev) => evaluate(*prev, finalized),
                    None => OrderIntent::None,
                };

                self.state = CrossoverState::Tracking {
                    index,
                    short,
                    long,
                    finalized_prev: Some(finalized),
                };
                Ok(intent)
            }
        }
    }
}

/// Crossover predicate over two consecutive finalized (short, long) pairs.
///
/// The short average must strictly clear the long average on the newer bar,
/// so an unbroken run of exactly equal averages fires nothing.
fn evaluate(prev: (Decimal, Decimal), current: (Decimal, Decimal)) -> OrderIntent {
    let (prev_short, prev_long) = prev;
    let (cur_short, cur_long) = current;

    if prev_short <= prev_long && cur_short > cur_long {
        OrderIntent::EnterLong
    } else if prev_short >= prev_long && cur_short < cur_long {
        OrderIntent::EnterShort
    } else {
        OrderIntent::None
    }
}
