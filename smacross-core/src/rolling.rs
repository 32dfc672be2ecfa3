//! Incremental rolling average over an append-only, revisable price series.
//!
//! Unlike a batch indicator that recomputes over a full bar slice, this
//! average is fed one observation at a time by the host callback and keeps a
//! running window sum, so each update is O(1) amortized. The most recent
//! index may be revised in place (an in-progress bar); changing the period
//! recomputes every cached average from the retained series.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from average lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AverageError {
    #[error("no average computed at index {0}")]
    IndexNotFound(usize),
}

/// Simple moving average with partial-window semantics.
///
/// Before `period` observations have arrived, the average is taken over the
/// observations seen so far. A non-positive period is clamped to 1; clamping
/// is a normalization, not an error.
///
/// # Preconditions
/// - Indices arrive in non-decreasing order. Only the most recent index may
///   be revised; revising an already-finalized index is never attempted by
///   the signal engine, which rejects out-of-order delivery before this
///   type is touched.
#[derive(Debug, Clone)]
pub struct RollingAverage {
    period: usize,
    /// Raw observations, one entry per distinct index, ascending.
    /// Retained for the life of the instance: a period change must be able
    /// to recompute every average from the start of the series.
    observations: Vec<(usize, Decimal)>,
    /// Computed average per index, at most one entry per index.
    averages: BTreeMap<usize, Decimal>,
    /// Sum of the trailing `min(period, observations.len())` values.
    window_sum: Decimal,
}

impl RollingAverage {
    /// Create an average with the given window length, clamped to >= 1.
    pub fn new(period: i64) -> Self {
        Self {
            period: period.max(1) as usize,
            observations: Vec::new(),
            averages: BTreeMap::new(),
            window_sum: Decimal::ZERO,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of distinct indices observed so far.
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    /// Indices with a computed average, in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.averages.keys().copied()
    }

    /// Change the window length (clamped to >= 1) and recompute every
    /// cached average over the retained series.
    ///
    /// Recomputation runs unconditionally, matching the contract that any
    /// parameter change invalidates all cached averages, not just future
    /// ones.
    pub fn set_period(&mut self, period: i64) {
        self.period = period.max(1) as usize;
        self.recompute();
    }

    /// Record or overwrite the observation at `index` and return the
    /// average through `index` inclusive.
    ///
    /// A repeated index revises the in-progress bar in place; a greater
    /// index appends and rolls the window forward.
    pub fn update(&mut self, index: usize, value: Decimal) -> Decimal {
        match self.observations.last().copied() {
            Some((last_index, last_value)) if last_index == index => {
                // In-place revision of the live bar. The live bar is always
                // inside the trailing window, so the sum adjusts directly.
                self.window_sum += value - last_value;
                if let Some(slot) = self.observations.last_mut() {
                    slot.1 = value;
                }
            }
            _ => {
                self.observations.push((index, value));
                self.window_sum += value;
                let n = self.observations.len();
                if n > self.period {
                    self.window_sum -= self.observations[n - 1 - self.period].1;
                }
            }
        }

        let count = self.observations.len().min(self.period);
        let average = self.window_sum / Decimal::from(count as u64);
        self.averages.insert(index, average);
        average
    }

    /// Look up a previously computed average.
    pub fn value_at(&self, index: usize) -> Result<Decimal, AverageError> {
        self.averages
            .get(&index)
            .copied()
            .ok_or(AverageError::IndexNotFound(index))
    }

    /// Full recomputation path: replay the retained series with a fresh
    /// rolling sum.
    fn recompute(&mut self) {
        self.averages.clear();
        self.window_sum = Decimal::ZERO;

        let mut sum = Decimal::ZERO;
        for i in 0..self.observations.len() {
            let (index, value) = self.observations[i];
            sum += value;
            if i >= self.period {
                sum -= self.observations[i - self.period].1;
            }
            let count = (i + 1).min(self.period);
            self.averages
                .insert(index, sum / Decimal::from(count as u64));
        }
        self.window_sum = sum;
    }
}
