//! Strategy configuration.
//!
//! Plain data with serde derives so hosts can load settings from TOML or
//! embed them in a larger config document. Non-positive periods are kept
//! as written and clamped at the point of use — clamping is a
//! normalization, never an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of one crossover strategy instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    /// Window of the short (fast) average.
    pub short_period: i64,
    /// Window of the long (slow) average.
    pub long_period: i64,
    /// Quantity of a fresh entry when flat. Accepted as-is, even if
    /// non-positive.
    pub base_volume: Decimal,
    /// Whether an open position is flattened when the host stops the
    /// strategy.
    pub close_on_stop: bool,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            short_period: 21,
            long_period: 75,
            base_volume: Decimal::ONE,
            close_on_stop: true,
        }
    }
}

impl StrategySettings {
    /// Short period with the minimum-1 clamp applied.
    pub fn effective_short_period(&self) -> i64 {
        self.short_period.max(1)
    }

    /// Long period with the minimum-1 clamp applied.
    pub fn effective_long_period(&self) -> i64 {
        self.long_period.max(1)
    }

    /// Parse settings from a TOML document; missing keys take defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
