//! Aggregation tuning.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::Percent;

/// Aggregation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatorConfig {
    /// Upper bound on a single source call. Unbounded when omitted.
    #[serde(default)]
    pub source_timeout_ms: Option<u64>,
    /// Slippage applied when a caller does not specify one (e.g., 0.005 = 0.5%).
    #[serde(default = "default_slippage")]
    pub default_slippage: Decimal,
    /// Let pair-graph venues route through intermediate pairs.
    #[serde(default = "default_use_multihops")]
    pub use_multihops: bool,
    /// Platform name reported by the multi-asset pool venue.
    #[serde(default = "default_pool_platform")]
    pub pool_platform: String,
}

fn default_slippage() -> Decimal {
    Decimal::new(5, 3)
}

fn default_use_multihops() -> bool {
    true
}

fn default_pool_platform() -> String {
    "curve".to_string()
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            source_timeout_ms: None,
            default_slippage: default_slippage(),
            use_multihops: default_use_multihops(),
            pool_platform: default_pool_platform(),
        }
    }
}

impl AggregatorConfig {
    #[must_use]
    pub fn source_timeout(&self) -> Option<Duration> {
        self.source_timeout_ms.map(Duration::from_millis)
    }

    /// Default slippage as a [`Percent`]. Out-of-range values are rejected
    /// when the config is loaded; should one slip through, zero is used.
    #[must_use]
    pub fn default_slippage(&self) -> Percent {
        Percent::try_new(self.default_slippage).unwrap_or(Percent::ZERO)
    }
}
