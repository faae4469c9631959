//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file.
//!
//! # Example
//!
//! ```no_run
//! use ecorouter::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::aggregator::AggregatorConfig;
use super::chain::{ChainConfig, PlatformConfig};
use super::logging::LoggingConfig;
use crate::domain::{ChainId, ChainRegistry, Percent, Pool};
use crate::error::{ConfigError, Result};
use crate::port::SourceOptions;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Aggregation tuning.
    #[serde(default)]
    pub aggregator: AggregatorConfig,

    /// Per-chain asset registry.
    ///
    /// When empty, the built-in registry covering every known chain is used.
    /// When present, only the listed chains are enabled.
    #[serde(default)]
    pub chains: Vec<ChainConfig>,

    /// Pair-graph platform instances.
    #[serde(default)]
    pub platforms: Vec<PlatformConfig>,

    /// Multi-asset pools available to the pool venue.
    #[serde(default)]
    pub pools: Vec<Pool>,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
    .into()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., slippage outside `[0, 1]`)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let slippage = self.aggregator.default_slippage;
        if slippage < Decimal::ZERO || slippage > Decimal::ONE {
            return Err(invalid("default_slippage", "must be between 0 and 1"));
        }
        if self.aggregator.source_timeout_ms == Some(0) {
            return Err(invalid("source_timeout_ms", "must be greater than 0"));
        }
        if self.aggregator.pool_platform.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "pool_platform",
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(invalid("format", "must be \"pretty\" or \"json\""));
        }

        let mut seen = HashSet::new();
        for chain in &self.chains {
            if !seen.insert(chain.chain_id) {
                return Err(invalid(
                    "chains",
                    format!("{} is configured more than once", chain.chain_id),
                ));
            }
        }

        let enabled: HashSet<ChainId> = self.chain_registry().chains().collect();

        for platform in &self.platforms {
            if platform.name.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "platforms.name",
                }
                .into());
            }
            if platform.chains.is_empty() {
                return Err(invalid(
                    "platforms.chains",
                    format!("{} lists no chains", platform.name),
                ));
            }
            if let Some(chain) = platform.chains.iter().find(|c| !enabled.contains(*c)) {
                return Err(invalid(
                    "platforms.chains",
                    format!("{} refers to unconfigured chain {chain}", platform.name),
                ));
            }
        }

        for pool in &self.pools {
            if pool.name.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "pools.name",
                }
                .into());
            }
            if pool.tokens.len() < 2 {
                return Err(invalid(
                    "pools.tokens",
                    format!("{} needs at least two tokens", pool.name),
                ));
            }
            if !enabled.contains(&pool.chain_id) {
                return Err(invalid(
                    "pools.chain_id",
                    format!("{} refers to unconfigured chain {}", pool.name, pool.chain_id),
                ));
            }
        }

        Ok(())
    }

    /// Initialize the tracing subscriber with logging configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Chain registry: the configured chains, or the built-in defaults when
    /// none are configured.
    #[must_use]
    pub fn chain_registry(&self) -> ChainRegistry {
        if self.chains.is_empty() {
            return ChainRegistry::with_defaults();
        }
        let mut registry = ChainRegistry::new();
        for chain in &self.chains {
            registry.insert(chain.chain_id, chain.assets());
        }
        registry
    }

    #[must_use]
    pub fn default_slippage(&self) -> Percent {
        self.aggregator.default_slippage()
    }

    /// Per-call source options for a swap on `chain_id`.
    #[must_use]
    pub fn source_options(&self, chain_id: ChainId) -> SourceOptions {
        let options = SourceOptions::default().with_multihops(self.aggregator.use_multihops);
        match self
            .chains
            .iter()
            .find(|chain| chain.chain_id == chain_id)
            .and_then(|chain| chain.rpc_url.clone())
        {
            Some(url) => options.with_provider(url),
            None => options,
        }
    }
}
