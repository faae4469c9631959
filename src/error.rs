use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::id::PlatformId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures raised by a single liquidity source while quoting.
///
/// Finding no route is not a failure: sources report it as `Ok(None)`.
///
/// The aggregator records these and drops the source from the result set;
/// they never abort sibling sources.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    #[error("{platform} unreachable: {reason}")]
    Unreachable { platform: PlatformId, reason: String },

    #[error("{platform} timed out after {after_ms}ms")]
    TimedOut { platform: PlatformId, after_ms: u64 },

    #[error("{platform} rejected quote: {reason}")]
    QuoteRejected { platform: PlatformId, reason: String },
}

impl SourceError {
    /// Platform that produced the failure.
    #[must_use]
    pub fn platform(&self) -> &PlatformId {
        match self {
            Self::Unreachable { platform, .. }
            | Self::TimedOut { platform, .. }
            | Self::QuoteRejected { platform, .. } => platform,
        }
    }
}

/// Errors that terminate an aggregation call before any source runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("unsupported chain: neither side of the swap resolves a chain id")]
    UnsupportedChain,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
