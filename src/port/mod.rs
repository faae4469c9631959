//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`TradeSource`] - A liquidity venue the aggregator can quote against
//! - [`PoolQuoter`] - Slot-addressed quoting for multi-asset pools
//! - [`PairQuoter`] - Route search over a pair graph

mod quoter;
mod source;

pub use quoter::{PairQuoter, PoolQuoter, RouteQuote, RouteRequest};
pub use source::{ExactInParams, ExactOutParams, PairGraphOptions, SourceOptions, TradeSource};
