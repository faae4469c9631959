//! Ecorouter - best-execution trade aggregation across DEX liquidity sources.
//!
//! Given a swap pinned on its input or output amount, the aggregator asks
//! every liquidity source operating on the swap's chain for its best trade,
//! concurrently, and returns the trades ranked best-first alongside the
//! failures of the sources that could not quote.
//!
//! # Architecture
//!
//! - **`domain`** - Chains, currencies, amounts, trades, pools, plus the pure
//!   pool routing resolver and trade ranking
//! - **`port`** - The [`TradeSource`](port::TradeSource) capability and the
//!   outbound quoting ports venues are built on
//! - **`adapter`** - Built-in venues: multi-asset pools and pair-graph
//!   platforms
//! - **`application`** - The [`Aggregator`](application::Aggregator) and the
//!   source registry
//! - **`infrastructure`** - TOML configuration, logging and wiring
//!
//! # Features
//!
//! - `testkit` - Scripted sources and quoters for integration tests
//!
//! # Example
//!
//! ```no_run
//! use ecorouter::infrastructure::bootstrap::{build_aggregator, Backends};
//! use ecorouter::infrastructure::config::Config;
//!
//! let config = Config::load("config.toml").unwrap();
//! config.init_logging();
//! let aggregator = build_aggregator(&config, Backends::default());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
