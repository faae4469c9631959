//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`]: [`MockSource`](source::MockSource), a scripted
//!   [`TradeSource`](crate::port::TradeSource) with call counters.
//! - [`quoter`]: Scripted pool and pair quoters.
//! - [`domain`]: Builders for tokens, pool tokens and trades.
//! - [`config`]: Canonical TOML configurations.

pub mod config;
pub mod domain;
pub mod quoter;
pub mod source;
