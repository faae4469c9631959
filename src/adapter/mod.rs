//! Implementations of ports (hexagonal adapters).
//!
//! Each venue adapter implements [`TradeSource`](crate::port::TradeSource)
//! on top of an outbound quoting port.

pub mod pair_graph;
pub mod pool;

pub use pair_graph::PairGraphSource;
pub use pool::PoolSource;
