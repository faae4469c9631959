//! Application services (use cases).
//!
//! These services coordinate domain logic and trade sources to implement
//! best-execution aggregation.

pub mod aggregator;
pub mod registry;

pub use aggregator::{AggregateResults, Aggregator};
pub use registry::{SourceRegistry, SourceRegistryBuilder};
