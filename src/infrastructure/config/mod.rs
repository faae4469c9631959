//! Infrastructure configuration modules.

pub mod aggregator;
pub mod chain;
pub mod logging;
pub mod settings;

pub use settings::Config;
