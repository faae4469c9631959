//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::application::{Aggregator, SourceRegistry};
use crate::infrastructure::config::settings::Config;
use crate::port::{PairQuoter, PoolQuoter, TradeSource};

/// Venue backends supplied by the embedding application.
///
/// A venue whose quoter is absent is not registered.
#[derive(Default)]
pub struct Backends {
    pub pool_quoter: Option<Arc<dyn PoolQuoter>>,
    pub pair_quoter: Option<Arc<dyn PairQuoter>>,
    /// Sources implemented outside this crate (RFQ APIs, order books, ...).
    pub extra_sources: Vec<Arc<dyn TradeSource>>,
}

/// Build the source registry from configuration.
pub fn build_source_registry(config: &Config, backends: Backends) -> SourceRegistry {
    let chains = Arc::new(config.chain_registry());
    let mut builder = SourceRegistry::builder(chains);

    if let Some(quoter) = backends.pair_quoter {
        builder = builder.pair_quoter(quoter);
    }
    for platform in &config.platforms {
        builder = builder.pair_platform(platform.name.as_str(), platform.chains.iter().copied());
    }

    if let Some(quoter) = backends.pool_quoter {
        builder = builder
            .pool_quoter(quoter)
            .pools(config.aggregator.pool_platform.as_str(), config.pools.clone());
    }

    for source in backends.extra_sources {
        builder = builder.source(source);
    }

    builder.build()
}

/// Build a ready-to-use aggregator from configuration.
pub fn build_aggregator(config: &Config, backends: Backends) -> Aggregator {
    let registry = build_source_registry(config, backends);
    info!(
        sources = registry.len(),
        pools = config.pools.len(),
        platforms = config.platforms.len(),
        "Aggregator wired"
    );

    let aggregator = Aggregator::new(registry);
    match config.aggregator.source_timeout() {
        Some(timeout) => aggregator.with_source_timeout(timeout),
        None => aggregator,
    }
}
