//! Registry of trade sources and its config-driven builder.

use std::sync::Arc;

use crate::adapter::pair_graph::PairGraphSource;
use crate::adapter::pool::PoolSource;
use crate::domain::{ChainId, ChainRegistry, PlatformId, Pool};
use crate::port::{PairQuoter, PoolQuoter, TradeSource};

/// Registry of trade sources.
///
/// Use [`SourceRegistryBuilder`] for construction from configuration.
#[derive(Default)]
pub struct SourceRegistry {
    sources: Vec<Arc<dyn TradeSource>>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing a registry from config.
    #[must_use]
    pub fn builder(chains: Arc<ChainRegistry>) -> SourceRegistryBuilder {
        SourceRegistryBuilder::new(chains)
    }

    /// Register a source. Sources are queried in registration order.
    pub fn register(&mut self, source: Arc<dyn TradeSource>) {
        self.sources.push(source);
    }

    #[must_use]
    pub fn sources(&self) -> &[Arc<dyn TradeSource>] {
        &self.sources
    }

    /// Platforms of the sources operating on `chain_id`.
    #[must_use]
    pub fn platforms_on(&self, chain_id: ChainId) -> Vec<&PlatformId> {
        self.sources
            .iter()
            .filter(|source| source.supports_chain(chain_id))
            .map(|source| source.platform())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub(crate) fn into_sources(self) -> Vec<Arc<dyn TradeSource>> {
        self.sources
    }
}

/// A pair-graph platform instance to register.
struct PairPlatform {
    name: PlatformId,
    chains: Vec<ChainId>,
}

/// Builder for constructing a [`SourceRegistry`].
///
/// Pair-graph platforms are registered first, one source each, followed by
/// the multi-asset pool venue and then any extra sources.
///
/// # Example
///
/// ```ignore
/// let registry = SourceRegistry::builder(chains)
///     .pair_quoter(pair_quoter)
///     .pair_platform("swapr", [ChainId::Gnosis])
///     .pool_quoter(pool_quoter)
///     .pools("curve", pools)
///     .build();
/// ```
pub struct SourceRegistryBuilder {
    chains: Arc<ChainRegistry>,
    pair_quoter: Option<Arc<dyn PairQuoter>>,
    pair_platforms: Vec<PairPlatform>,
    pool_quoter: Option<Arc<dyn PoolQuoter>>,
    pool_platform: Option<PlatformId>,
    pools: Vec<Pool>,
    extra: Vec<Arc<dyn TradeSource>>,
}

impl SourceRegistryBuilder {
    #[must_use]
    pub fn new(chains: Arc<ChainRegistry>) -> Self {
        Self {
            chains,
            pair_quoter: None,
            pair_platforms: Vec::new(),
            pool_quoter: None,
            pool_platform: None,
            pools: Vec::new(),
            extra: Vec::new(),
        }
    }

    #[must_use]
    pub fn pair_quoter(mut self, quoter: Arc<dyn PairQuoter>) -> Self {
        self.pair_quoter = Some(quoter);
        self
    }

    /// Add a pair-graph platform instance operating on `chains`.
    #[must_use]
    pub fn pair_platform(
        mut self,
        name: impl Into<PlatformId>,
        chains: impl IntoIterator<Item = ChainId>,
    ) -> Self {
        self.pair_platforms.push(PairPlatform {
            name: name.into(),
            chains: chains.into_iter().collect(),
        });
        self
    }

    #[must_use]
    pub fn pool_quoter(mut self, quoter: Arc<dyn PoolQuoter>) -> Self {
        self.pool_quoter = Some(quoter);
        self
    }

    /// Enable the multi-asset pool venue under `platform` with `pools`.
    #[must_use]
    pub fn pools(mut self, platform: impl Into<PlatformId>, pools: Vec<Pool>) -> Self {
        self.pool_platform = Some(platform.into());
        self.pools = pools;
        self
    }

    /// Register an additional, externally implemented source.
    #[must_use]
    pub fn source(mut self, source: Arc<dyn TradeSource>) -> Self {
        self.extra.push(source);
        self
    }

    /// Build the registry. Venues whose quoter was never supplied are
    /// skipped.
    #[must_use]
    pub fn build(self) -> SourceRegistry {
        let mut registry = SourceRegistry::new();

        if let Some(quoter) = self.pair_quoter {
            for platform in self.pair_platforms {
                registry.register(Arc::new(PairGraphSource::new(
                    platform.name,
                    platform.chains,
                    Arc::clone(&self.chains),
                    Arc::clone(&quoter),
                )));
            }
        }

        if let (Some(quoter), Some(platform)) = (self.pool_quoter, self.pool_platform) {
            if !self.pools.is_empty() {
                registry.register(Arc::new(PoolSource::new(
                    platform,
                    self.pools,
                    Arc::clone(&self.chains),
                    quoter,
                )));
            }
        }

        for source in self.extra {
            registry.register(source);
        }

        registry
    }
}
