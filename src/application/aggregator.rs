//! Best-execution aggregation across trade sources.
//!
//! One call fans the request out to every source operating on the swap's
//! chain, waits for all of them to settle and returns the surviving trades
//! best-first together with every failure. A failing, slow or route-less
//! source never affects its siblings.
//!
//! Sources are driven inside the caller's future rather than spawned, so
//! dropping an aggregation call cancels every in-flight quote.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{sort_trades_by_execution_price, ChainId, PlatformId, Trade, TradeType};
use crate::error::{AggregationError, Error, Result, SourceError};
use crate::port::{ExactInParams, ExactOutParams, SourceOptions, TradeSource};

use super::registry::SourceRegistry;

/// Outcome of one aggregation call.
#[derive(Debug, Default)]
pub struct AggregateResults {
    /// Trades ordered best-first.
    pub trades: Vec<Trade>,
    /// Failures recorded during the call, in no particular order.
    pub errors: Vec<Error>,
}

impl AggregateResults {
    fn unsupported_chain() -> Self {
        Self {
            trades: Vec::new(),
            errors: vec![AggregationError::UnsupportedChain.into()],
        }
    }

    /// Best trade, if any source quoted.
    #[must_use]
    pub fn best(&self) -> Option<&Trade> {
        self.trades.first()
    }
}

/// Fans swap requests out to a fixed set of trade sources.
pub struct Aggregator {
    sources: Vec<Arc<dyn TradeSource>>,
    source_timeout: Option<Duration>,
}

impl Aggregator {
    #[must_use]
    pub fn new(registry: SourceRegistry) -> Self {
        Self {
            sources: registry.into_sources(),
            source_timeout: None,
        }
    }

    /// Bound each source call; an elapsed bound is recorded as
    /// [`SourceError::TimedOut`].
    #[must_use]
    pub fn with_source_timeout(mut self, timeout: Duration) -> Self {
        self.source_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Quote selling a fixed input amount on every applicable source.
    ///
    /// Never fails: an unresolvable chain yields a single
    /// [`AggregationError::UnsupportedChain`] error without invoking any
    /// source, and source failures are collected into
    /// [`AggregateResults::errors`].
    pub async fn get_exact_in(
        &self,
        params: &ExactInParams,
        options: &SourceOptions,
    ) -> AggregateResults {
        let Some(chain_id) = params.chain_id() else {
            warn!(trade_type = %TradeType::ExactInput, "Neither side of the swap carries a chain");
            return AggregateResults::unsupported_chain();
        };
        self.fan_out(chain_id, TradeType::ExactInput, |source| {
            source.best_trade_exact_in(params, options)
        })
        .await
    }

    /// Quote buying a fixed output amount on every applicable source.
    ///
    /// Same failure semantics as [`Aggregator::get_exact_in`].
    pub async fn get_exact_out(
        &self,
        params: &ExactOutParams,
        options: &SourceOptions,
    ) -> AggregateResults {
        let Some(chain_id) = params.chain_id() else {
            warn!(trade_type = %TradeType::ExactOutput, "Neither side of the swap carries a chain");
            return AggregateResults::unsupported_chain();
        };
        self.fan_out(chain_id, TradeType::ExactOutput, |source| {
            source.best_trade_exact_out(params, options)
        })
        .await
    }

    async fn fan_out<'a, F, Fut>(
        &'a self,
        chain_id: ChainId,
        trade_type: TradeType,
        quote: F,
    ) -> AggregateResults
    where
        F: Fn(&'a dyn TradeSource) -> Fut,
        Fut: Future<Output = Result<Option<Trade>>>,
    {
        let tasks: Vec<_> = self
            .sources
            .iter()
            .map(|source| &**source)
            .filter(|source| source.supports_chain(chain_id))
            .map(|source| {
                let platform = source.platform().clone();
                debug!(platform = %platform, chain = %chain_id, %trade_type, "Querying source");
                let pending = quote(source);
                async move {
                    let outcome = self.bounded(&platform, pending).await;
                    (platform, outcome)
                }
            })
            .collect();

        let queried = tasks.len();
        let outcomes = join_all(tasks).await;

        let mut trades = Vec::new();
        let mut errors = Vec::new();
        for (platform, outcome) in outcomes {
            match outcome {
                Ok(Some(trade)) => trades.push(trade),
                Ok(None) => debug!(platform = %platform, "Source has no route"),
                Err(err) => {
                    warn!(platform = %platform, error = %err, "Source failed");
                    errors.push(err);
                }
            }
        }

        let trades = sort_trades_by_execution_price(trades);
        info!(
            chain = %chain_id,
            %trade_type,
            sources = queried,
            trades = trades.len(),
            errors = errors.len(),
            "Aggregation complete"
        );

        AggregateResults { trades, errors }
    }

    async fn bounded<Fut>(&self, platform: &PlatformId, pending: Fut) -> Result<Option<Trade>>
    where
        Fut: Future<Output = Result<Option<Trade>>>,
    {
        let Some(limit) = self.source_timeout else {
            return pending.await;
        };
        match tokio::time::timeout(limit, pending).await {
            Ok(outcome) => outcome,
            Err(_) => Err(SourceError::TimedOut {
                platform: platform.clone(),
                after_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }
            .into()),
        }
    }
}
