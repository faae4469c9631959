//! Scripted [`TradeSource`] for aggregator tests.
//!
//! A [`MockSource`] answers every quote (exact-in or exact-out) with the same
//! scripted outcome, optionally after a delay, and counts invocations so tests
//! can assert that a source was never reached. It also tracks how many calls
//! are currently in flight; a call dropped before completion releases its
//! slot, which makes cancellation observable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ChainId, PlatformId, Trade};
use crate::error::{Result, SourceError};
use crate::port::{ExactInParams, ExactOutParams, SourceOptions, TradeSource};

#[derive(Debug, Clone)]
enum Outcome {
    Trade(Trade),
    NoRoute,
    Fail(String),
    Pending,
}

/// Decrements the in-flight counter when dropped.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct MockSource {
    platform: PlatformId,
    chains: Option<Vec<ChainId>>,
    outcome: Outcome,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
}

impl MockSource {
    /// A source on every chain that has no route.
    pub fn new(platform: &str) -> Self {
        Self {
            platform: PlatformId::from(platform),
            chains: None,
            outcome: Outcome::NoRoute,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn returning(mut self, trade: Trade) -> Self {
        self.outcome = Outcome::Trade(trade);
        self
    }

    /// Fail every call with [`SourceError::Unreachable`].
    pub fn failing(mut self, reason: &str) -> Self {
        self.outcome = Outcome::Fail(reason.to_string());
        self
    }

    /// Never resolve.
    pub fn pending(mut self) -> Self {
        self.outcome = Outcome::Pending;
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Restrict support to `chains`.
    pub fn on_chains(mut self, chains: &[ChainId]) -> Self {
        self.chains = Some(chains.to_vec());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<Option<Trade>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlight::enter(&self.in_flight);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.outcome {
            Outcome::Trade(trade) => Ok(Some(trade.clone())),
            Outcome::NoRoute => Ok(None),
            Outcome::Fail(reason) => Err(SourceError::Unreachable {
                platform: self.platform.clone(),
                reason: reason.clone(),
            }
            .into()),
            Outcome::Pending => std::future::pending().await,
        }
    }
}

#[async_trait]
impl TradeSource for MockSource {
    fn platform(&self) -> &PlatformId {
        &self.platform
    }

    fn supports_chain(&self, chain_id: ChainId) -> bool {
        self.chains
            .as_ref()
            .map_or(true, |chains| chains.contains(&chain_id))
    }

    async fn best_trade_exact_in(
        &self,
        _params: &ExactInParams,
        _options: &SourceOptions,
    ) -> Result<Option<Trade>> {
        self.respond().await
    }

    async fn best_trade_exact_out(
        &self,
        _params: &ExactOutParams,
        _options: &SourceOptions,
    ) -> Result<Option<Trade>> {
        self.respond().await
    }
}
