//! Trade source port: the capability every liquidity venue exposes.

use alloy_primitives::Address;
use async_trait::async_trait;
use url::Url;

use crate::domain::{ChainId, Currency, CurrencyAmount, Percent, PlatformId, Trade};
use crate::error::Result;

/// Swap request pinned on the input amount.
#[derive(Debug, Clone)]
pub struct ExactInParams {
    pub currency_amount_in: CurrencyAmount,
    pub currency_out: Currency,
    pub maximum_slippage: Percent,
    /// Recipient of the output; venues default to the caller.
    pub receiver: Option<Address>,
    /// Account placing the order, for venues that sign off-chain orders.
    pub user: Option<Address>,
}

impl ExactInParams {
    pub fn new(
        currency_amount_in: CurrencyAmount,
        currency_out: impl Into<Currency>,
        maximum_slippage: Percent,
    ) -> Self {
        Self {
            currency_amount_in,
            currency_out: currency_out.into(),
            maximum_slippage,
            receiver: None,
            user: None,
        }
    }

    #[must_use]
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: Address) -> Self {
        self.user = Some(user);
        self
    }

    /// Chain of the swap: the input side's chain, else the output side's.
    #[must_use]
    pub fn chain_id(&self) -> Option<ChainId> {
        self.currency_amount_in
            .currency()
            .chain_id()
            .or_else(|| self.currency_out.chain_id())
    }
}

/// Swap request pinned on the output amount.
#[derive(Debug, Clone)]
pub struct ExactOutParams {
    pub currency_amount_out: CurrencyAmount,
    pub currency_in: Currency,
    pub maximum_slippage: Percent,
    pub receiver: Option<Address>,
    pub user: Option<Address>,
}

impl ExactOutParams {
    pub fn new(
        currency_amount_out: CurrencyAmount,
        currency_in: impl Into<Currency>,
        maximum_slippage: Percent,
    ) -> Self {
        Self {
            currency_amount_out,
            currency_in: currency_in.into(),
            maximum_slippage,
            receiver: None,
            user: None,
        }
    }

    #[must_use]
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: Address) -> Self {
        self.user = Some(user);
        self
    }

    /// Chain of the swap: the output side's chain, else the input side's.
    #[must_use]
    pub fn chain_id(&self) -> Option<ChainId> {
        self.currency_amount_out
            .currency()
            .chain_id()
            .or_else(|| self.currency_in.chain_id())
    }
}

/// Tuning for pair-graph venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairGraphOptions {
    /// Search routes through intermediate pairs.
    pub use_multihops: bool,
}

impl PairGraphOptions {
    /// Longest route the search may return.
    #[must_use]
    pub const fn max_hops(self) -> usize {
        if self.use_multihops {
            3
        } else {
            1
        }
    }
}

/// Per-call options forwarded untouched to every source.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub pair_graph: PairGraphOptions,
    /// Chain connectivity handle for sources that read on-chain state.
    pub provider: Option<Url>,
}

impl SourceOptions {
    #[must_use]
    pub fn with_multihops(mut self, use_multihops: bool) -> Self {
        self.pair_graph.use_multihops = use_multihops;
        self
    }

    #[must_use]
    pub fn with_provider(mut self, provider: Url) -> Self {
        self.provider = Some(provider);
        self
    }
}

/// A liquidity venue able to quote swaps.
///
/// Quote methods resolve to:
/// - `Ok(Some(trade))` with the venue's single best trade,
/// - `Ok(None)` when the venue has no route for the pair,
/// - `Err(_)` when the venue could not be reached or rejected the quote.
///
/// Implementations must not retry internally or mutate shared state.
#[async_trait]
pub trait TradeSource: Send + Sync {
    /// Identifier reported on trades and errors.
    fn platform(&self) -> &PlatformId;

    /// Whether the venue operates on `chain_id`. Pure; no I/O.
    fn supports_chain(&self, chain_id: ChainId) -> bool;

    /// Best trade for selling a fixed input amount.
    async fn best_trade_exact_in(
        &self,
        params: &ExactInParams,
        options: &SourceOptions,
    ) -> Result<Option<Trade>>;

    /// Best trade for buying a fixed output amount.
    async fn best_trade_exact_out(
        &self,
        params: &ExactOutParams,
        options: &SourceOptions,
    ) -> Result<Option<Trade>>;
}
