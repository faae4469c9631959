//! Pair-graph venue: one constant-product platform instance.
//!
//! Several platforms often run the same pair-graph code on one chain. Each
//! is registered as its own source so the aggregator quotes them
//! concurrently and reports their failures separately.

use std::sync::Arc;

use alloy_primitives::U256;
use async_trait::async_trait;
use tracing::debug;

use crate::domain::{
    ChainId, ChainRegistry, Currency, CurrencyAmount, PlatformId, Trade, TradeType,
};
use crate::error::{AggregationError, Result};
use crate::port::{
    ExactInParams, ExactOutParams, PairQuoter, RouteRequest, SourceOptions, TradeSource,
};

pub struct PairGraphSource {
    platform: PlatformId,
    chains: Vec<ChainId>,
    registry: Arc<ChainRegistry>,
    quoter: Arc<dyn PairQuoter>,
}

impl PairGraphSource {
    pub fn new(
        platform: impl Into<PlatformId>,
        chains: impl IntoIterator<Item = ChainId>,
        registry: Arc<ChainRegistry>,
        quoter: Arc<dyn PairQuoter>,
    ) -> Self {
        Self {
            platform: platform.into(),
            chains: chains.into_iter().collect(),
            registry,
            quoter,
        }
    }

    /// Build the route request, or `None` when both sides wrap to the same
    /// token.
    fn request(
        &self,
        currency_in: &Currency,
        currency_out: &Currency,
        amount: U256,
        chain_id: ChainId,
        options: &SourceOptions,
    ) -> Result<Option<RouteRequest>> {
        let token_in = self.registry.wrap(currency_in, chain_id)?;
        let token_out = self.registry.wrap(currency_out, chain_id)?;
        if token_in == token_out {
            return Ok(None);
        }
        Ok(Some(RouteRequest {
            platform: self.platform.clone(),
            chain_id,
            token_in,
            token_out,
            amount,
            max_hops: options.pair_graph.max_hops(),
        }))
    }
}

#[async_trait]
impl TradeSource for PairGraphSource {
    fn platform(&self) -> &PlatformId {
        &self.platform
    }

    fn supports_chain(&self, chain_id: ChainId) -> bool {
        self.chains.contains(&chain_id)
    }

    async fn best_trade_exact_in(
        &self,
        params: &ExactInParams,
        options: &SourceOptions,
    ) -> Result<Option<Trade>> {
        let chain_id = params.chain_id().ok_or(AggregationError::UnsupportedChain)?;
        let Some(request) = self.request(
            params.currency_amount_in.currency(),
            &params.currency_out,
            params.currency_amount_in.raw(),
            chain_id,
            options,
        )?
        else {
            return Ok(None);
        };

        let Some(route) = self
            .quoter
            .best_route_exact_in(&request, options.provider.as_ref())
            .await?
        else {
            debug!(platform = %self.platform, max_hops = request.max_hops, "No pair route");
            return Ok(None);
        };
        debug!(platform = %self.platform, hops = route.hops(), "Best pair route");

        let trade = Trade::builder()
            .trade_type(TradeType::ExactInput)
            .input_amount(params.currency_amount_in.clone())
            .output_amount(CurrencyAmount::new(
                params.currency_out.clone(),
                route.amount_out,
            ))
            .maximum_slippage(params.maximum_slippage)
            .platform(self.platform.clone())
            .chain_id(chain_id)
            .build()?;
        Ok(Some(trade))
    }

    async fn best_trade_exact_out(
        &self,
        params: &ExactOutParams,
        options: &SourceOptions,
    ) -> Result<Option<Trade>> {
        let chain_id = params.chain_id().ok_or(AggregationError::UnsupportedChain)?;
        let Some(request) = self.request(
            &params.currency_in,
            params.currency_amount_out.currency(),
            params.currency_amount_out.raw(),
            chain_id,
            options,
        )?
        else {
            return Ok(None);
        };

        let Some(route) = self
            .quoter
            .best_route_exact_out(&request, options.provider.as_ref())
            .await?
        else {
            debug!(platform = %self.platform, max_hops = request.max_hops, "No pair route");
            return Ok(None);
        };
        debug!(platform = %self.platform, hops = route.hops(), "Best pair route");

        let trade = Trade::builder()
            .trade_type(TradeType::ExactOutput)
            .input_amount(CurrencyAmount::new(
                params.currency_in.clone(),
                route.amount_in,
            ))
            .output_amount(params.currency_amount_out.clone())
            .maximum_slippage(params.maximum_slippage)
            .platform(self.platform.clone())
            .chain_id(chain_id)
            .build()?;
        Ok(Some(trade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Percent;
    use crate::error::{Error, SourceError};
    use crate::testkit::domain::token;
    use crate::testkit::quoter::ScriptedPairQuoter;

    fn source(quoter: Arc<ScriptedPairQuoter>) -> PairGraphSource {
        PairGraphSource::new(
            "swapr",
            [ChainId::Gnosis, ChainId::ArbitrumOne],
            Arc::new(ChainRegistry::with_defaults()),
            quoter,
        )
    }

    fn sell(amount: u64) -> ExactInParams {
        ExactInParams::new(
            CurrencyAmount::new(token(ChainId::Gnosis, 1, "USDC", 6), U256::from(amount)),
            token(ChainId::Gnosis, 2, "GNO", 18),
            Percent::ZERO,
        )
    }

    #[test]
    fn supports_configured_chains_only() {
        let source = source(Arc::new(ScriptedPairQuoter::new()));
        assert!(source.supports_chain(ChainId::Gnosis));
        assert!(!source.supports_chain(ChainId::Mainnet));
    }

    #[tokio::test]
    async fn hop_limit_follows_multihop_option() {
        let quoter = Arc::new(ScriptedPairQuoter::new().with_route(10, 20));
        let source = source(quoter.clone());

        source
            .best_trade_exact_in(&sell(10), &SourceOptions::default().with_multihops(true))
            .await
            .unwrap();
        source
            .best_trade_exact_in(&sell(10), &SourceOptions::default())
            .await
            .unwrap();

        assert_eq!(quoter.max_hops_seen(), vec![3, 1]);
    }

    #[tokio::test]
    async fn route_becomes_exact_in_trade() {
        let quoter = Arc::new(ScriptedPairQuoter::new().with_route(10, 20));
        let trade = source(quoter)
            .best_trade_exact_in(&sell(10), &SourceOptions::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(trade.output_amount().raw(), U256::from(20u8));
        assert_eq!(trade.chain_id(), ChainId::Gnosis);
        assert_eq!(trade.platform().as_str(), "swapr");
    }

    #[tokio::test]
    async fn exact_out_takes_input_from_route() {
        let quoter = Arc::new(ScriptedPairQuoter::new().with_route(15, 20));
        let params = ExactOutParams::new(
            CurrencyAmount::new(token(ChainId::Gnosis, 2, "GNO", 18), U256::from(20u8)),
            token(ChainId::Gnosis, 1, "USDC", 6),
            Percent::ZERO,
        );

        let trade = source(quoter)
            .best_trade_exact_out(&params, &SourceOptions::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(trade.input_amount().raw(), U256::from(15u8));
        assert_eq!(trade.trade_type(), TradeType::ExactOutput);
    }

    #[tokio::test]
    async fn missing_route_is_no_route() {
        let quoter = Arc::new(ScriptedPairQuoter::new());
        let trade = source(quoter)
            .best_trade_exact_in(&sell(10), &SourceOptions::default())
            .await
            .unwrap();
        assert!(trade.is_none());
    }

    #[tokio::test]
    async fn quoter_failure_propagates() {
        let quoter = Arc::new(ScriptedPairQuoter::new().failing());
        let result = source(quoter)
            .best_trade_exact_in(&sell(10), &SourceOptions::default())
            .await;
        assert!(matches!(
            result,
            Err(Error::Source(SourceError::Unreachable { .. }))
        ));
    }

    #[tokio::test]
    async fn same_token_both_sides_is_no_route() {
        let quoter = Arc::new(ScriptedPairQuoter::new().with_route(1, 1));
        let params = ExactInParams::new(
            CurrencyAmount::new(ChainId::Gnosis.native_currency(), U256::from(1u8)),
            ChainRegistry::with_defaults()
                .wrapped_native(ChainId::Gnosis)
                .cloned()
                .unwrap(),
            Percent::ZERO,
        );

        let trade = source(quoter.clone())
            .best_trade_exact_in(&params, &SourceOptions::default())
            .await
            .unwrap();

        assert!(trade.is_none());
        assert!(quoter.max_hops_seen().is_empty());
    }
}
