//! Multi-asset pool venue.
//!
//! Filters the chain's pools down to those that can route the pair, resolves
//! each token's slot, quotes every candidate pool concurrently and keeps the
//! best one. A candidate that fails to quote is dropped; the venue only fails
//! when every candidate failed.

use std::collections::HashMap;
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::debug;

use crate::domain::{
    filter_routable_pools, lookup_pool_token, resolve_token_index, ChainId, ChainRegistry,
    Currency, CurrencyAmount, PlatformId, Pool, PoolToken, Token, Trade, TradeType,
};
use crate::error::{AggregationError, Error, Result};
use crate::port::{ExactInParams, ExactOutParams, PoolQuoter, SourceOptions, TradeSource};

/// A pool able to route the pair, with both slots resolved.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    pool: &'a Pool,
    index_in: usize,
    index_out: usize,
}

pub struct PoolSource {
    platform: PlatformId,
    pools: HashMap<ChainId, Vec<Pool>>,
    registry: Arc<ChainRegistry>,
    quoter: Arc<dyn PoolQuoter>,
}

impl PoolSource {
    pub fn new(
        platform: impl Into<PlatformId>,
        pools: impl IntoIterator<Item = Pool>,
        registry: Arc<ChainRegistry>,
        quoter: Arc<dyn PoolQuoter>,
    ) -> Self {
        let mut by_chain: HashMap<ChainId, Vec<Pool>> = HashMap::new();
        for pool in pools {
            by_chain.entry(pool.chain_id).or_default().push(pool);
        }
        Self {
            platform: platform.into(),
            pools: by_chain,
            registry,
            quoter,
        }
    }

    /// Pools configured on `chain_id`, in configuration order.
    #[must_use]
    pub fn pools(&self, chain_id: ChainId) -> &[Pool] {
        self.pools
            .get(&chain_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Pool-level view of `token`, classified by peg group.
    #[must_use]
    pub fn pool_token(&self, token: &Token) -> PoolToken {
        lookup_pool_token(self.pools(token.chain_id()), token)
    }

    fn candidates(
        &self,
        currency_in: &Currency,
        currency_out: &Currency,
        chain_id: ChainId,
    ) -> Result<Vec<Candidate<'_>>> {
        let token_in = self.registry.wrap(currency_in, chain_id)?;
        let token_out = self.registry.wrap(currency_out, chain_id)?;
        if token_in == token_out {
            return Ok(Vec::new());
        }

        debug!(
            platform = %self.platform,
            kind_in = ?self.pool_token(&token_in).kind(),
            kind_out = ?self.pool_token(&token_out).kind(),
            "Resolving pool candidates"
        );

        let routable = filter_routable_pools(
            self.pools(chain_id),
            token_in.address(),
            token_out.address(),
            chain_id,
            currency_in.is_native(),
            currency_out.is_native(),
            &self.registry,
        );

        let native = self
            .registry
            .get(chain_id)
            .filter(|assets| assets.native_aliasing)
            .map(|assets| assets.native);

        let candidates = routable
            .into_iter()
            .filter_map(|pool| {
                let address = |token: &Token, is_native: bool| -> Address {
                    match native {
                        Some(native) if is_native && pool.allows_trading_eth => native,
                        _ => token.address(),
                    }
                };
                let index_in = resolve_token_index(
                    pool,
                    address(&token_in, currency_in.is_native()),
                    chain_id,
                    &self.registry,
                )?;
                let index_out = resolve_token_index(
                    pool,
                    address(&token_out, currency_out.is_native()),
                    chain_id,
                    &self.registry,
                )?;
                (index_in != index_out).then_some(Candidate {
                    pool,
                    index_in,
                    index_out,
                })
            })
            .collect();

        Ok(candidates)
    }
}

/// Keep the best successful quote; ties go to the earlier candidate.
///
/// Zero quotes count as "no liquidity" and are skipped. When nothing
/// succeeds, the last failure is returned.
fn pick_best<T>(
    quotes: Vec<(T, Result<U256>)>,
    better: impl Fn(U256, U256) -> bool,
) -> Result<Option<(T, U256)>> {
    let mut best: Option<(T, U256)> = None;
    let mut last_error: Option<Error> = None;

    for (candidate, quote) in quotes {
        match quote {
            Ok(amount) if amount.is_zero() => {}
            Ok(amount) => {
                if best.as_ref().map_or(true, |(_, current)| better(amount, *current)) {
                    best = Some((candidate, amount));
                }
            }
            Err(err) => last_error = Some(err),
        }
    }

    match (best, last_error) {
        (Some(best), _) => Ok(Some(best)),
        (None, Some(err)) => Err(err),
        (None, None) => Ok(None),
    }
}

#[async_trait]
impl TradeSource for PoolSource {
    fn platform(&self) -> &PlatformId {
        &self.platform
    }

    fn supports_chain(&self, chain_id: ChainId) -> bool {
        !self.pools(chain_id).is_empty()
    }

    async fn best_trade_exact_in(
        &self,
        params: &ExactInParams,
        options: &SourceOptions,
    ) -> Result<Option<Trade>> {
        let chain_id = params.chain_id().ok_or(AggregationError::UnsupportedChain)?;
        let candidates = self.candidates(
            params.currency_amount_in.currency(),
            &params.currency_out,
            chain_id,
        )?;
        if candidates.is_empty() {
            debug!(platform = %self.platform, chain = %chain_id, "No routable pool");
            return Ok(None);
        }

        let amount_in = params.currency_amount_in.raw();
        let provider = options.provider.as_ref();
        let quotes = join_all(candidates.iter().map(|candidate| async move {
            let quote = self
                .quoter
                .quote_exact_in(
                    candidate.pool,
                    candidate.index_in,
                    candidate.index_out,
                    amount_in,
                    provider,
                )
                .await;
            (candidate, quote)
        }))
        .await;

        let Some((candidate, amount_out)) = pick_best(quotes, |a, b| a > b)? else {
            return Ok(None);
        };
        debug!(platform = %self.platform, pool = %candidate.pool.name, %amount_out, "Best pool quote");

        let trade = Trade::builder()
            .trade_type(TradeType::ExactInput)
            .input_amount(params.currency_amount_in.clone())
            .output_amount(CurrencyAmount::new(params.currency_out.clone(), amount_out))
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
        let candidates = self.candidates(
            &params.currency_in,
            params.currency_amount_out.currency(),
            chain_id,
        )?;
        if candidates.is_empty() {
            debug!(platform = %self.platform, chain = %chain_id, "No routable pool");
            return Ok(None);
        }

        let amount_out = params.currency_amount_out.raw();
        let provider = options.provider.as_ref();
        let quotes = join_all(candidates.iter().map(|candidate| async move {
            let quote = self
                .quoter
                .quote_exact_out(
                    candidate.pool,
                    candidate.index_in,
                    candidate.index_out,
                    amount_out,
                    provider,
                )
                .await;
            (candidate, quote)
        }))
        .await;

        let Some((candidate, amount_in)) = pick_best(quotes, |a, b| a < b)? else {
            return Ok(None);
        };
        debug!(platform = %self.platform, pool = %candidate.pool.name, %amount_in, "Best pool quote");

        let trade = Trade::builder()
            .trade_type(TradeType::ExactOutput)
            .input_amount(CurrencyAmount::new(params.currency_in.clone(), amount_in))
            .output_amount(params.currency_amount_out.clone())
            .maximum_slippage(params.maximum_slippage)
            .platform(self.platform.clone())
            .chain_id(chain_id)
            .build()?;
        Ok(Some(trade))
    }
}
