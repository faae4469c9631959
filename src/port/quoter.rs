//! Outbound quoting ports used by the built-in venue adapters.
//!
//! Implementations own the network or contract calls; adapters only see
//! raw amounts.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use url::Url;

use crate::domain::{ChainId, PlatformId, Pool, Token};
use crate::error::Result;

/// On-chain quoting for multi-asset pools that address tokens by slot.
#[async_trait]
pub trait PoolQuoter: Send + Sync {
    /// Output received for selling `amount_in` of slot `index_in` for slot
    /// `index_out`.
    async fn quote_exact_in(
        &self,
        pool: &Pool,
        index_in: usize,
        index_out: usize,
        amount_in: U256,
        provider: Option<&Url>,
    ) -> Result<U256>;

    /// Input required to receive `amount_out` of slot `index_out`.
    async fn quote_exact_out(
        &self,
        pool: &Pool,
        index_in: usize,
        index_out: usize,
        amount_out: U256,
        provider: Option<&Url>,
    ) -> Result<U256>;
}

/// Route search request for a pair-graph venue.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub platform: PlatformId,
    pub chain_id: ChainId,
    pub token_in: Token,
    pub token_out: Token,
    /// Fixed side of the swap: input for exact-in, output for exact-out.
    pub amount: U256,
    pub max_hops: usize,
}

/// Best route found by a pair-graph venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuote {
    pub amount_in: U256,
    pub amount_out: U256,
    /// Token addresses visited, input first.
    pub path: Vec<Address>,
}

impl RouteQuote {
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Route search over a venue's constant-product pair graph.
///
/// `Ok(None)` means the graph holds no path for the pair within the hop
/// limit.
#[async_trait]
pub trait PairQuoter: Send + Sync {
    async fn best_route_exact_in(
        &self,
        request: &RouteRequest,
        provider: Option<&Url>,
    ) -> Result<Option<RouteQuote>>;

    async fn best_route_exact_out(
        &self,
        request: &RouteRequest,
        provider: Option<&Url>,
    ) -> Result<Option<RouteQuote>>;
}
