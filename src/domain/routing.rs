//! Pool routing: which pools can swap a pair, and at which slot each token
//! sits inside a pool.
//!
//! Both operations are pure. "Not routable" is an ordinary outcome and is
//! modelled as `None` / an empty list, never as an error.

use alloy_primitives::Address;

use super::chain::ChainId;
use super::chain_assets::ChainRegistry;
use super::currency::Token;
use super::pool::{Pool, PoolToken, TokenKind};

/// Resolve the venue slot of `token` inside `pool`.
///
/// The candidate list is the pool's primary tokens minus liquidity-pool
/// receipt tokens, followed by its underlying tokens, or (for meta-pools
/// without underlying tokens) its meta tokens.
///
/// When the underlying list has the same length as the primary list, a
/// primary token and its underlying form share one slot, so the search runs
/// over positions in both lists instead of over the candidate list.
///
/// If nothing matches and the pool holds the chain's native asset or its
/// wrapper, slot 0 is returned: native is slot 0 in every such pool.
#[must_use]
pub fn resolve_token_index(
    pool: &Pool,
    token: Address,
    chain_id: ChainId,
    registry: &ChainRegistry,
) -> Option<usize> {
    let candidates = candidate_tokens(pool);

    let has_native_route = registry.get(chain_id).is_some_and(|assets| {
        candidates
            .iter()
            .any(|candidate| assets.is_native_like(candidate.address))
    });

    let index = match pool.underlying_tokens.as_deref() {
        Some(underlying) if underlying.len() == pool.tokens.len() => pool
            .tokens
            .iter()
            .zip(underlying)
            .position(|(primary, unwrapped)| {
                primary.address == token || unwrapped.address == token
            }),
        _ => candidates
            .iter()
            .position(|candidate| candidate.address == token),
    };

    index.or_else(|| has_native_route.then_some(0))
}

fn candidate_tokens(pool: &Pool) -> Vec<&PoolToken> {
    let primary = pool.tokens.iter().filter(|token| !token.is_lp_token);
    match (pool.underlying_tokens.as_deref(), pool.meta_tokens.as_deref()) {
        (Some(underlying), _) => primary.chain(underlying).collect(),
        (None, Some(meta)) if pool.is_meta => primary.chain(meta).collect(),
        _ => primary.collect(),
    }
}

/// Restrict `pools` to those able to swap `token_in` for `token_out`.
///
/// On chains with native-asset aliasing, a native side is looked up under
/// the native placeholder address in pools that accept native trading.
/// Each side is searched independently across primary, underlying and meta
/// tokens; the two sides need not be found in the same list.
#[must_use]
pub fn filter_routable_pools<'a>(
    pools: &'a [Pool],
    token_in: Address,
    token_out: Address,
    chain_id: ChainId,
    is_token_in_native: bool,
    is_token_out_native: bool,
    registry: &ChainRegistry,
) -> Vec<&'a Pool> {
    let native = registry
        .get(chain_id)
        .filter(|assets| assets.native_aliasing)
        .map(|assets| assets.native);

    pools
        .iter()
        .filter(|pool| {
            let effective = |address: Address, is_native: bool| match native {
                Some(native) if pool.allows_trading_eth && is_native => native,
                _ => address,
            };
            let lists = |address: Address| pool.all_tokens().any(|token| token.address == address);

            lists(effective(token_in, is_token_in_native))
                && lists(effective(token_out, is_token_out_native))
        })
        .collect()
}

/// Pool-level view of a token: the listed entry when some pool knows the
/// address, otherwise a synthesized entry classified as [`TokenKind::Other`].
#[must_use]
pub fn lookup_pool_token(pools: &[Pool], token: &Token) -> PoolToken {
    pools
        .iter()
        .find_map(|pool| pool.find_token(token.address()))
        .cloned()
        .unwrap_or_else(|| PoolToken {
            address: token.address(),
            symbol: token.symbol().unwrap_or_default().to_string(),
            decimals: token.decimals(),
            kind: Some(TokenKind::Other),
            is_lp_token: false,
        })
}
