//! Multi-asset liquidity pools and their tokens.
//!
//! A pool lists its primary tokens in venue slot order. Lending-wrapped pools
//! additionally declare `underlying_tokens` (the unwrapped form of each
//! primary token, same positions), and meta-pools declare `meta_tokens` (the
//! constituents of the base pool hidden behind the pool's last primary
//! token).

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::chain::ChainId;

/// Asset class of a pool token, used to group pools by peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Native asset or an ether-equivalent.
    Native,
    /// BTC-pegged.
    Btc,
    /// USD (or other fiat) pegged.
    Usd,
    #[default]
    Other,
}

const NATIVE_SYMBOLS: &[&str] = &["eth"];
const BTC_SYMBOLS: &[&str] = &["btc"];
const USD_SYMBOLS: &[&str] = &[
    "dai", "jpy", "aud", "dei", "home", "fiat", "alcx", "cad", "usx", "fei", "crv", "ust", "vst",
    "fxs", "fox", "cvx", "angle", "gamma", "apw", "usd", "mim", "frax", "apv", "rai", "eur",
    "gbp", "chf", "dola", "krw",
];

/// Classify a token by its symbol against the fixed peg groups.
///
/// Matching is exact and case-insensitive; anything unlisted is
/// [`TokenKind::Other`].
#[must_use]
pub fn classify_token(symbol: &str) -> TokenKind {
    let symbol = symbol.to_lowercase();
    let listed = |group: &[&str]| group.contains(&symbol.as_str());
    if listed(NATIVE_SYMBOLS) {
        TokenKind::Native
    } else if listed(BTC_SYMBOLS) {
        TokenKind::Btc
    } else if listed(USD_SYMBOLS) {
        TokenKind::Usd
    } else {
        TokenKind::Other
    }
}

/// A token as seen by a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolToken {
    pub address: Address,
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    /// Asset class; derived from the symbol when omitted.
    #[serde(default)]
    pub kind: Option<TokenKind>,
    /// Liquidity-pool receipt token; never a routing candidate.
    #[serde(default)]
    pub is_lp_token: bool,
}

fn default_decimals() -> u8 {
    18
}

impl PoolToken {
    pub fn new(address: Address, symbol: impl Into<String>) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals: default_decimals(),
            kind: None,
            is_lp_token: false,
        }
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn lp_token(mut self) -> Self {
        self.is_lp_token = true;
        self
    }

    /// Explicit kind, or the symbol classification.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind.unwrap_or_else(|| classify_token(&self.symbol))
    }
}

/// A multi-asset liquidity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub name: String,
    pub address: Address,
    pub chain_id: ChainId,
    pub tokens: Vec<PoolToken>,
    #[serde(default)]
    pub meta_tokens: Option<Vec<PoolToken>>,
    #[serde(default)]
    pub underlying_tokens: Option<Vec<PoolToken>>,
    /// Pool accepts the chain's native asset directly.
    #[serde(default)]
    pub allows_trading_eth: bool,
    #[serde(default)]
    pub is_meta: bool,
}

impl Pool {
    pub fn new(
        name: impl Into<String>,
        address: Address,
        chain_id: ChainId,
        tokens: Vec<PoolToken>,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            chain_id,
            tokens,
            meta_tokens: None,
            underlying_tokens: None,
            allows_trading_eth: false,
            is_meta: false,
        }
    }

    /// Mark as a meta-pool exposing the base pool's constituents.
    #[must_use]
    pub fn with_meta_tokens(mut self, meta_tokens: Vec<PoolToken>) -> Self {
        self.meta_tokens = Some(meta_tokens);
        self.is_meta = true;
        self
    }

    #[must_use]
    pub fn with_underlying_tokens(mut self, underlying_tokens: Vec<PoolToken>) -> Self {
        self.underlying_tokens = Some(underlying_tokens);
        self
    }

    #[must_use]
    pub fn allowing_eth(mut self) -> Self {
        self.allows_trading_eth = true;
        self
    }

    /// Every token the pool lists, across primary, underlying and meta lists.
    pub fn all_tokens(&self) -> impl Iterator<Item = &PoolToken> {
        self.tokens
            .iter()
            .chain(self.underlying_tokens.iter().flatten())
            .chain(self.meta_tokens.iter().flatten())
    }

    /// Look up a listed token by address.
    #[must_use]
    pub fn find_token(&self, address: Address) -> Option<&PoolToken> {
        self.all_tokens().find(|token| token.address == address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify_token("ETH"), TokenKind::Native);
        assert_eq!(classify_token("Btc"), TokenKind::Btc);
        assert_eq!(classify_token("DAI"), TokenKind::Usd);
        assert_eq!(classify_token("frax"), TokenKind::Usd);
    }

    #[test]
    fn classify_requires_exact_symbol() {
        assert_eq!(classify_token("WETH"), TokenKind::Other);
        assert_eq!(classify_token("USDC"), TokenKind::Other);
        assert_eq!(classify_token(""), TokenKind::Other);
    }

    #[test]
    fn pool_token_kind_prefers_explicit_value() {
        let mut token = PoolToken::new(Address::ZERO, "dai");
        assert_eq!(token.kind(), TokenKind::Usd);
        token.kind = Some(TokenKind::Other);
        assert_eq!(token.kind(), TokenKind::Other);
    }

    #[test]
    fn pool_deserializes_with_defaults() {
        let pool: Pool = toml::from_str(
            r#"
name = "3pool"
address = "0xbEbc44782C7dB0a1A60Cb6fe97d0b483032FF1C7"
chain_id = 1

[[tokens]]
address = "0x6B175474E89094C44Da98b954EedeAC495271d0F"
symbol = "DAI"

[[tokens]]
address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
symbol = "USDC"
decimals = 6
"#,
        )
        .unwrap();

        assert_eq!(pool.chain_id, ChainId::Mainnet);
        assert_eq!(pool.tokens.len(), 2);
        assert_eq!(pool.tokens[1].decimals, 6);
        assert!(!pool.is_meta);
        assert!(pool.meta_tokens.is_none());
        assert_eq!(pool.tokens[0].kind(), TokenKind::Usd);
    }
}
