//! Per-chain registry of well-known native asset addresses.
//!
//! Built once at start-up (defaults plus config overrides) and shared
//! read-only behind an `Arc`.

use std::collections::HashMap;

use alloy_primitives::{address, Address};

use super::chain::ChainId;
use super::currency::{Currency, Token};
use super::error::DomainError;

/// Placeholder address pool venues use for the native asset itself.
pub const NATIVE_ASSET_ADDRESS: Address = address!("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Native and wrapped-native addresses for one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAssets {
    /// Address standing in for the native asset inside pools.
    pub native: Address,
    /// ERC-20 wrapper of the native asset (WETH, WXDAI, ...).
    pub wrapped_native: Token,
    /// Pools on this chain may trade the native asset in place of its wrapper.
    pub native_aliasing: bool,
}

impl ChainAssets {
    /// Whether `address` is the native asset or its wrapper.
    #[must_use]
    pub fn is_native_like(&self, address: Address) -> bool {
        address == self.native || address == self.wrapped_native.address()
    }
}

/// Immutable lookup of [`ChainAssets`] by chain.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: HashMap<ChainId, ChainAssets>,
}

impl ChainRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the canonical wrapped-native tokens.
    #[must_use]
    pub fn with_defaults() -> Self {
        let wrapped = [
            (ChainId::Mainnet, address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"), "WETH", true),
            (ChainId::Goerli, address!("0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6"), "WETH", false),
            (ChainId::Optimism, address!("0x4200000000000000000000000000000000000006"), "WETH", false),
            (ChainId::Bsc, address!("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"), "WBNB", false),
            (ChainId::Gnosis, address!("0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"), "WXDAI", false),
            (ChainId::Polygon, address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"), "WMATIC", false),
            (ChainId::ZkSyncEra, address!("0x5AEa5775959fBC2557Cc8789bC1bf90A239D9a91"), "WETH", false),
            (ChainId::ArbitrumOne, address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"), "WETH", false),
            (ChainId::ArbitrumGoerli, address!("0xe39Ab88f8A4777030A534146A9Ca3B52bd5D43A3"), "WETH", false),
        ];

        let mut registry = Self::new();
        for (chain, wrapper, symbol, native_aliasing) in wrapped {
            registry.insert(
                chain,
                ChainAssets {
                    native: NATIVE_ASSET_ADDRESS,
                    wrapped_native: Token::new(chain, wrapper, 18).with_symbol(symbol),
                    native_aliasing,
                },
            );
        }
        registry
    }

    /// Register or replace a chain's assets.
    pub fn insert(&mut self, chain: ChainId, assets: ChainAssets) {
        self.chains.insert(chain, assets);
    }

    #[must_use]
    pub fn get(&self, chain: ChainId) -> Option<&ChainAssets> {
        self.chains.get(&chain)
    }

    #[must_use]
    pub fn wrapped_native(&self, chain: ChainId) -> Option<&Token> {
        self.get(chain).map(|assets| &assets.wrapped_native)
    }

    /// Whether native-asset aliasing applies on `chain`.
    #[must_use]
    pub fn native_aliasing(&self, chain: ChainId) -> bool {
        self.get(chain).is_some_and(|assets| assets.native_aliasing)
    }

    /// Token form of a currency: tokens pass through, native currencies
    /// become the chain's wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NoWrappedNative`] when the chain has no entry.
    pub fn wrap(&self, currency: &Currency, chain: ChainId) -> Result<Token, DomainError> {
        match currency {
            Currency::Token(token) => Ok(token.clone()),
            Currency::Native(_) => self
                .wrapped_native(chain)
                .cloned()
                .ok_or_else(|| DomainError::NoWrappedNative {
                    chain: chain.name().to_string(),
                }),
        }
    }

    pub fn chains(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.chains.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_chain() {
        let registry = ChainRegistry::with_defaults();
        for chain in ChainId::ALL {
            assert!(registry.get(chain).is_some(), "missing {chain}");
        }
        assert!(registry.native_aliasing(ChainId::Mainnet));
        assert!(!registry.native_aliasing(ChainId::Gnosis));
    }

    #[test]
    fn wrap_native_uses_chain_wrapper() {
        let registry = ChainRegistry::with_defaults();
        let native = Currency::from(ChainId::Gnosis.native_currency());
        let wrapped = registry.wrap(&native, ChainId::Gnosis).unwrap();
        assert_eq!(wrapped.symbol(), Some("WXDAI"));
        assert_eq!(wrapped.chain_id(), ChainId::Gnosis);
    }

    #[test]
    fn wrap_fails_without_entry() {
        let registry = ChainRegistry::new();
        let native = Currency::from(ChainId::Mainnet.native_currency());
        assert!(matches!(
            registry.wrap(&native, ChainId::Mainnet),
            Err(DomainError::NoWrappedNative { .. })
        ));
    }

    #[test]
    fn native_like_matches_both_forms() {
        let registry = ChainRegistry::with_defaults();
        let assets = registry.get(ChainId::Mainnet).unwrap();
        assert!(assets.is_native_like(NATIVE_ASSET_ADDRESS));
        assert!(assets.is_native_like(assets.wrapped_native.address()));
        assert!(!assets.is_native_like(Address::ZERO));
    }
}
