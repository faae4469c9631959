//! Per-chain asset configuration and pair-graph platform instances.

use alloy_primitives::Address;
use serde::Deserialize;
use url::Url;

use crate::domain::{ChainAssets, ChainId, Token, NATIVE_ASSET_ADDRESS};

/// One `[[chains]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    /// ERC-20 wrapper of the native asset.
    pub wrapped_native: Address,
    /// Symbol of the wrapper. Defaults to `W` + the native symbol.
    #[serde(default)]
    pub wrapped_symbol: Option<String>,
    /// Placeholder address pools use for the native asset.
    #[serde(default = "default_native")]
    pub native: Address,
    /// Pools on this chain may trade the native asset directly.
    #[serde(default)]
    pub native_aliasing: bool,
    /// RPC endpoint forwarded to sources that read chain state.
    #[serde(default)]
    pub rpc_url: Option<Url>,
}

fn default_native() -> Address {
    NATIVE_ASSET_ADDRESS
}

impl ChainConfig {
    #[must_use]
    pub fn assets(&self) -> ChainAssets {
        let symbol = self
            .wrapped_symbol
            .clone()
            .unwrap_or_else(|| format!("W{}", self.chain_id.native_currency().symbol()));
        ChainAssets {
            native: self.native,
            wrapped_native: Token::new(self.chain_id, self.wrapped_native, 18).with_symbol(symbol),
            native_aliasing: self.native_aliasing,
        }
    }
}

/// One `[[platforms]]` entry: a pair-graph platform instance.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    pub name: String,
    pub chains: Vec<ChainId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_symbol_defaults_from_native() {
        let config: ChainConfig = toml::from_str(
            r#"
chain_id = 100
wrapped_native = "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"
"#,
        )
        .unwrap();

        let assets = config.assets();
        assert_eq!(assets.wrapped_native.symbol(), Some("WXDAI"));
        assert_eq!(assets.native, NATIVE_ASSET_ADDRESS);
        assert!(!assets.native_aliasing);
        assert!(config.rpc_url.is_none());
    }
}
