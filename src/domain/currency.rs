//! Currencies: chain-native assets and on-chain fungible tokens.

use std::fmt;
use std::hash::{Hash, Hasher};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::chain::ChainId;

/// A chain's native gas asset (ETH, xDAI, MATIC, ...).
///
/// Native currencies carry no chain id: the same `ETH` value is used on every
/// EVM network that settles gas in ether.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeCurrency {
    symbol: String,
    name: String,
    decimals: u8,
}

impl NativeCurrency {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            decimals,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// An ERC-20 style token living at a contract address on one chain.
///
/// Two tokens are equal iff they share chain and address. Addresses are
/// stored as bytes, so equality is independent of the hex casing they were
/// parsed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    pub fn new(chain_id: ChainId, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

/// Either side of a swap: a native asset or a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        match self {
            Self::Native(native) => native.decimals(),
            Self::Token(token) => token.decimals(),
        }
    }

    /// Display symbol; tokens without a symbol fall back to their address.
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Native(native) => native.symbol().to_string(),
            Self::Token(token) => token
                .symbol()
                .map_or_else(|| token.address().to_string(), str::to_string),
        }
    }

    /// Chain the currency lives on. Only tokens carry one.
    #[must_use]
    pub const fn chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Native(_) => None,
            Self::Token(token) => Some(token.chain_id()),
        }
    }

    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Native(_) => None,
            Self::Token(token) => Some(token),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Self::Native(native)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
