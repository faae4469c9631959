//! Network identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::currency::NativeCurrency;
use super::error::DomainError;

/// Networks the aggregator knows how to route on.
///
/// Serialized as the numeric EIP-155 chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    Mainnet,
    Goerli,
    Optimism,
    Bsc,
    Gnosis,
    Polygon,
    ZkSyncEra,
    ArbitrumOne,
    ArbitrumGoerli,
}

impl ChainId {
    /// Every supported chain, ordered by numeric id.
    pub const ALL: [ChainId; 9] = [
        Self::Mainnet,
        Self::Goerli,
        Self::Optimism,
        Self::Bsc,
        Self::Gnosis,
        Self::Polygon,
        Self::ZkSyncEra,
        Self::ArbitrumOne,
        Self::ArbitrumGoerli,
    ];

    /// Numeric EIP-155 id.
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Goerli => 5,
            Self::Optimism => 10,
            Self::Bsc => 56,
            Self::Gnosis => 100,
            Self::Polygon => 137,
            Self::ZkSyncEra => 324,
            Self::ArbitrumOne => 42161,
            Self::ArbitrumGoerli => 421613,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Goerli => "goerli",
            Self::Optimism => "optimism",
            Self::Bsc => "bsc",
            Self::Gnosis => "gnosis",
            Self::Polygon => "polygon",
            Self::ZkSyncEra => "zksync-era",
            Self::ArbitrumOne => "arbitrum-one",
            Self::ArbitrumGoerli => "arbitrum-goerli",
        }
    }

    /// The chain's native gas currency.
    #[must_use]
    pub fn native_currency(self) -> NativeCurrency {
        match self {
            Self::Gnosis => NativeCurrency::new("XDAI", "xDAI", 18),
            Self::Polygon => NativeCurrency::new("MATIC", "Polygon Matic", 18),
            Self::Bsc => NativeCurrency::new("BNB", "Binance Coin", 18),
            _ => NativeCurrency::new("ETH", "Ether", 18),
        }
    }
}

impl TryFrom<u64> for ChainId {
    type Error = DomainError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.id() == id)
            .ok_or(DomainError::UnknownChain { id })
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
