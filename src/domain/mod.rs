//! Venue-agnostic domain logic.
//!
//! Value objects (chains, currencies, amounts, trades, pools) plus the pure
//! routing and ranking functions. Nothing here performs I/O.

pub mod amount;
pub mod chain;
pub mod chain_assets;
pub mod currency;
pub mod error;
pub mod id;
pub mod percent;
pub mod pool;
pub mod ranking;
pub mod routing;
pub mod trade;

pub use amount::CurrencyAmount;
pub use chain::ChainId;
pub use chain_assets::{ChainAssets, ChainRegistry, NATIVE_ASSET_ADDRESS};
pub use currency::{Currency, NativeCurrency, Token};
pub use error::DomainError;
pub use id::PlatformId;
pub use percent::Percent;
pub use pool::{classify_token, Pool, PoolToken, TokenKind};
pub use ranking::sort_trades_by_execution_price;
pub use routing::{filter_routable_pools, lookup_pool_token, resolve_token_index};
pub use trade::{Trade, TradeBuilder, TradeType};
