//! Builders for domain primitives used across tests.
//!
//! Addresses are derived from a single byte (`0x0101..01` for `1`) so tests
//! can name tokens tersely.

use alloy_primitives::{Address, U256};

use crate::domain::{ChainId, CurrencyAmount, PoolToken, Token, Trade, TradeType};

/// Address made of `byte` repeated.
pub fn address(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

/// Token at `address(byte)` on `chain_id`.
pub fn token(chain_id: ChainId, byte: u8, symbol: &str, decimals: u8) -> Token {
    Token::new(chain_id, address(byte), decimals).with_symbol(symbol)
}

/// Pool token at `address(byte)` with 18 decimals.
pub fn pool_token(byte: u8, symbol: &str) -> PoolToken {
    PoolToken::new(address(byte), symbol)
}

/// Mainnet USDC-like input token used by [`trade`].
pub fn input_token() -> Token {
    token(ChainId::Mainnet, 0x01, "USDC", 6)
}

/// Mainnet USDT-like output token used by [`trade`].
pub fn output_token() -> Token {
    token(ChainId::Mainnet, 0x02, "USDT", 6)
}

/// Mainnet trade between two 6-decimal tokens with the given raw amounts.
///
/// # Panics
///
/// Panics when either amount is zero.
pub fn trade(platform: &str, trade_type: TradeType, input: u64, output: u64) -> Trade {
    Trade::builder()
        .trade_type(trade_type)
        .input_amount(CurrencyAmount::new(input_token(), U256::from(input)))
        .output_amount(CurrencyAmount::new(output_token(), U256::from(output)))
        .platform(platform)
        .chain_id(ChainId::Mainnet)
        .build()
        .expect("test trade amounts must be non-zero")
}
