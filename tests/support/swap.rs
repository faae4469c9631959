use alloy_primitives::U256;
use ecorouter::domain::{ChainId, CurrencyAmount, Percent};
use ecorouter::port::{ExactInParams, ExactOutParams};
use ecorouter::testkit::domain::{input_token, output_token};

/// Sell 100 raw units of the testkit input token.
pub fn exact_in() -> ExactInParams {
    ExactInParams::new(
        CurrencyAmount::new(input_token(), U256::from(100u8)),
        output_token(),
        Percent::from_bps(50).unwrap(),
    )
}

/// Buy 100 raw units of the testkit output token.
pub fn exact_out() -> ExactOutParams {
    ExactOutParams::new(
        CurrencyAmount::new(output_token(), U256::from(100u8)),
        input_token(),
        Percent::from_bps(50).unwrap(),
    )
}

/// Native asset on both sides: no chain can be resolved.
pub fn native_to_native_in() -> ExactInParams {
    ExactInParams::new(
        CurrencyAmount::new(ChainId::Mainnet.native_currency(), U256::from(1u8)),
        ChainId::Gnosis.native_currency(),
        Percent::ZERO,
    )
}

pub fn native_to_native_out() -> ExactOutParams {
    ExactOutParams::new(
        CurrencyAmount::new(ChainId::Mainnet.native_currency(), U256::from(1u8)),
        ChainId::Gnosis.native_currency(),
        Percent::ZERO,
    )
}
