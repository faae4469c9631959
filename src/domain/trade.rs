//! Normalized quote results.
//!
//! Every liquidity source, whatever its venue mechanics, hands back a
//! [`Trade`]: the amounts on both sides, the slippage it was quoted under,
//! the platform that produced it, and a derived execution price. Trades are
//! built once through [`TradeBuilder`] and are immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use ecorouter::domain::chain::ChainId;
//! use ecorouter::domain::currency::Token;
//! use ecorouter::domain::amount::CurrencyAmount;
//! use ecorouter::domain::percent::Percent;
//! use ecorouter::domain::trade::{Trade, TradeType};
//! use rust_decimal_macros::dec;
//!
//! let usdc = Token::new(ChainId::Mainnet, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".parse().unwrap(), 6);
//! let dai = Token::new(ChainId::Mainnet, "0x6B175474E89094C44Da98b954EedeAC495271d0F".parse().unwrap(), 18);
//!
//! let trade = Trade::builder()
//!     .trade_type(TradeType::ExactInput)
//!     .input_amount(CurrencyAmount::new(usdc, U256::from(100_000_000u64)))
//!     .output_amount(CurrencyAmount::new(dai, U256::from(99u64) * U256::from(10u64).pow(U256::from(18u8))))
//!     .maximum_slippage(Percent::from_bps(50).unwrap())
//!     .platform("curve")
//!     .chain_id(ChainId::Mainnet)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(trade.execution_price(), dec!(0.99));
//! ```

use std::fmt;

use alloy_primitives::U512;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::CurrencyAmount;
use super::chain::ChainId;
use super::error::DomainError;
use super::id::PlatformId;
use super::percent::Percent;

/// Finest scale a `Decimal` supports.
const MAX_PRICE_SCALE: u32 = 28;

/// Which side of the swap the caller pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    /// Input amount fixed, output variable.
    ExactInput,
    /// Output amount fixed, input variable.
    ExactOutput,
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactInput => write!(f, "exact-in"),
            Self::ExactOutput => write!(f, "exact-out"),
        }
    }
}

/// A quoted swap on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    trade_type: TradeType,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    maximum_slippage: Percent,
    platform: PlatformId,
    chain_id: ChainId,
    execution_price: Decimal,
}

impl Trade {
    /// Create a new builder for constructing a Trade.
    #[must_use]
    pub fn builder() -> TradeBuilder {
        TradeBuilder::new()
    }

    #[must_use]
    pub const fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    #[must_use]
    pub const fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    #[must_use]
    pub const fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    #[must_use]
    pub const fn maximum_slippage(&self) -> Percent {
        self.maximum_slippage
    }

    #[must_use]
    pub const fn platform(&self) -> &PlatformId {
        &self.platform
    }

    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Output per unit of input, in whole units of each currency.
    #[must_use]
    pub const fn execution_price(&self) -> Decimal {
        self.execution_price
    }

    /// Input paid per unit of output; the reciprocal of the execution price.
    #[must_use]
    pub fn effective_cost(&self) -> Decimal {
        Decimal::ONE
            .checked_div(self.execution_price)
            .unwrap_or(Decimal::MAX)
    }

    /// Least output the caller accepts after slippage.
    ///
    /// Exact-output trades pin the output, so it is returned unchanged.
    #[must_use]
    pub fn minimum_amount_out(&self) -> CurrencyAmount {
        match self.trade_type {
            TradeType::ExactOutput => self.output_amount.clone(),
            TradeType::ExactInput => self.output_amount.discounted_by(self.maximum_slippage),
        }
    }

    /// Most input the caller may spend after slippage.
    ///
    /// Exact-input trades pin the input, so it is returned unchanged.
    #[must_use]
    pub fn maximum_amount_in(&self) -> CurrencyAmount {
        match self.trade_type {
            TradeType::ExactInput => self.input_amount.clone(),
            TradeType::ExactOutput => self.input_amount.marked_up_by(self.maximum_slippage),
        }
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} on {} ({})",
            self.trade_type, self.input_amount, self.output_amount, self.platform, self.chain_id
        )
    }
}

/// Builder for constructing [`Trade`] instances.
///
/// The execution price is derived at build time.
#[derive(Debug, Default)]
pub struct TradeBuilder {
    trade_type: Option<TradeType>,
    input_amount: Option<CurrencyAmount>,
    output_amount: Option<CurrencyAmount>,
    maximum_slippage: Option<Percent>,
    platform: Option<PlatformId>,
    chain_id: Option<ChainId>,
}

impl TradeBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn trade_type(mut self, trade_type: TradeType) -> Self {
        self.trade_type = Some(trade_type);
        self
    }

    #[must_use]
    pub fn input_amount(mut self, amount: CurrencyAmount) -> Self {
        self.input_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn output_amount(mut self, amount: CurrencyAmount) -> Self {
        self.output_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn maximum_slippage(mut self, slippage: Percent) -> Self {
        self.maximum_slippage = Some(slippage);
        self
    }

    #[must_use]
    pub fn platform(mut self, platform: impl Into<PlatformId>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    #[must_use]
    pub fn chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Build the Trade, deriving its execution price.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] for unset fields and
    /// [`DomainError::ZeroAmount`] when either side is zero.
    pub fn build(self) -> Result<Trade, DomainError> {
        let trade_type = self
            .trade_type
            .ok_or(DomainError::MissingField { field: "trade_type" })?;
        let input_amount = self
            .input_amount
            .ok_or(DomainError::MissingField { field: "input_amount" })?;
        let output_amount = self
            .output_amount
            .ok_or(DomainError::MissingField { field: "output_amount" })?;
        let platform = self
            .platform
            .ok_or(DomainError::MissingField { field: "platform" })?;
        let chain_id = self
            .chain_id
            .ok_or(DomainError::MissingField { field: "chain_id" })?;
        let maximum_slippage = self.maximum_slippage.unwrap_or(Percent::ZERO);

        if input_amount.is_zero() {
            return Err(DomainError::ZeroAmount { side: "input" });
        }
        if output_amount.is_zero() {
            return Err(DomainError::ZeroAmount { side: "output" });
        }

        let execution_price = price_of(&input_amount, &output_amount);

        Ok(Trade {
            trade_type,
            input_amount,
            output_amount,
            maximum_slippage,
            platform,
            chain_id,
            execution_price,
        })
    }
}

/// `output / input` in whole units, at the finest scale that fits a
/// `Decimal`. Prices beyond the `Decimal` range saturate to [`Decimal::MAX`].
///
/// The raw amounts stay authoritative; ranking compares them exactly.
fn price_of(input: &CurrencyAmount, output: &CurrencyAmount) -> Decimal {
    let ten = U512::from(10u8);
    let pow10 = |exp: u32| ten.checked_pow(U512::from(exp));
    let input_decimals = u32::from(input.currency().decimals());
    let output_decimals = u32::from(output.currency().decimals());

    let Some(denominator) = pow10(output_decimals)
        .and_then(|scale| U512::from(input.raw()).checked_mul(scale))
    else {
        return Decimal::ZERO;
    };

    for scale in (0..=MAX_PRICE_SCALE).rev() {
        let quotient = pow10(input_decimals + scale)
            .and_then(|factor| U512::from(output.raw()).checked_mul(factor))
            .map(|numerator| numerator / denominator);
        let price = quotient
            .and_then(|quotient| u128::try_from(quotient).ok())
            .and_then(|quotient| i128::try_from(quotient).ok())
            .and_then(|quotient| Decimal::try_from_i128_with_scale(quotient, scale).ok());
        if let Some(price) = price {
            return price.normalize();
        }
    }
    Decimal::MAX
}
