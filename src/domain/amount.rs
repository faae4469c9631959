//! Currency amounts in smallest units.

use std::fmt;

use alloy_primitives::U256;
use rust_decimal::Decimal;

use super::currency::Currency;
use super::error::DomainError;
use super::percent::Percent;

/// Largest scale `rust_decimal` can represent.
const MAX_DECIMAL_SCALE: u32 = 28;

/// A currency paired with a non-negative raw magnitude (wei, satoshi, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyAmount {
    currency: Currency,
    raw: U256,
}

impl CurrencyAmount {
    pub fn new(currency: impl Into<Currency>, raw: impl Into<U256>) -> Self {
        Self {
            currency: currency.into(),
            raw: raw.into(),
        }
    }

    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// # Errors
    ///
    /// Fails on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Self) -> Result<Self, DomainError> {
        self.ensure_same_currency(other)?;
        let raw = self
            .raw
            .checked_add(other.raw)
            .ok_or(DomainError::AmountOverflow)?;
        Ok(Self::new(self.currency.clone(), raw))
    }

    /// # Errors
    ///
    /// Fails on currency mismatch or when `other` exceeds `self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, DomainError> {
        self.ensure_same_currency(other)?;
        let raw = self
            .raw
            .checked_sub(other.raw)
            .ok_or(DomainError::AmountUnderflow)?;
        Ok(Self::new(self.currency.clone(), raw))
    }

    /// Scale by `1 / (1 + slippage)`, rounding down.
    #[must_use]
    pub fn discounted_by(&self, slippage: Percent) -> Self {
        let (numerator, denominator) = slippage.as_ratio();
        let raw = self
            .raw
            .saturating_mul(denominator)
            .checked_div(denominator.saturating_add(numerator))
            .unwrap_or(self.raw);
        Self::new(self.currency.clone(), raw)
    }

    /// Scale by `1 + slippage`, rounding down.
    #[must_use]
    pub fn marked_up_by(&self, slippage: Percent) -> Self {
        let (numerator, denominator) = slippage.as_ratio();
        let raw = self
            .raw
            .saturating_mul(denominator.saturating_add(numerator))
            .checked_div(denominator)
            .unwrap_or(self.raw);
        Self::new(self.currency.clone(), raw)
    }

    /// Amount in whole units (`raw / 10^decimals`).
    ///
    /// Magnitudes too wide for a `Decimal` mantissa drop their lowest
    /// fractional digits until they fit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::AmountOverflow`] when even the integer part
    /// exceeds what a `Decimal` can hold.
    pub fn to_decimal(&self) -> Result<Decimal, DomainError> {
        let decimals = u32::from(self.currency.decimals());
        let ten = U256::from(10u8);
        for scale in (0..=decimals.min(MAX_DECIMAL_SCALE)).rev() {
            let mantissa = match ten.checked_pow(U256::from(decimals - scale)) {
                Some(divisor) => self.raw / divisor,
                None => U256::ZERO,
            };
            let value = u128::try_from(mantissa)
                .ok()
                .and_then(|mantissa| i128::try_from(mantissa).ok())
                .and_then(|mantissa| Decimal::try_from_i128_with_scale(mantissa, scale).ok());
            if let Some(value) = value {
                return Ok(value);
            }
        }
        Err(DomainError::AmountOverflow)
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                left: self.currency.symbol(),
                right: other.currency.symbol(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(value) => write!(f, "{} {}", value.normalize(), self.currency),
            Err(_) => write!(f, "{} (raw) {}", self.raw, self.currency),
        }
    }
}
