//! Slippage tolerance as a validated fraction.

use std::fmt;

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A fraction in `[0, 1]`, e.g. `0.005` for half a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validate and wrap a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSlippage`] outside `[0, 1]`.
    pub fn try_new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(DomainError::InvalidSlippage { value });
        }
        Ok(Self(value.normalize()))
    }

    /// Build from basis points (`50` => 0.5%).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSlippage`] above 10 000 bps.
    pub fn from_bps(bps: u32) -> Result<Self, DomainError> {
        Self::try_new(Decimal::new(i64::from(bps), 4))
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Exact rational form `(numerator, denominator)` for integer math on raw
    /// amounts.
    #[must_use]
    pub fn as_ratio(self) -> (U256, U256) {
        let numerator = U256::from(self.0.mantissa().unsigned_abs());
        let denominator = U256::from(10u8).pow(U256::from(self.0.scale()));
        (numerator, denominator)
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}
