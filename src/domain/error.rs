//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors and builders that
//! validate inputs.
//!
//! # Examples
//!
//! ```
//! use ecorouter::domain::error::DomainError;
//! use ecorouter::domain::percent::Percent;
//! use rust_decimal_macros::dec;
//!
//! let result = Percent::try_new(dec!(1.5));
//! assert!(matches!(result, Err(DomainError::InvalidSlippage { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Chain id is not one of the supported networks.
    #[error("unknown chain id {id}")]
    UnknownChain {
        /// The raw chain id that was provided.
        id: u64,
    },

    /// Arithmetic between amounts of different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Symbol of the left-hand currency.
        left: String,
        /// Symbol of the right-hand currency.
        right: String,
    },

    /// Subtraction would produce a negative magnitude.
    #[error("amount underflow")]
    AmountUnderflow,

    /// Magnitude does not fit the target representation.
    #[error("amount overflow")]
    AmountOverflow,

    /// Trades require strictly positive input and output amounts.
    #[error("{side} amount must be positive")]
    ZeroAmount {
        /// Which side of the trade was zero.
        side: &'static str,
    },

    /// Slippage must be a fraction in `[0, 1]`.
    #[error("slippage must be between 0 and 1, got {value}")]
    InvalidSlippage {
        /// The invalid value that was provided.
        value: Decimal,
    },

    /// A required field was not supplied to a builder.
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Native currencies cannot be wrapped on a chain without a wrapped token.
    #[error("no wrapped native token registered for chain {chain}")]
    NoWrappedNative {
        /// Name of the chain.
        chain: String,
    },
}
