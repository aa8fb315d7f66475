//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use headline_reactor::domain::error::DomainError;
//! use headline_reactor::domain::Confidence;
//!
//! let result = Confidence::try_new(1.5);
//! assert!(matches!(result, Err(DomainError::ConfidenceOutOfRange { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Confidence scores live in the closed unit interval.
    #[error("confidence must be within [0, 1], got {value}")]
    ConfidenceOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// Prices used for strikes and bands must be positive.
    #[error("price must be positive, got {price}")]
    NonPositivePrice {
        /// The rejected price.
        price: Decimal,
    },

    /// A quote needs at least one usable side.
    #[error("quote has no usable side (bid {bid}, ask {ask})")]
    EmptyQuote {
        /// Quoted bid.
        bid: Decimal,
        /// Quoted ask.
        ask: Decimal,
    },

    /// Bid above ask cannot be banded.
    #[error("crossed quote: bid {bid} > ask {ask}")]
    CrossedQuote {
        /// Quoted bid.
        bid: Decimal,
        /// Quoted ask.
        ask: Decimal,
    },

    /// Order sides are `BUY` or `SELL`.
    #[error("unknown order side '{0}'")]
    UnknownSide(String),
}
