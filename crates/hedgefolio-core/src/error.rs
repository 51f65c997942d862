//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or transforming series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid lookback period specification.
    #[error("Invalid period '{input}': {reason}")]
    InvalidPeriod {
        /// The rejected input.
        input: String,
        /// Reason for rejection.
        reason: String,
    },

    /// Invalid instrument symbol.
    #[error("Invalid symbol: {reason}")]
    InvalidSymbol {
        /// Reason for rejection.
        reason: String,
    },

    /// Series violates its ordering invariants.
    #[error("Invalid series for {symbol}: {reason}")]
    InvalidSeries {
        /// Symbol of the offending series.
        symbol: String,
        /// Description of the violation.
        reason: String,
    },

    /// A price cannot be used for the requested transformation.
    #[error("Invalid price {value} on {date}: {reason}")]
    InvalidPrice {
        /// The offending price.
        value: f64,
        /// Date of the observation.
        date: String,
        /// Reason for rejection.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid series error.
    #[must_use]
    pub fn invalid_series(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}
