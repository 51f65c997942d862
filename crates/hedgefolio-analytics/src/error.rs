//! Error types for hedging and portfolio analytics.

use thiserror::Error;

use hedgefolio_core::CoreError;
use hedgefolio_math::MathError;

/// A specialized Result type for analytics.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytics calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Too few aligned observations for the statistic.
    #[error("insufficient data for {context}: need at least {required}, got {actual}")]
    InsufficientData {
        /// What was being computed.
        context: String,
        /// Minimum required observations.
        required: usize,
        /// Observations available.
        actual: usize,
    },

    /// Degenerate volatility or correlation inputs.
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Which quantity vanished.
        context: String,
    },

    /// Invalid input parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Series construction or transformation failed.
    #[error(transparent)]
    Series(#[from] CoreError),

    /// Numerical routine failed.
    #[error("calculation failed: {0}")]
    Math(MathError),
}

impl AnalyticsError {
    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(context: impl Into<String>, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            context: context.into(),
            required,
            actual,
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_data("sample statistics", required, actual)
            }
            MathError::DivisionByZero { value } => {
                Self::division_by_zero(format!("numerical routine (denominator {value:.2e})"))
            }
            other => Self::Math(other),
        }
    }
}
