//! CLI error types.

use thiserror::Error;

use hedgefolio_analytics::AnalyticsError;
use hedgefolio_config::ConfigError;
use hedgefolio_traits::DataFetchError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid lookback period.
    #[error("Invalid period: {0}. Use e.g. 90d, 6mo, 2y or ytd.")]
    InvalidPeriod(String),

    /// Invalid symbol.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Invalid portfolio weight.
    #[error("Invalid weight: {0}. Must be between 0 and 1.")]
    InvalidWeight(f64),

    /// Market data could not be loaded.
    #[error("Data error: {0}")]
    Data(#[from] DataFetchError),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] AnalyticsError),

    /// No platform configuration directory.
    #[error("Could not determine config directory. Use --config.")]
    NoConfigDir,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
