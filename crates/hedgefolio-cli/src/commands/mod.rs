//! CLI command implementations.

pub mod config;
pub mod hedge;
pub mod portfolio;
pub mod universe;

pub use config::ConfigArgs;
pub use hedge::HedgeArgs;
pub use portfolio::PortfolioArgs;

use std::path::PathBuf;

use hedgefolio_config::AppConfig;
use hedgefolio_core::{Date, Lookback, Symbol};
use hedgefolio_ext_file::CsvPriceSource;

use crate::error::{CliError, CliResult};

/// Resolved configuration shared by all commands.
pub struct Context {
    /// Effective configuration.
    pub config: AppConfig,
    /// Price directory after command-line overrides.
    pub data_dir: PathBuf,
}

impl Context {
    /// Builds the context, letting `data_dir` override the configured one.
    pub fn new(config: AppConfig, data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| config.data.prices_dir.clone());
        Self { config, data_dir }
    }

    /// Opens the CSV price source.
    pub fn price_source(&self) -> CliResult<CsvPriceSource> {
        Ok(CsvPriceSource::new(&self.data_dir)?)
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a lookback such as `2y` or `6mo`.
pub fn parse_period(s: &str) -> CliResult<Lookback> {
    s.parse().map_err(|_| CliError::InvalidPeriod(s.to_string()))
}

/// Parses a ticker symbol.
pub fn parse_symbol(s: &str) -> CliResult<Symbol> {
    s.parse().map_err(|_| CliError::InvalidSymbol(s.to_string()))
}

/// Validates a portfolio weight.
pub fn validate_weight(weight: f64) -> CliResult<f64> {
    if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
        return Err(CliError::InvalidWeight(weight));
    }
    Ok(weight)
}

/// Logs a warning for a symbol outside the configured universe.
pub fn warn_outside_universe(symbol: &Symbol, role: &str, in_universe: bool) {
    if !in_universe {
        tracing::warn!(%symbol, role, "symbol is not in the configured universe");
    }
}
