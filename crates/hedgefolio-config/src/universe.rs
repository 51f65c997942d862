//! Instrument universes offered for selection.

use serde::{Deserialize, Serialize};

use hedgefolio_core::{Date, Lookback, Symbol};

use crate::error::{Validate, ValidationError};

/// `[universe]` section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Hedging instruments and date range.
    pub hedging: HedgingUniverse,
    /// Portfolio instruments and lookbacks.
    pub portfolio: PortfolioUniverse,
}

/// `[universe.hedging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HedgingUniverse {
    /// Positions that can be hedged.
    pub base: Vec<Symbol>,
    /// Instruments that can be used as a hedge.
    pub hedge: Vec<Symbol>,
    /// Default start date (inclusive).
    pub start: Date,
    /// Default end date (exclusive).
    pub end: Date,
}

impl Default for HedgingUniverse {
    fn default() -> Self {
        Self {
            base: symbols(&[
                "AAPL", "GOOG", "MSFT", "AMZN", "META", "JPM", "V", "JNJ", "WMT", "PG",
            ]),
            hedge: symbols(&["NSRGY", "KO", "PEP", "COST", "PG"]),
            start: Date::start_of_year(2021),
            end: Date::end_of_year(2021),
        }
    }
}

/// `[universe.portfolio]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioUniverse {
    /// Choices for the first asset.
    pub first: Vec<Symbol>,
    /// Choices for the second asset.
    pub second: Vec<Symbol>,
    /// Lookback choices; the first is the default.
    pub periods: Vec<Lookback>,
    /// Default weight of the first asset.
    pub default_weight: f64,
}

impl Default for PortfolioUniverse {
    fn default() -> Self {
        Self {
            first: symbols(&["AAPL", "GOOG", "MSFT", "AMZN", "META", "JPM"]),
            second: symbols(&["V", "JNJ", "WMT", "PG", "IBM", "PYPL"]),
            periods: vec![
                Lookback::Years(2),
                Lookback::Years(3),
                Lookback::Years(4),
                Lookback::Years(5),
            ],
            default_weight: 0.5,
        }
    }
}

impl PortfolioUniverse {
    /// Lookback used when none is requested.
    pub fn default_period(&self) -> Lookback {
        self.periods.first().copied().unwrap_or(Lookback::Years(2))
    }
}

fn symbols(names: &[&str]) -> Vec<Symbol> {
    names.iter().map(Symbol::new).collect()
}

impl Validate for UniverseConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let non_empty = [
            ("universe.hedging.base", self.hedging.base.is_empty()),
            ("universe.hedging.hedge", self.hedging.hedge.is_empty()),
            ("universe.portfolio.first", self.portfolio.first.is_empty()),
            ("universe.portfolio.second", self.portfolio.second.is_empty()),
            ("universe.portfolio.periods", self.portfolio.periods.is_empty()),
        ];
        for (field, empty) in non_empty {
            if empty {
                errors.push(ValidationError::with_rule(
                    field,
                    "List cannot be empty",
                    "non_empty",
                ));
            }
        }

        if self.hedging.start >= self.hedging.end {
            errors.push(ValidationError::with_rule(
                "universe.hedging.start",
                format!(
                    "Start date {} must be before end date {}",
                    self.hedging.start, self.hedging.end
                ),
                "valid_range",
            ));
        }

        let weight = self.portfolio.default_weight;
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            errors.push(ValidationError::with_rule(
                "universe.portfolio.default_weight",
                format!("Weight {weight} must be between 0 and 1"),
                "unit_interval",
            ));
        }

        errors
    }
}
