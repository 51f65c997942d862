//! Analytics settings.

use serde::{Deserialize, Serialize};

use hedgefolio_analytics::portfolio::{
    MinVariancePolicy, PortfolioSettings, DEFAULT_FRONTIER_STEPS, TRADING_DAYS_PER_YEAR,
};

use crate::error::{Validate, ValidationError};

/// `[analytics]` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Periods per year used to annualize daily statistics.
    pub periods_per_year: u32,
    /// Frontier sample intervals.
    pub frontier_steps: usize,
    /// Treatment of out-of-range minimum-variance weights.
    pub min_variance_policy: MinVariancePolicy,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
            frontier_steps: DEFAULT_FRONTIER_STEPS,
            min_variance_policy: MinVariancePolicy::Clamp,
        }
    }
}

impl AnalyticsConfig {
    /// Settings for the portfolio engine.
    pub fn portfolio_settings(&self) -> PortfolioSettings {
        PortfolioSettings::new()
            .with_periods_per_year(self.periods_per_year)
            .with_frontier_steps(self.frontier_steps)
            .with_min_variance_policy(self.min_variance_policy)
    }
}

impl Validate for AnalyticsConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.periods_per_year == 0 {
            errors.push(ValidationError::with_rule(
                "analytics.periods_per_year",
                "Periods per year must be positive",
                "positive_periods",
            ));
        }

        if self.frontier_steps == 0 {
            errors.push(ValidationError::with_rule(
                "analytics.frontier_steps",
                "Frontier needs at least one step",
                "min_frontier_steps",
            ));
        }

        errors
    }
}
