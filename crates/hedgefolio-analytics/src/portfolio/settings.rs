//! Settings for portfolio statistics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading days used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Frontier sample intervals: weights step by `1 / steps`.
pub const DEFAULT_FRONTIER_STEPS: usize = 100;

/// How the analytic minimum-variance weight is applied.
///
/// The analytic weight falls outside [0, 1] when the optimum involves
/// shorting one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinVariancePolicy {
    /// Clamp to a long-only weight in [0, 1].
    #[default]
    Clamp,
    /// Use the analytic weight as-is.
    Unconstrained,
}

impl fmt::Display for MinVariancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::Unconstrained => write!(f, "unconstrained"),
        }
    }
}

impl FromStr for MinVariancePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "unconstrained" => Ok(Self::Unconstrained),
            other => Err(format!(
                "unknown min-variance policy '{other}' (expected clamp or unconstrained)"
            )),
        }
    }
}

/// Parameters of a portfolio statistics run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSettings {
    /// Periods per year used for annualization.
    pub periods_per_year: u32,
    /// Number of frontier intervals; the frontier has `steps + 1` points.
    pub frontier_steps: usize,
    /// Treatment of out-of-range minimum-variance weights.
    pub min_variance_policy: MinVariancePolicy,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
            frontier_steps: DEFAULT_FRONTIER_STEPS,
            min_variance_policy: MinVariancePolicy::Clamp,
        }
    }
}

impl PortfolioSettings {
    /// Creates settings with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annualization factor.
    #[must_use]
    pub fn with_periods_per_year(mut self, periods: u32) -> Self {
        self.periods_per_year = periods;
        self
    }

    /// Sets the number of frontier intervals.
    #[must_use]
    pub fn with_frontier_steps(mut self, steps: usize) -> Self {
        self.frontier_steps = steps;
        self
    }

    /// Sets the minimum-variance policy.
    #[must_use]
    pub fn with_min_variance_policy(mut self, policy: MinVariancePolicy) -> Self {
        self.min_variance_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let settings = PortfolioSettings::default();
        assert_eq!(settings.periods_per_year, 252);
        assert_eq!(settings.frontier_steps, 100);
        assert_eq!(settings.min_variance_policy, MinVariancePolicy::Clamp);
    }

    #[test]
    fn test_builder() {
        let settings = PortfolioSettings::new()
            .with_periods_per_year(12)
            .with_frontier_steps(20)
            .with_min_variance_policy(MinVariancePolicy::Unconstrained);
        assert_eq!(settings.periods_per_year, 12);
        assert_eq!(settings.frontier_steps, 20);
        assert_eq!(settings.min_variance_policy, MinVariancePolicy::Unconstrained);
    }

    #[test]
    fn test_policy_parse_and_serde() {
        assert_eq!("Clamp".parse::<MinVariancePolicy>().unwrap(), MinVariancePolicy::Clamp);
        assert!("short".parse::<MinVariancePolicy>().is_err());

        let json = serde_json::to_string(&MinVariancePolicy::Unconstrained).unwrap();
        assert_eq!(json, "\"unconstrained\"");
    }
}
