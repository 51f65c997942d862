//! Portfolio statistics for a chosen allocation between two assets.

use serde::{Deserialize, Serialize};

use hedgefolio_core::PriceSeries;

use super::{
    MinVarianceWeight, PairStatistics, PortfolioPoint, PortfolioSettings, TwoAssetPortfolio,
};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Full result of a two-asset portfolio run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStatistics {
    /// Annualized moments of the pair.
    pub pair_stats: PairStatistics,
    /// Sampled frontier, ordered by weight from 0 to 1.
    pub frontier: Vec<PortfolioPoint>,
    /// Point for the caller's weight.
    pub chosen_point: PortfolioPoint,
    /// Point for the applied minimum-variance weight.
    pub min_variance_point: PortfolioPoint,
    /// Fully invested in the first asset.
    pub asset1_point: PortfolioPoint,
    /// Fully invested in the second asset.
    pub asset2_point: PortfolioPoint,
    /// Minimum-variance weight details.
    pub min_variance_weight: MinVarianceWeight,
}

impl PortfolioStatistics {
    /// The pair as a portfolio value, for evaluating other weights.
    pub fn portfolio(&self) -> TwoAssetPortfolio {
        TwoAssetPortfolio::from(&self.pair_stats)
    }
}

/// Computes portfolio statistics under fixed settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioStatsEngine {
    settings: PortfolioSettings,
}

impl PortfolioStatsEngine {
    /// Creates an engine with the given settings.
    pub fn new(settings: PortfolioSettings) -> Self {
        Self { settings }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &PortfolioSettings {
        &self.settings
    }

    /// Computes statistics for `weight` in the first asset.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a weight outside [0, 1], a zero annualization
    ///   factor or zero frontier steps
    /// - `InsufficientData` with fewer than two aligned daily returns
    /// - `DivisionByZero` when the minimum-variance weight is undefined
    pub fn compute(
        &self,
        first: &PriceSeries,
        second: &PriceSeries,
        weight: f64,
    ) -> AnalyticsResult<PortfolioStatistics> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(AnalyticsError::InvalidInput(format!(
                "weight must be in [0, 1], got {weight}"
            )));
        }
        if self.settings.frontier_steps == 0 {
            return Err(AnalyticsError::InvalidInput(
                "frontier_steps must be at least 1".to_string(),
            ));
        }

        let pair_stats = PairStatistics::from_prices(first, second, self.settings.periods_per_year)?;
        let portfolio = TwoAssetPortfolio::from(&pair_stats);
        let min_variance_weight = portfolio.min_variance_weight(self.settings.min_variance_policy)?;

        Ok(PortfolioStatistics {
            frontier: portfolio.frontier(self.settings.frontier_steps),
            chosen_point: portfolio.point(weight),
            min_variance_point: portfolio.point(min_variance_weight.applied),
            asset1_point: portfolio.point(1.0),
            asset2_point: portfolio.point(0.0),
            min_variance_weight,
            pair_stats,
        })
    }
}

/// Computes portfolio statistics with the default frontier and clamping.
///
/// See [`PortfolioStatsEngine::compute`] for the error conditions.
pub fn compute_portfolio_statistics(
    first: &PriceSeries,
    second: &PriceSeries,
    chosen_weight: f64,
    periods_per_year: u32,
) -> AnalyticsResult<PortfolioStatistics> {
    let settings = PortfolioSettings::default().with_periods_per_year(periods_per_year);
    PortfolioStatsEngine::new(settings).compute(first, second, chosen_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{MinVariancePolicy, TRADING_DAYS_PER_YEAR};
    use approx::assert_relative_eq;
    use hedgefolio_core::{Date, Symbol};

    fn series(symbol: &str, prices: &[f64]) -> PriceSeries {
        let start = Date::from_ymd(2021, 1, 4).unwrap();
        PriceSeries::from_pairs(
            Symbol::new(symbol),
            prices
                .iter()
                .enumerate()
                .map(|(i, p)| (start.add_days(i as i64), *p))
                .collect(),
        )
        .unwrap()
    }

    fn pair() -> (PriceSeries, PriceSeries) {
        (
            series("AAPL", &[100.0, 102.0, 101.0, 105.0, 104.0, 106.5]),
            series("JNJ", &[50.0, 49.0, 51.0, 50.0, 50.8, 50.1]),
        )
    }

    #[test]
    fn test_points() {
        let (a, b) = pair();
        let stats = compute_portfolio_statistics(&a, &b, 0.25, TRADING_DAYS_PER_YEAR).unwrap();

        assert_eq!(stats.frontier.len(), 101);
        assert_relative_eq!(stats.asset1_point.standard_deviation, stats.pair_stats.std1, epsilon = 1e-12);
        assert_relative_eq!(stats.asset2_point.standard_deviation, stats.pair_stats.std2, epsilon = 1e-12);
        assert_relative_eq!(stats.asset1_point.expected_return, stats.pair_stats.mean1, epsilon = 1e-12);
        assert_eq!(stats.chosen_point.weight, 0.25);
        assert_eq!(stats.frontier[25].expected_return, stats.chosen_point.expected_return);
        assert!(stats
            .frontier
            .iter()
            .all(|p| stats.min_variance_point.standard_deviation <= p.standard_deviation + 1e-12));
    }

    #[test]
    fn test_invalid_weight() {
        let (a, b) = pair();
        for weight in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                compute_portfolio_statistics(&a, &b, weight, TRADING_DAYS_PER_YEAR),
                Err(AnalyticsError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_zero_periods_per_year() {
        let (a, b) = pair();
        assert!(matches!(
            compute_portfolio_statistics(&a, &b, 0.5, 0),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_both_flat_is_division_by_zero() {
        let a = series("AAPL", &[100.0, 100.0, 100.0]);
        let b = series("JNJ", &[50.0, 50.0, 50.0]);
        assert!(matches!(
            compute_portfolio_statistics(&a, &b, 0.5, TRADING_DAYS_PER_YEAR),
            Err(AnalyticsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_one_flat_leg_puts_everything_in_it() {
        let a = series("AAPL", &[100.0, 102.0, 101.0, 105.0]);
        let b = series("CASH", &[1.0, 1.0, 1.0, 1.0]);
        let stats = compute_portfolio_statistics(&a, &b, 0.5, TRADING_DAYS_PER_YEAR).unwrap();
        assert!(stats.pair_stats.correlation.is_nan());
        assert_eq!(stats.min_variance_weight.applied, 0.0);
        assert_eq!(stats.min_variance_point.standard_deviation, 0.0);
    }

    #[test]
    fn test_engine_settings() {
        let (a, b) = pair();
        let engine = PortfolioStatsEngine::new(
            PortfolioSettings::new()
                .with_frontier_steps(10)
                .with_min_variance_policy(MinVariancePolicy::Unconstrained),
        );
        let stats = engine.compute(&a, &b, 0.5).unwrap();
        assert_eq!(stats.frontier.len(), 11);
        assert!(!stats.min_variance_weight.clamped);
        assert_eq!(
            stats.min_variance_point.weight,
            stats.min_variance_weight.unconstrained
        );

        let zero_steps = PortfolioStatsEngine::new(PortfolioSettings::new().with_frontier_steps(0));
        assert!(zero_steps.compute(&a, &b, 0.5).is_err());
    }
}
