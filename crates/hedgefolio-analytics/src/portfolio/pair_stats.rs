//! Annualized statistics of a pair of return series.

use serde::{Deserialize, Serialize};

use hedgefolio_core::{AlignedPrices, PriceSeries, ReturnKind, ReturnSeries, Symbol};
use hedgefolio_math::stats::{correlation, covariance, mean, std_dev, SAMPLE_DDOF};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Minimum daily returns per leg for sample statistics.
pub const MIN_PORTFOLIO_RETURNS: usize = 2;

/// Annualized moments of two assets' daily percentage returns.
///
/// `correlation` is NaN when either leg has zero variance; `covariance` is
/// then exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairStatistics {
    /// First asset.
    pub first: Symbol,
    /// Second asset.
    pub second: Symbol,
    /// Annualized mean return of the first asset.
    pub mean1: f64,
    /// Annualized mean return of the second asset.
    pub mean2: f64,
    /// Annualized standard deviation of the first asset.
    pub std1: f64,
    /// Annualized standard deviation of the second asset.
    pub std2: f64,
    /// Pearson correlation of the daily returns.
    pub correlation: f64,
    /// Annualized sample covariance.
    pub covariance: f64,
    /// Daily returns used per leg.
    pub observations: usize,
    /// Annualization factor applied.
    pub periods_per_year: u32,
}

impl PairStatistics {
    /// Aligns two price series and computes statistics of their percentage
    /// returns.
    pub fn from_prices(
        first: &PriceSeries,
        second: &PriceSeries,
        periods_per_year: u32,
    ) -> AnalyticsResult<Self> {
        let aligned = AlignedPrices::new(first, second);
        let (r1, r2) = aligned.returns(ReturnKind::Percentage)?;
        Self::from_returns(&r1, &r2, periods_per_year)
    }

    /// Computes statistics of two date-aligned return series.
    pub fn from_returns(
        first: &ReturnSeries,
        second: &ReturnSeries,
        periods_per_year: u32,
    ) -> AnalyticsResult<Self> {
        if periods_per_year == 0 {
            return Err(AnalyticsError::InvalidInput(
                "periods_per_year must be positive".to_string(),
            ));
        }
        if first.len() != second.len() {
            return Err(AnalyticsError::InvalidInput(format!(
                "return series differ in length: {} vs {}",
                first.len(),
                second.len()
            )));
        }
        if first.len() < MIN_PORTFOLIO_RETURNS {
            return Err(AnalyticsError::insufficient_data(
                "portfolio statistics",
                MIN_PORTFOLIO_RETURNS,
                first.len(),
            ));
        }

        let (x, y) = (first.values(), second.values());
        let periods = f64::from(periods_per_year);
        let scale = periods.sqrt();

        let stats = Self {
            first: first.symbol().clone(),
            second: second.symbol().clone(),
            mean1: mean(x)? * periods,
            mean2: mean(y)? * periods,
            std1: std_dev(x, SAMPLE_DDOF)? * scale,
            std2: std_dev(y, SAMPLE_DDOF)? * scale,
            correlation: correlation(x, y)?,
            covariance: covariance(x, y, SAMPLE_DDOF)? * periods,
            observations: first.len(),
            periods_per_year,
        };

        tracing::debug!(
            first = %stats.first,
            second = %stats.second,
            observations = stats.observations,
            mean1 = stats.mean1,
            mean2 = stats.mean2,
            std1 = stats.std1,
            std2 = stats.std2,
            correlation = stats.correlation,
            "computed pair statistics"
        );

        Ok(stats)
    }

    /// Returns true when the correlation is defined.
    pub fn has_correlation(&self) -> bool {
        self.correlation.is_finite()
    }
}
