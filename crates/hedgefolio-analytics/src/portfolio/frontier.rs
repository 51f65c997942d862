//! Two-asset risk/return curve.
//!
//! For a weight `w` on the first asset and `1 - w` on the second:
//!
//! ```text
//! E[R](w) = w·μ₁ + (1 − w)·μ₂
//! σ(w)    = sqrt(w²·σ₁² + (1 − w)²·σ₂² + 2·w·(1 − w)·cov)
//! ```
//!
//! The variance is a quadratic in `w`, minimized at
//! `w* = (σ₂² − cov) / (σ₁² + σ₂² − 2·cov)`.

use serde::{Deserialize, Serialize};

use super::{MinVariancePolicy, PairStatistics};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::ZERO_TOLERANCE;

/// One allocation on the risk/return curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPoint {
    /// Weight of the first asset.
    pub weight: f64,
    /// Annualized expected return.
    pub expected_return: f64,
    /// Annualized standard deviation.
    pub standard_deviation: f64,
}

/// Minimum-variance weight of the first asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinVarianceWeight {
    /// Analytic optimum, possibly outside [0, 1].
    pub unconstrained: f64,
    /// Weight actually used for the minimum-variance point.
    pub applied: f64,
    /// True when `applied` differs from `unconstrained` because of clamping.
    pub clamped: bool,
}

/// Annualized moments of two assets, enough to price any allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoAssetPortfolio {
    /// Expected return of the first asset.
    pub mean1: f64,
    /// Expected return of the second asset.
    pub mean2: f64,
    /// Standard deviation of the first asset.
    pub std1: f64,
    /// Standard deviation of the second asset.
    pub std2: f64,
    /// Covariance between the assets.
    pub covariance: f64,
}

impl TwoAssetPortfolio {
    /// Creates a portfolio from means, deviations and covariance.
    pub fn new(mean1: f64, mean2: f64, std1: f64, std2: f64, covariance: f64) -> Self {
        Self {
            mean1,
            mean2,
            std1,
            std2,
            covariance,
        }
    }

    /// Creates a portfolio from a correlation instead of a covariance.
    pub fn with_correlation(mean1: f64, mean2: f64, std1: f64, std2: f64, correlation: f64) -> Self {
        Self::new(mean1, mean2, std1, std2, correlation * std1 * std2)
    }

    /// Expected return with weight `w` on the first asset.
    pub fn expected_return(&self, w: f64) -> f64 {
        w * self.mean1 + (1.0 - w) * self.mean2
    }

    /// Variance with weight `w` on the first asset, floored at zero.
    pub fn variance(&self, w: f64) -> f64 {
        let v = w * w * self.std1 * self.std1
            + (1.0 - w) * (1.0 - w) * self.std2 * self.std2
            + 2.0 * w * (1.0 - w) * self.covariance;
        v.max(0.0)
    }

    /// Standard deviation with weight `w` on the first asset.
    pub fn standard_deviation(&self, w: f64) -> f64 {
        self.variance(w).sqrt()
    }

    /// Risk/return point for weight `w`.
    pub fn point(&self, w: f64) -> PortfolioPoint {
        PortfolioPoint {
            weight: w,
            expected_return: self.expected_return(w),
            standard_deviation: self.standard_deviation(w),
        }
    }

    /// Samples the curve at `w = i / steps` for `i = 0..=steps`.
    ///
    /// Returns `steps + 1` points ordered by weight; an empty vector when
    /// `steps` is zero.
    pub fn frontier(&self, steps: usize) -> Vec<PortfolioPoint> {
        if steps == 0 {
            return Vec::new();
        }
        let n = steps as f64;
        (0..=steps).map(|i| self.point(i as f64 / n)).collect()
    }

    /// Analytic minimum-variance weight of the first asset.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when both assets have zero volatility, or when the
    /// variance does not depend on the weight (perfectly correlated assets
    /// of equal volatility).
    pub fn min_variance_weight(&self, policy: MinVariancePolicy) -> AnalyticsResult<MinVarianceWeight> {
        let v1 = self.std1 * self.std1;
        let v2 = self.std2 * self.std2;
        if self.std1 == 0.0 && self.std2 == 0.0 {
            return Err(AnalyticsError::division_by_zero(
                "minimum-variance weight: both assets have zero volatility",
            ));
        }

        let denominator = v1 + v2 - 2.0 * self.covariance;
        if denominator <= ZERO_TOLERANCE * (v1 + v2) {
            return Err(AnalyticsError::division_by_zero(
                "minimum-variance weight: portfolio variance is flat in the weight",
            ));
        }

        let unconstrained = (v2 - self.covariance) / denominator;
        let applied = match policy {
            MinVariancePolicy::Clamp => unconstrained.clamp(0.0, 1.0),
            MinVariancePolicy::Unconstrained => unconstrained,
        };
        let clamped = applied != unconstrained;
        if clamped {
            tracing::warn!(
                unconstrained,
                applied,
                "minimum-variance weight clamped to a long-only allocation"
            );
        }

        Ok(MinVarianceWeight {
            unconstrained,
            applied,
            clamped,
        })
    }
}

impl From<&PairStatistics> for TwoAssetPortfolio {
    fn from(stats: &PairStatistics) -> Self {
        Self::new(
            stats.mean1,
            stats.mean2,
            stats.std1,
            stats.std2,
            stats.covariance,
        )
    }
}
