//! Minimum-variance hedge ratio.
//!
//! For a position in a base instrument hedged with `h` units of a second
//! instrument per unit of base, the variance of the daily change of
//! `base - h * hedge` is minimized at
//!
//! ```text
//! h* = σ_base / σ_hedge × ρ
//! ```
//!
//! where σ are the sample standard deviations of the absolute daily price
//! changes and ρ their Pearson correlation.

use serde::{Deserialize, Serialize};

use hedgefolio_core::{AlignedPrices, PriceSeries, ReturnKind, Symbol};
use hedgefolio_math::stats::{correlation, std_dev, SAMPLE_DDOF};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::ZERO_TOLERANCE;

/// Minimum aligned price observations for a hedge ratio.
pub const MIN_HEDGE_OBSERVATIONS: usize = 2;

/// Result of a hedge ratio calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeRatio {
    /// Instrument being hedged.
    pub base: Symbol,
    /// Hedging instrument.
    pub hedge: Symbol,
    /// Units of the hedging instrument per unit of base.
    pub ratio: f64,
    /// Correlation of the daily price changes.
    pub correlation: f64,
    /// Standard deviation of the base daily price change.
    pub std_base: f64,
    /// Standard deviation of the hedge daily price change.
    pub std_hedge: f64,
    /// Aligned price observations used.
    pub observations: usize,
}

impl HedgeRatio {
    /// Units of the hedging instrument to short against `base_units`.
    pub fn hedge_quantity(&self, base_units: f64) -> f64 {
        self.ratio * base_units
    }

    /// Returns true when base and hedge are the same instrument.
    pub fn is_self_hedge(&self) -> bool {
        self.base == self.hedge
    }
}

/// Calculates the minimum-variance hedge ratio of `base` against `hedge`.
///
/// The series are aligned on their common dates first. When both series
/// are the same instrument the correlation is taken as exactly 1.
///
/// # Errors
///
/// - `InsufficientData` with fewer than two aligned observations (or too few
///   daily changes for a sample standard deviation)
/// - `DivisionByZero` when the hedge (or, for distinct instruments, the
///   base) never changes price
pub fn compute_hedge_ratio(base: &PriceSeries, hedge: &PriceSeries) -> AnalyticsResult<HedgeRatio> {
    let aligned = AlignedPrices::new(base, hedge);
    hedge_ratio_from_aligned(&aligned)
}

pub(crate) fn hedge_ratio_from_aligned(aligned: &AlignedPrices) -> AnalyticsResult<HedgeRatio> {
    if aligned.len() < MIN_HEDGE_OBSERVATIONS {
        return Err(AnalyticsError::insufficient_data(
            "hedge ratio",
            MIN_HEDGE_OBSERVATIONS,
            aligned.len(),
        ));
    }

    let (base_changes, hedge_changes) = aligned.returns(ReturnKind::Absolute)?;
    let std_base = std_dev(base_changes.values(), SAMPLE_DDOF)?;
    let std_hedge = std_dev(hedge_changes.values(), SAMPLE_DDOF)?;

    if std_hedge < ZERO_TOLERANCE {
        return Err(AnalyticsError::division_by_zero(format!(
            "hedge ratio: {} daily changes have zero standard deviation",
            aligned.second_symbol()
        )));
    }

    let self_hedge = aligned.first_symbol() == aligned.second_symbol();
    let rho = if self_hedge {
        1.0
    } else {
        if std_base < ZERO_TOLERANCE {
            return Err(AnalyticsError::division_by_zero(format!(
                "correlation: {} daily changes have zero standard deviation",
                aligned.first_symbol()
            )));
        }
        correlation(base_changes.values(), hedge_changes.values())?
    };

    let ratio = std_base / std_hedge * rho;

    tracing::debug!(
        base = %aligned.first_symbol(),
        hedge = %aligned.second_symbol(),
        observations = aligned.len(),
        std_base,
        std_hedge,
        correlation = rho,
        ratio,
        "computed hedge ratio"
    );

    Ok(HedgeRatio {
        base: aligned.first_symbol().clone(),
        hedge: aligned.second_symbol().clone(),
        ratio,
        correlation: rho,
        std_base,
        std_hedge,
        observations: aligned.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hedgefolio_core::Date;

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

    #[test]
    fn test_self_hedge_is_one() {
        let base = series("PG", &[140.0, 141.5, 139.8, 142.2, 143.0]);
        let result = compute_hedge_ratio(&base, &base.clone()).unwrap();

        assert_eq!(result.correlation, 1.0);
        assert_eq!(result.ratio, 1.0);
        assert!(result.is_self_hedge());
    }

    #[test]
    fn test_scaled_copy_hedges_at_scale() {
        // Hedge moves exactly half as much as the base: ratio 2
        let base = series("AAPL", &[100.0, 102.0, 101.0, 105.0, 104.0]);
        let hedge = series("KO", &[50.0, 51.0, 50.5, 52.5, 52.0]);
        let result = compute_hedge_ratio(&base, &hedge).unwrap();

        assert_relative_eq!(result.correlation, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.ratio, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.hedge_quantity(100.0), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_mover_gives_negative_ratio() {
        let base = series("AAPL", &[100.0, 102.0, 101.0, 105.0]);
        let hedge = series("KO", &[50.0, 48.0, 49.0, 45.0]);
        let result = compute_hedge_ratio(&base, &hedge).unwrap();

        assert_relative_eq!(result.correlation, -1.0, epsilon = 1e-12);
        assert_relative_eq!(result.ratio, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_textbook_formula() {
        let base = series("AAPL", &[100.0, 102.0, 101.0, 105.0]);
        let hedge = series("KO", &[50.0, 49.0, 51.0, 50.0]);
        let result = compute_hedge_ratio(&base, &hedge).unwrap();

        // Δbase = [2, -1, 4]: sample variance 19/3
        // Δhedge = [-1, 2, -1]: sample variance 3, covariance -4
        let std_base = (19.0f64 / 3.0).sqrt();
        let std_hedge = 3.0f64.sqrt();
        let rho = -4.0 / (std_base * std_hedge);
        assert_relative_eq!(result.std_base, std_base, epsilon = 1e-12);
        assert_relative_eq!(result.std_hedge, std_hedge, epsilon = 1e-12);
        assert_relative_eq!(result.correlation, rho, epsilon = 1e-12);
        // Minimum-variance hedge equals cov / var(hedge)
        assert_relative_eq!(result.ratio, -4.0 / 3.0, epsilon = 1e-12);
        assert_eq!(result.observations, 4);
    }

    #[test]
    fn test_flat_hedge_is_division_by_zero() {
        let base = series("AAPL", &[100.0, 102.0, 101.0]);
        let hedge = series("KO", &[50.0, 50.0, 50.0]);
        assert!(matches!(
            compute_hedge_ratio(&base, &hedge),
            Err(AnalyticsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_flat_base_is_division_by_zero() {
        let base = series("AAPL", &[100.0, 100.0, 100.0]);
        let hedge = series("KO", &[50.0, 51.0, 49.0]);
        assert!(matches!(
            compute_hedge_ratio(&base, &hedge),
            Err(AnalyticsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_insufficient_data() {
        let base = series("AAPL", &[100.0]);
        let hedge = series("KO", &[50.0]);
        assert!(matches!(
            compute_hedge_ratio(&base, &hedge),
            Err(AnalyticsError::InsufficientData { actual: 1, .. })
        ));

        // Two prices give a single change: still too few for a sample deviation
        let base = series("AAPL", &[100.0, 101.0]);
        let hedge = series("KO", &[50.0, 51.0]);
        assert!(matches!(
            compute_hedge_ratio(&base, &hedge),
            Err(AnalyticsError::InsufficientData { .. })
        ));
    }
}
