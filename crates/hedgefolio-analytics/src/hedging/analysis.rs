//! Hedge effectiveness: scatter data, trend line and the hedged position.

use serde::{Deserialize, Serialize};

use hedgefolio_core::{AlignedPrices, Date, PriceSeries, ReturnKind};
use hedgefolio_math::regression::{ols, OlsFit};
use hedgefolio_math::stats::{variance, SAMPLE_DDOF};

use super::hedge_ratio::{hedge_ratio_from_aligned, HedgeRatio};
use crate::error::AnalyticsResult;

/// Paired daily changes with their least-squares trend line.
///
/// Base changes are on the x axis, hedge changes on the y axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterData {
    /// Date each change ends on.
    pub dates: Vec<Date>,
    /// Daily change of the base instrument.
    pub base_changes: Vec<f64>,
    /// Daily change of the hedging instrument.
    pub hedge_changes: Vec<f64>,
    /// Trend line of hedge change on base change.
    pub trend: OlsFit,
}

impl ScatterData {
    /// Number of plotted points.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates `(base_change, hedge_change)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.base_changes
            .iter()
            .copied()
            .zip(self.hedge_changes.iter().copied())
    }
}

/// Value of one unit of base hedged with `ratio` units of the hedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgedPosition {
    /// Aligned price dates.
    pub dates: Vec<Date>,
    /// Base prices on `dates`.
    pub base_prices: Vec<f64>,
    /// Hedge prices on `dates`.
    pub hedge_prices: Vec<f64>,
    /// `base - ratio * hedge` on each date.
    pub prices: Vec<f64>,
    /// Daily change of the hedged position, one shorter than `prices`.
    pub changes: Vec<f64>,
}

/// Everything needed to present a hedge: the ratio, the scatter and the
/// resulting hedged position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeAnalysis {
    /// The minimum-variance hedge ratio.
    pub hedge: HedgeRatio,
    /// Paired daily changes and trend line.
    pub scatter: ScatterData,
    /// Hedged position series.
    pub hedged: HedgedPosition,
    /// Share of the base daily-change variance removed by the hedge.
    pub variance_reduction: f64,
}

/// Computes the hedge ratio together with its scatter and hedged position.
///
/// Fails under the same conditions as
/// [`compute_hedge_ratio`](super::compute_hedge_ratio).
pub fn analyze_hedge(base: &PriceSeries, hedge: &PriceSeries) -> AnalyticsResult<HedgeAnalysis> {
    let aligned = AlignedPrices::new(base, hedge);
    let ratio = hedge_ratio_from_aligned(&aligned)?;

    let (base_changes, hedge_changes) = aligned.returns(ReturnKind::Absolute)?;
    let trend = ols(base_changes.values(), hedge_changes.values())?;

    let prices: Vec<f64> = aligned
        .first()
        .iter()
        .zip(aligned.second())
        .map(|(b, h)| b - ratio.ratio * h)
        .collect();
    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();

    let base_variance = variance(base_changes.values(), SAMPLE_DDOF)?;
    let hedged_variance = variance(&changes, SAMPLE_DDOF)?;
    // Rounding can leave a tiny negative residual for a perfect hedge
    let variance_reduction = (1.0 - hedged_variance / base_variance).min(1.0);

    tracing::debug!(
        base = %ratio.base,
        hedge = %ratio.hedge,
        slope = trend.slope,
        variance_reduction,
        "analyzed hedge"
    );

    Ok(HedgeAnalysis {
        hedge: ratio,
        scatter: ScatterData {
            dates: base_changes.dates().to_vec(),
            base_changes: base_changes.values().to_vec(),
            hedge_changes: hedge_changes.values().to_vec(),
            trend,
        },
        hedged: HedgedPosition {
            dates: aligned.dates().to_vec(),
            base_prices: aligned.first().to_vec(),
            hedge_prices: aligned.second().to_vec(),
            prices,
            changes,
        },
        variance_reduction,
    })
}
