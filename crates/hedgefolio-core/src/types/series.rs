//! Daily price series.

use serde::{Deserialize, Serialize};

use super::{Date, DateRange, ReturnKind, ReturnSeries, Symbol};
use crate::error::{CoreError, CoreResult};

/// One dated price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,
    /// Adjusted close (may be NaN for a missing observation).
    pub price: f64,
}

impl PricePoint {
    /// Creates a price point.
    pub fn new(date: Date, price: f64) -> Self {
        Self { date, price }
    }
}

/// Ordered daily prices for a single instrument.
///
/// Dates are strictly increasing with no duplicates; this is checked on
/// construction and the series is immutable afterwards. Missing
/// observations may be carried as NaN prices and are dropped when two
/// series are aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: Symbol,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a series, validating date ordering.
    pub fn new(symbol: Symbol, points: Vec<PricePoint>) -> CoreResult<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                let reason = if pair[1].date == pair[0].date {
                    format!("duplicate date {}", pair[1].date)
                } else {
                    format!("date {} follows {}", pair[1].date, pair[0].date)
                };
                return Err(CoreError::invalid_series(symbol.as_str(), reason));
            }
        }
        Ok(Self { symbol, points })
    }

    /// Creates a series from `(date, price)` pairs.
    pub fn from_pairs(symbol: Symbol, pairs: Vec<(Date, f64)>) -> CoreResult<Self> {
        let points = pairs
            .into_iter()
            .map(|(date, price)| PricePoint::new(date, price))
            .collect();
        Self::new(symbol, points)
    }

    /// Creates a series from unordered observations, sorting by date.
    ///
    /// Duplicate dates are still rejected.
    pub fn from_unsorted(symbol: Symbol, mut points: Vec<PricePoint>) -> CoreResult<Self> {
        points.sort_by_key(|p| p.date);
        Self::new(symbol, points)
    }

    /// Instrument symbol.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in date order.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Observation dates in order.
    pub fn dates(&self) -> Vec<Date> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Prices in date order.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// First observation date.
    pub fn first_date(&self) -> Option<Date> {
        self.points.first().map(|p| p.date)
    }

    /// Last observation date.
    pub fn last_date(&self) -> Option<Date> {
        self.points.last().map(|p| p.date)
    }

    /// Price on `date`, if observed.
    pub fn price_on(&self, date: Date) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].price)
    }

    /// Returns the observations inside `range` as a new series.
    pub fn within(&self, range: &DateRange) -> PriceSeries {
        Self {
            symbol: self.symbol.clone(),
            points: self
                .points
                .iter()
                .filter(|p| range.contains(p.date))
                .copied()
                .collect(),
        }
    }

    /// Day-over-day changes of this series.
    pub fn returns(&self, kind: ReturnKind) -> CoreResult<ReturnSeries> {
        ReturnSeries::from_prices(&self.symbol, &self.dates(), &self.prices(), kind)
    }
}
