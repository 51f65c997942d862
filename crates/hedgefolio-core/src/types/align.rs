//! Date alignment of two price series.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Date, PriceSeries, ReturnKind, ReturnSeries, Symbol};
use crate::error::CoreResult;

/// Two price series restricted to the dates both observed.
///
/// Built by intersecting the date sets and dropping every row in which
/// either price is not finite, so downstream statistics never see a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPrices {
    first_symbol: Symbol,
    second_symbol: Symbol,
    dates: Vec<Date>,
    first: Vec<f64>,
    second: Vec<f64>,
    dropped: usize,
}

impl AlignedPrices {
    /// Aligns `first` and `second` on their common dates.
    pub fn new(first: &PriceSeries, second: &PriceSeries) -> Self {
        let capacity = first.len().min(second.len());
        let mut dates = Vec::with_capacity(capacity);
        let mut a = Vec::with_capacity(capacity);
        let mut b = Vec::with_capacity(capacity);
        let mut dropped = 0;

        let (lhs, rhs) = (first.points(), second.points());
        let (mut i, mut j) = (0, 0);
        while i < lhs.len() && j < rhs.len() {
            match lhs[i].date.cmp(&rhs[j].date) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    if lhs[i].price.is_finite() && rhs[j].price.is_finite() {
                        dates.push(lhs[i].date);
                        a.push(lhs[i].price);
                        b.push(rhs[j].price);
                    } else {
                        dropped += 1;
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        if dropped > 0 {
            tracing::debug!(
                first = %first.symbol(),
                second = %second.symbol(),
                dropped,
                "dropped rows with missing prices during alignment"
            );
        }

        Self {
            first_symbol: first.symbol().clone(),
            second_symbol: second.symbol().clone(),
            dates,
            first: a,
            second: b,
            dropped,
        }
    }

    /// Symbol of the first leg.
    pub fn first_symbol(&self) -> &Symbol {
        &self.first_symbol
    }

    /// Symbol of the second leg.
    pub fn second_symbol(&self) -> &Symbol {
        &self.second_symbol
    }

    /// Common observation dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// First-leg prices on the common dates.
    pub fn first(&self) -> &[f64] {
        &self.first
    }

    /// Second-leg prices on the common dates.
    pub fn second(&self) -> &[f64] {
        &self.second
    }

    /// Number of aligned rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no dates are shared.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Common dates dropped because a price was missing.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Day-over-day changes of both legs.
    pub fn returns(&self, kind: ReturnKind) -> CoreResult<(ReturnSeries, ReturnSeries)> {
        Ok((
            ReturnSeries::from_prices(&self.first_symbol, &self.dates, &self.first, kind)?,
            ReturnSeries::from_prices(&self.second_symbol, &self.dates, &self.second, kind)?,
        ))
    }
}
