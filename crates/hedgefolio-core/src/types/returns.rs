//! Day-over-day return series.

use serde::{Deserialize, Serialize};

use super::{Date, Symbol};
use crate::error::{CoreError, CoreResult};

/// How a day-over-day change is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    /// `price[t] - price[t-1]`, in price units.
    Absolute,
    /// `price[t] / price[t-1] - 1`.
    Percentage,
}

/// Changes derived from a price series; one element shorter than its source.
///
/// Each value is dated by the later of the two observations it spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    symbol: Symbol,
    kind: ReturnKind,
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Computes changes over parallel `dates`/`prices` slices.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidSeries` if the slices differ in length, and
    /// `CoreError::InvalidPrice` for a percentage change over a zero price.
    pub fn from_prices(
        symbol: &Symbol,
        dates: &[Date],
        prices: &[f64],
        kind: ReturnKind,
    ) -> CoreResult<Self> {
        if dates.len() != prices.len() {
            return Err(CoreError::invalid_series(
                symbol.as_str(),
                format!("{} dates but {} prices", dates.len(), prices.len()),
            ));
        }

        let n = prices.len().saturating_sub(1);
        let mut values = Vec::with_capacity(n);
        for i in 1..prices.len() {
            let (prev, curr) = (prices[i - 1], prices[i]);
            let change = match kind {
                ReturnKind::Absolute => curr - prev,
                ReturnKind::Percentage => {
                    if prev == 0.0 {
                        return Err(CoreError::InvalidPrice {
                            value: prev,
                            date: dates[i - 1].to_string(),
                            reason: "percentage change over a zero price".to_string(),
                        });
                    }
                    curr / prev - 1.0
                }
            };
            values.push(change);
        }

        Ok(Self {
            symbol: symbol.clone(),
            kind,
            dates: dates.iter().skip(1).copied().collect(),
            values,
        })
    }

    /// Instrument symbol.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Measurement used for the changes.
    pub fn kind(&self) -> ReturnKind {
        self.kind
    }

    /// Dates of the changes.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Change values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dates(n: usize) -> Vec<Date> {
        let start = Date::from_ymd(2021, 1, 4).unwrap();
        (0..n).map(|i| start.add_days(i as i64)).collect()
    }

    #[test]
    fn test_absolute_changes() {
        let prices = [100.0, 102.0, 101.0, 105.0];
        let r = ReturnSeries::from_prices(&Symbol::new("A"), &dates(4), &prices, ReturnKind::Absolute)
            .unwrap();
        assert_eq!(r.values(), &[2.0, -1.0, 4.0]);
        assert_eq!(r.dates().len(), 3);
        assert_eq!(r.dates()[0], dates(4)[1]);
    }

    #[test]
    fn test_percentage_changes() {
        let prices = [50.0, 49.0, 51.0, 50.0];
        let r = ReturnSeries::from_prices(
            &Symbol::new("B"),
            &dates(4),
            &prices,
            ReturnKind::Percentage,
        )
        .unwrap();
        assert_relative_eq!(r.values()[0], -0.02, epsilon = 1e-12);
        assert_relative_eq!(r.values()[1], 2.0 / 49.0, epsilon = 1e-12);
        assert_relative_eq!(r.values()[2], -1.0 / 51.0, epsilon = 1e-12);
    }

    #[test]
    fn test_percentage_over_zero_price_fails() {
        let prices = [0.0, 1.0];
        let result = ReturnSeries::from_prices(
            &Symbol::new("Z"),
            &dates(2),
            &prices,
            ReturnKind::Percentage,
        );
        assert!(matches!(result, Err(CoreError::InvalidPrice { .. })));
    }

    #[test]
    fn test_single_price_gives_empty_series() {
        let r = ReturnSeries::from_prices(&Symbol::new("C"), &dates(1), &[10.0], ReturnKind::Absolute)
            .unwrap();
        assert!(r.is_empty());
    }
}
