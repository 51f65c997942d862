//! Market data source traits.
//!
//! A [`PriceSource`] supplies daily adjusted closing prices for one symbol
//! over a date range. Requests are synchronous; a source may cache
//! internally but must be shareable across threads.

use std::collections::HashMap;

use hedgefolio_core::{Date, DateRange, Lookback, PriceSeries, Symbol};

use crate::error::{DataFetchError, FetchResult};

/// Trait for daily price providers.
pub trait PriceSource: Send + Sync {
    /// Short name of the source for logs and messages.
    fn source_name(&self) -> &str;

    /// Symbols the source can serve, sorted.
    fn symbols(&self) -> FetchResult<Vec<Symbol>>;

    /// Daily adjusted closes of `symbol` on `[start, end)`.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` when the source has no data for the symbol
    /// - `EmptyRange` when no prices fall inside the range
    /// - `InvalidData` when `start >= end`
    fn fetch_daily_adjusted_close(
        &self,
        symbol: &Symbol,
        start: Date,
        end: Date,
    ) -> FetchResult<PriceSeries>;

    /// Daily adjusted closes of `symbol` for `period` ending on `as_of`
    /// (inclusive).
    fn fetch_daily_adjusted_close_period(
        &self,
        symbol: &Symbol,
        period: Lookback,
        as_of: Date,
    ) -> FetchResult<PriceSeries> {
        let range = period.range_ending(as_of)?;
        self.fetch_daily_adjusted_close(symbol, range.start(), range.end())
    }
}

/// Restricts a full history to `[start, end)`, failing when nothing is left.
pub fn restrict_to_range(series: &PriceSeries, start: Date, end: Date) -> FetchResult<PriceSeries> {
    let range = DateRange::new(start, end)?;
    let window = series.within(&range);
    if window.is_empty() {
        return Err(DataFetchError::EmptyRange {
            symbol: series.symbol().to_string(),
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(window)
}

/// Price source holding full histories in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceSource {
    series: HashMap<Symbol, PriceSeries>,
}

impl InMemoryPriceSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the history of the series' symbol.
    pub fn insert(&mut self, series: PriceSeries) {
        self.series.insert(series.symbol().clone(), series);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.insert(series);
        self
    }

    /// Number of symbols held.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if the source holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl PriceSource for InMemoryPriceSource {
    fn source_name(&self) -> &str {
        "memory"
    }

    fn symbols(&self) -> FetchResult<Vec<Symbol>> {
        let mut symbols: Vec<Symbol> = self.series.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn fetch_daily_adjusted_close(
        &self,
        symbol: &Symbol,
        start: Date,
        end: Date,
    ) -> FetchResult<PriceSeries> {
        let series = self
            .series
            .get(symbol)
            .ok_or_else(|| DataFetchError::UnknownSymbol(symbol.to_string()))?;
        let window = restrict_to_range(series, start, end)?;
        tracing::debug!(
            source = self.source_name(),
            %symbol,
            %start,
            %end,
            points = window.len(),
            "fetched prices"
        );
        Ok(window)
    }
}
