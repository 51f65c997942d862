//! Domain types for price-series analytics.
//!
//! - [`Date`]: Calendar date of a daily observation
//! - [`Symbol`]: Instrument ticker
//! - [`DateRange`] / [`Lookback`]: Request windows for market data
//! - [`PriceSeries`]: Dated prices for one instrument
//! - [`ReturnSeries`]: Day-over-day changes derived from a price series
//! - [`AlignedPrices`]: Two series on their common dates

mod align;
mod date;
mod period;
mod returns;
mod series;
mod symbol;

pub use align::AlignedPrices;
pub use date::Date;
pub use period::{DateRange, Lookback};
pub use returns::{ReturnKind, ReturnSeries};
pub use series::{PricePoint, PriceSeries};
pub use symbol::Symbol;
