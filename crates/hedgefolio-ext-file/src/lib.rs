//! # Hedgefolio Ext File
//!
//! File-based daily price data for Hedgefolio.
//!
//! [`CsvPriceSource`] reads a directory holding one `<SYMBOL>.csv` per
//! instrument, in the layout common market-data downloads export:
//!
//! ```text
//! Date,Open,High,Low,Close,Adj Close,Volume
//! 2021-01-04,133.52,133.61,126.76,129.41,127.33,143301900
//! ```
//!
//! Only the `Date` and `Adj Close` columns are read. Empty, `null` or `NaN`
//! prices are kept as missing observations.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod market_data;

pub use market_data::*;
