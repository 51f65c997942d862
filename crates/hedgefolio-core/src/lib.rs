//! # Hedgefolio Core
//!
//! Core types shared by every Hedgefolio crate.
//!
//! - **Types**: `Date`, `Symbol`, `DateRange`, `Lookback`
//! - **Series**: `PriceSeries` (dated prices for one instrument) and the
//!   derived `ReturnSeries` (absolute or percentage day-over-day changes)
//! - **Alignment**: `AlignedPrices`, the date intersection of two series with
//!   incomplete rows dropped
//!
//! ## Example
//!
//! ```rust
//! use hedgefolio_core::prelude::*;
//!
//! let d0 = Date::from_ymd(2021, 1, 4).unwrap();
//! let series = PriceSeries::from_pairs(
//!     Symbol::new("AAPL"),
//!     vec![(d0, 100.0), (d0.add_days(1), 102.0), (d0.add_days(2), 101.0)],
//! )
//! .unwrap();
//!
//! let returns = series.returns(ReturnKind::Percentage).unwrap();
//! assert_eq!(returns.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        AlignedPrices, Date, DateRange, Lookback, PricePoint, PriceSeries, ReturnKind,
        ReturnSeries, Symbol,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{
    AlignedPrices, Date, DateRange, Lookback, PricePoint, PriceSeries, ReturnKind, ReturnSeries,
    Symbol,
};
