//! # hedgefolio-analytics
//!
//! Pure analytics over pairs of daily price series.
//!
//! - **Hedging**: variance-minimizing hedge ratio between a base and a
//!   hedging instrument, with scatter/trend-line and hedged-position data
//! - **Portfolio**: annualized two-asset statistics, the sampled efficient
//!   frontier and the analytic minimum-variance portfolio
//!
//! Every function takes its inputs explicitly and keeps no state between
//! calls.
//!
//! ## Example
//!
//! ```rust
//! use hedgefolio_analytics::prelude::*;
//! use hedgefolio_core::{Date, PriceSeries, Symbol};
//!
//! let d0 = Date::from_ymd(2021, 1, 4).unwrap();
//! let days = |prices: &[f64]| -> Vec<(Date, f64)> {
//!     prices.iter().enumerate().map(|(i, p)| (d0.add_days(i as i64), *p)).collect()
//! };
//! let a = PriceSeries::from_pairs(Symbol::new("A"), days(&[100.0, 102.0, 101.0, 105.0])).unwrap();
//! let b = PriceSeries::from_pairs(Symbol::new("B"), days(&[50.0, 49.0, 51.0, 50.0])).unwrap();
//!
//! let stats = compute_portfolio_statistics(&a, &b, 0.5, TRADING_DAYS_PER_YEAR).unwrap();
//! assert_eq!(stats.frontier.len(), 101);
//! assert!(stats.min_variance_point.standard_deviation <= stats.chosen_point.standard_deviation);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod hedging;
pub mod portfolio;

pub use error::{AnalyticsError, AnalyticsResult};

/// Values below this are treated as zero volatility.
pub(crate) const ZERO_TOLERANCE: f64 = 1e-12;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::hedging::{
        analyze_hedge, compute_hedge_ratio, HedgeAnalysis, HedgeRatio, HedgedPosition,
        ScatterData,
    };
    pub use crate::portfolio::{
        compute_portfolio_statistics, MinVariancePolicy, MinVarianceWeight, PairStatistics,
        PortfolioPoint, PortfolioSettings, PortfolioStatistics, PortfolioStatsEngine,
        TwoAssetPortfolio, DEFAULT_FRONTIER_STEPS, TRADING_DAYS_PER_YEAR,
    };
}
