//! # Hedgefolio Configuration
//!
//! TOML configuration for the Hedgefolio tools.
//!
//! # Features
//!
//! - **Analytics settings**: annualization factor, frontier resolution and
//!   the minimum-variance weight policy
//! - **Data settings**: location of the per-symbol price files
//! - **Universes**: instruments and lookbacks offered for hedging and
//!   portfolio analysis
//! - **Validation**: [`Validate`] reports every problem at once
//!
//! # Example
//!
//! ```rust
//! use hedgefolio_config::{AppConfig, Validate};
//!
//! let config = AppConfig::from_toml_str(r#"
//! [analytics]
//! frontier_steps = 20
//!
//! [universe.portfolio]
//! periods = ["1y", "3y"]
//! "#).unwrap();
//!
//! assert_eq!(config.analytics.periods_per_year, 252);
//! assert_eq!(config.universe.portfolio.periods.len(), 2);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod analytics;
pub mod app;
pub mod error;
pub mod universe;

pub use analytics::AnalyticsConfig;
pub use app::{AppConfig, DataConfig, DEFAULT_PRICES_DIR};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use universe::{HedgingUniverse, PortfolioUniverse, UniverseConfig};
