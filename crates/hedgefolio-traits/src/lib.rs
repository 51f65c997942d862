//! # Hedgefolio Traits
//!
//! Trait definitions for the collaborators the analytics depend on.
//!
//! ## Module Structure
//!
//! - [`market_data`]: daily price sources ([`PriceSource`]) and an
//!   in-memory implementation
//! - [`error`]: [`DataFetchError`] raised by price sources
//!
//! Concrete sources backed by files live in extension crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod market_data;

pub use error::{DataFetchError, FetchResult};
pub use market_data::{InMemoryPriceSource, PriceSource};
