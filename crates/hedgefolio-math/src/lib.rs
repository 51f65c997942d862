//! # Hedgefolio Math
//!
//! Numerical building blocks for the Hedgefolio analytics library.
//!
//! This crate provides:
//!
//! - **Statistics**: Mean, sample variance/standard deviation (configurable
//!   ddof), covariance and Pearson correlation
//! - **Regression**: Ordinary least squares trend lines
//! - **Linear Algebra**: LU decomposition with partial pivoting
//!
//! ## Design Philosophy
//!
//! - **Explicit failure**: Too few points or mismatched inputs are errors,
//!   never a silently propagated NaN
//! - **statrs underneath**: Sample moments come from `statrs::statistics`,
//!   with the length and count checks layered on top

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod linear_algebra;
pub mod regression;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::regression::{ols, OlsFit};
    pub use crate::stats::{
        correlation, covariance, mean, std_dev, variance, POPULATION_DDOF, SAMPLE_DDOF,
    };
}

pub use error::{MathError, MathResult};
