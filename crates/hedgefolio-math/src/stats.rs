//! Descriptive statistics over `f64` samples.
//!
//! Variances and covariances take an explicit delta degrees of freedom:
//! [`SAMPLE_DDOF`] (n - 1 denominator) is what the analytics use throughout.

use statrs::statistics::Statistics;

use crate::error::{MathError, MathResult};

/// Delta degrees of freedom for the unbiased sample estimator.
pub const SAMPLE_DDOF: usize = 1;

/// Delta degrees of freedom for the population estimator.
pub const POPULATION_DDOF: usize = 0;

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> MathResult<f64> {
    if data.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(data.iter().copied().mean())
}

/// Variance with denominator `n - ddof`.
pub fn variance(data: &[f64], ddof: usize) -> MathResult<f64> {
    check_count(data.len(), ddof)?;
    let n = data.len() as f64;
    Ok(match ddof {
        SAMPLE_DDOF => data.iter().copied().variance(),
        POPULATION_DDOF => data.iter().copied().population_variance(),
        _ => data.iter().copied().population_variance() * n / (n - ddof as f64),
    })
}

/// Standard deviation with denominator `n - ddof`.
pub fn std_dev(data: &[f64], ddof: usize) -> MathResult<f64> {
    variance(data, ddof).map(f64::sqrt)
}

/// Covariance of two equally long samples with denominator `n - ddof`.
pub fn covariance(x: &[f64], y: &[f64], ddof: usize) -> MathResult<f64> {
    check_lengths(x, y)?;
    check_count(x.len(), ddof)?;
    let n = x.len() as f64;
    let xs = x.iter().copied();
    let ys = y.iter().copied();
    Ok(match ddof {
        SAMPLE_DDOF => xs.covariance(ys),
        POPULATION_DDOF => xs.population_covariance(ys),
        _ => xs.population_covariance(ys) * n / (n - ddof as f64),
    })
}

/// Pearson correlation coefficient.
///
/// Returns NaN when either sample has zero variance (the coefficient is
/// undefined there). Otherwise the result is clamped into `[-1, 1]` to
/// absorb rounding.
pub fn correlation(x: &[f64], y: &[f64]) -> MathResult<f64> {
    let cov = covariance(x, y, SAMPLE_DDOF)?;
    let sd_x = std_dev(x, SAMPLE_DDOF)?;
    let sd_y = std_dev(y, SAMPLE_DDOF)?;
    if sd_x == 0.0 || sd_y == 0.0 {
        return Ok(f64::NAN);
    }
    Ok((cov / (sd_x * sd_y)).clamp(-1.0, 1.0))
}

fn check_count(len: usize, ddof: usize) -> MathResult<()> {
    let required = ddof + 1;
    if len < required {
        return Err(MathError::insufficient_data(required, len));
    }
    Ok(())
}

fn check_lengths(x: &[f64], y: &[f64]) -> MathResult<()> {
    if x.len() != y.len() {
        return Err(MathError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}
