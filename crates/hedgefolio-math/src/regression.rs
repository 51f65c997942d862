//! Ordinary least squares trend lines.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::linear_algebra::solve_linear_system;

/// Result of fitting `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OlsFit {
    /// Slope coefficient.
    pub slope: f64,
    /// Intercept coefficient.
    pub intercept: f64,
    /// Coefficient of determination; NaN when `y` is constant.
    pub r_squared: f64,
    /// Number of observations fitted.
    pub observations: usize,
}

impl OlsFit {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fits a straight line through `(x, y)` by least squares.
///
/// Solves the normal equations `XᵀX β = Xᵀy` for the design matrix
/// `[1, x]`. A constant `x` leaves the system singular and is reported as
/// `MathError::SingularMatrix`.
pub fn ols(x: &[f64], y: &[f64]) -> MathResult<OlsFit> {
    if x.len() != y.len() {
        return Err(MathError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(MathError::insufficient_data(2, n));
    }

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { x[i] });
    let target = DVector::from_column_slice(y);

    let xtx = design.transpose() * &design;
    let xty = design.transpose() * &target;
    let beta = solve_linear_system(&xtx, &xty)?;
    let (intercept, slope) = (beta[0], beta[1]);

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let (mut ss_res, mut ss_tot) = (0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let resid = yi - (intercept + slope * xi);
        ss_res += resid * resid;
        ss_tot += (yi - y_mean) * (yi - y_mean);
    }
    let r_squared = if ss_tot == 0.0 {
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(OlsFit {
        slope,
        intercept,
        r_squared,
        observations: n,
    })
}
