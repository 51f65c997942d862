//! Small dense linear systems.
//!
//! Used to solve the normal equations of least-squares fits. Systems here
//! are tiny (2x2 for a trend line), so a straightforward LU with partial
//! pivoting is all that is needed.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

const PIVOT_TOLERANCE: f64 = 1e-15;

/// LU factors of a row-permuted square matrix: `P * A = L * U`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    /// Unit lower-triangular factor.
    pub lower: DMatrix<f64>,
    /// Upper-triangular factor.
    pub upper: DMatrix<f64>,
    /// `permutation[i]` is the row of `A` that ended up in row `i`.
    pub permutation: Vec<usize>,
}

/// Factorizes a square matrix with partial (row) pivoting.
pub fn lu_decomposition(matrix: &DMatrix<f64>) -> MathResult<LuFactors> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(MathError::invalid_input("Matrix must be square for LU decomposition"));
    }

    let mut lower = DMatrix::identity(n, n);
    let mut upper = matrix.clone();
    let mut permutation: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&a, &b| upper[(a, k)].abs().total_cmp(&upper[(b, k)].abs()))
            .unwrap_or(k);
        if upper[(pivot_row, k)].abs() < PIVOT_TOLERANCE {
            return Err(MathError::SingularMatrix);
        }

        if pivot_row != k {
            upper.swap_rows(k, pivot_row);
            permutation.swap(k, pivot_row);
            for j in 0..k {
                let tmp = lower[(k, j)];
                lower[(k, j)] = lower[(pivot_row, j)];
                lower[(pivot_row, j)] = tmp;
            }
        }

        for i in k + 1..n {
            let factor = upper[(i, k)] / upper[(k, k)];
            lower[(i, k)] = factor;
            for j in k..n {
                upper[(i, j)] -= factor * upper[(k, j)];
            }
        }
    }

    Ok(LuFactors {
        lower,
        upper,
        permutation,
    })
}

/// Solves `A x = b`.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != b.len() {
        return Err(MathError::LengthMismatch {
            left: n,
            right: b.len(),
        });
    }

    let LuFactors {
        lower,
        upper,
        permutation,
    } = lu_decomposition(a)?;

    // Forward substitution on the permuted right-hand side
    let mut y = DVector::zeros(n);
    for i in 0..n {
        let mut sum = b[permutation[i]];
        for j in 0..i {
            sum -= lower[(i, j)] * y[j];
        }
        y[i] = sum;
    }

    // Back substitution
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in i + 1..n {
            sum -= upper[(i, j)] * x[j];
        }
        x[i] = sum / upper[(i, i)];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lu_reconstructs_permuted_matrix() {
        let a = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0]);
        let lu = lu_decomposition(&a).unwrap();

        let product = &lu.lower * &lu.upper;
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(product[(i, j)], a[(lu.permutation[i], j)], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_solve_needs_pivoting() {
        // Zero in the leading position defeats an unpivoted factorization
        let a = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_vec(vec![2.0, 3.0]);

        let x = solve_linear_system(&a, &b).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_linear_system() {
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![5.0, 5.0]);

        let x = solve_linear_system(&a, &b).unwrap();

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_singular_matrix() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(solve_linear_system(&a, &b), Err(MathError::SingularMatrix));
    }
}
