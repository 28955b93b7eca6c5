//! Mathematical utilities for FDM calculations

pub mod sparse;

use nalgebra::{linalg::LU, DMatrix, DVector, Dyn};

use crate::error::{FDMError, FDMResult};

pub use sparse::SparseMatrixBuilder;

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// Dense LU factorization that can be reused for several load vectors
pub struct DenseSolver {
    lu: LU<f64, Dyn, Dyn>,
}

impl DenseSolver {
    /// Factorize `a` with partial pivoting.
    ///
    /// Fails with [`FDMError::SingularMatrix`] when a pivot vanishes relative
    /// to the largest coefficient of `a`, scaled by `tolerance`.
    pub fn factorize(a: &Mat, tolerance: f64) -> FDMResult<Self> {
        if a.nrows() != a.ncols() {
            return Err(FDMError::AnalysisFailed(format!(
                "system matrix must be square, got {}x{}",
                a.nrows(),
                a.ncols()
            )));
        }
        let scale = a.amax();
        if !(scale.is_finite() && scale > 0.0) {
            return Err(FDMError::SingularMatrix);
        }

        let lu = a.clone().lu();
        let threshold = tolerance * scale;
        let singular = lu
            .u()
            .diagonal()
            .iter()
            .any(|p| !p.is_finite() || p.abs() <= threshold);
        if singular {
            return Err(FDMError::SingularMatrix);
        }
        Ok(Self { lu })
    }

    /// Solve for one right-hand side
    pub fn solve(&self, b: &Vec) -> FDMResult<Vec> {
        let x = self.lu.solve(b).ok_or(FDMError::SingularMatrix)?;
        if x.iter().all(|v| v.is_finite()) {
            Ok(x)
        } else {
            Err(FDMError::SingularMatrix)
        }
    }
}

/// Solve a linear system using LU decomposition
pub fn solve_dense(a: &Mat, b: &Vec, tolerance: f64) -> FDMResult<Vec> {
    DenseSolver::factorize(a, tolerance)?.solve(b)
}

/// Round `value` to `decimals` digits after the decimal point
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_dense() {
        let a = Mat::from_row_slice(3, 3, &[4.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 4.0]);
        let b = Vec::from_vec(vec![1.0, 2.0, 3.0]);
        let x = solve_dense(&a, &b, 1e-12).unwrap();
        let residual = (&a * &x - &b).norm();
        assert!(residual < 1e-12, "residual: {}", residual);
    }

    #[test]
    fn test_singular_matrix_is_reported() {
        let a = Mat::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
        let b = Vec::from_vec(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            solve_dense(&a, &b, 1e-12),
            Err(FDMError::SingularMatrix)
        ));
        assert!(matches!(
            DenseSolver::factorize(&Mat::zeros(2, 2), 1e-12),
            Err(FDMError::SingularMatrix)
        ));
    }

    #[test]
    fn test_factorization_reused() {
        let a = Mat::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let solver = DenseSolver::factorize(&a, 1e-12).unwrap();
        let x1 = solver.solve(&Vec::from_vec(vec![1.0, 0.0])).unwrap();
        let x2 = solver.solve(&Vec::from_vec(vec![0.0, 1.0])).unwrap();
        assert_relative_eq!(x1[0], 0.6, epsilon = 1e-12);
        assert_relative_eq!(x2[1], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456789, 3), 0.123);
        assert_eq!(round_to(1e-16, 14), 0.0);
        assert_eq!(round_to(f64::MAX, 14), f64::MAX);
    }
}
