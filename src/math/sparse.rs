//! Triplet assembly of finite difference systems
//!
//! Stencils touch at most a few dozen columns per row, so the system is
//! collected in COO form and only expanded to a dense matrix for the solve.

use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};

use crate::error::{FDMError, FDMResult};
use crate::stencil::Stencil;

/// Sparse matrix builder using COO format
pub struct SparseMatrixBuilder {
    size: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl SparseMatrixBuilder {
    /// Create a new builder for a `size` x `size` matrix
    pub fn new(size: usize) -> Self {
        // 13-point stencils dominate
        Self {
            size,
            entries: Vec::with_capacity(size * 13),
        }
    }

    /// Add a value to the matrix (accumulates if already exists)
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        if value.abs() > 1e-15 {
            self.entries.push((row, col, value));
        }
    }

    /// Scatter a stencil into `row`, resolving each term to a column index.
    ///
    /// `column` returns `None` for offsets that fall outside the grid.
    pub fn add_stencil<F>(&mut self, row: usize, stencil: &Stencil, column: F) -> FDMResult<()>
    where
        F: Fn(isize, isize, usize) -> Option<usize>,
    {
        for term in &stencil.terms {
            let col = column(term.dx, term.dy, term.component).ok_or_else(|| {
                FDMError::AnalysisFailed(format!(
                    "row {} references offset ({}, {}) outside the grid",
                    row, term.dx, term.dy
                ))
            })?;
            self.add(row, col, term.coefficient);
        }
        Ok(())
    }

    /// Convert to CSR format, summing duplicate entries
    pub fn to_csr(&self) -> CsrMatrix<f64> {
        let mut coo = CooMatrix::new(self.size, self.size);

        for &(row, col, val) in &self.entries {
            coo.push(row, col, val);
        }

        CsrMatrix::from(&coo)
    }

    /// Convert to dense matrix for the direct solve
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut mat = DMatrix::zeros(self.size, self.size);

        for &(row, col, val) in &self.entries {
            mat[(row, col)] += val;
        }

        mat
    }

    /// Get estimated non-zero count
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Get sparsity ratio
    pub fn sparsity(&self) -> f64 {
        let total = self.size * self.size;
        1.0 - (self.entries.len() as f64 / total as f64)
    }

    /// Rows without a single nonzero coefficient once duplicates are summed
    pub fn empty_rows(&self) -> Vec<usize> {
        let csr = self.to_csr();
        (0..self.size)
            .filter(|&r| csr.row(r).values().iter().all(|v| v.abs() <= 1e-15))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_builder() {
        let mut builder = SparseMatrixBuilder::new(4);
        builder.add(0, 0, 4.0);
        builder.add(0, 1, 1.0);
        builder.add(1, 0, 1.0);
        builder.add(1, 1, 3.0);
        builder.add(1, 1, -1.0);
        builder.add(2, 2, 2.0);
        builder.add(3, 3, 1.0);

        let dense = builder.to_dense();
        assert!((dense[(0, 0)] - 4.0).abs() < 1e-10);
        assert!((dense[(1, 1)] - 2.0).abs() < 1e-10);
        assert_eq!(builder.to_csr().nnz(), 6);
        assert!(builder.empty_rows().is_empty());
    }

    #[test]
    fn test_empty_rows_after_cancellation() {
        let mut builder = SparseMatrixBuilder::new(3);
        builder.add(0, 0, 1.0);
        builder.add(1, 2, 1.0);
        builder.add(1, 2, -1.0);
        assert_eq!(builder.empty_rows(), vec![1, 2]);
    }

    #[test]
    fn test_add_stencil_resolves_offsets() {
        let mut stencil = Stencil::pin(0);
        stencil.add(1, 0, 0, -2.0);
        let mut builder = SparseMatrixBuilder::new(4);
        builder
            .add_stencil(1, &stencil, |dx, dy, _| Some((1 + dx + 2 * dy) as usize))
            .unwrap();
        let dense = builder.to_dense();
        assert_eq!(dense[(1, 1)], 1.0);
        assert_eq!(dense[(1, 2)], -2.0);

        assert!(matches!(
            builder.add_stencil(0, &stencil, |_, _, _| None),
            Err(FDMError::AnalysisFailed(_))
        ));
    }
}
