//! Determinants, minors and cofactors.
//!
//! The default determinant is the recursive first-row cofactor expansion with
//! closed forms for orders 1 to 3. It is exact for small integer-valued
//! matrices but grows as O(n!), so [`Matrix::determinant_lu`] is offered for
//! anything larger.

use crate::config::{DeterminantMethod, LinalgConfig};
use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

impl Matrix {
    fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        Ok(cofactor_expansion(self))
    }

    /// Determinant by Gaussian elimination with partial pivoting.
    pub fn determinant_lu(&self) -> Result<f64> {
        self.require_square()?;
        let n = self.rows();
        let mut work = self.clone();
        let mut det = 1.0;

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&a, &b| work[(a, col)].abs().total_cmp(&work[(b, col)].abs()))
                .unwrap_or(col);
            let pivot = work[(pivot_row, col)];
            if pivot == 0.0 {
                return Ok(0.0);
            }
            if pivot_row != col {
                work.swap_rows(pivot_row, col);
                det = -det;
            }
            det *= pivot;

            for row in col + 1..n {
                let factor = work[(row, col)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for k in col..n {
                    let v = work[(col, k)];
                    work[(row, k)] -= factor * v;
                }
            }
        }

        Ok(det)
    }

    pub fn determinant_with(&self, config: &LinalgConfig) -> Result<f64> {
        match config.determinant {
            DeterminantMethod::Cofactor => self.determinant(),
            DeterminantMethod::Lu => self.determinant_lu(),
        }
    }

    /// Submatrix with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if self.rows() < 2 || self.cols() < 2 {
            return Err(MatrixError::InvalidSize {
                rows: self.rows() - 1,
                cols: self.cols() - 1,
            });
        }
        Ok(strike(self, row, col))
    }

    /// Signed determinant of the `(row, col)` minor.
    ///
    /// A 1x1 matrix has cofactor 1, the determinant of the empty minor.
    pub fn algebraic_complement(&self, row: usize, col: usize) -> Result<f64> {
        self.require_square()?;
        let det = if self.rows() == 1 {
            self.get(row, col)?;
            1.0
        } else {
            cofactor_expansion(&self.minor(row, col)?)
        };

        if (row + col) % 2 != 0 {
            Ok(-det)
        } else {
            Ok(det)
        }
    }

    /// Matrix of cofactors, entry `(i, j)` being `algebraic_complement(i, j)`.
    ///
    /// This is not transposed; see [`Matrix::adjugate`] for the classical adjugate.
    pub fn allied_matrix(&self) -> Result<Matrix> {
        self.require_square()?;
        let mut result = Matrix::new(self.rows(), self.cols())?;
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                result[(i, j)] = self.algebraic_complement(i, j)?;
            }
        }
        Ok(result)
    }

    /// Transpose of the cofactor matrix, so that `A * adj(A) = det(A) * I`.
    pub fn adjugate(&self) -> Result<Matrix> {
        let mut allied = self.allied_matrix()?;
        allied.transpose();
        Ok(allied)
    }
}

/// Copy of `m` without `row` and `col`. Caller guarantees both dimensions are at least 2.
fn strike(m: &Matrix, row: usize, col: usize) -> Matrix {
    let data = (0..m.rows())
        .filter(|&i| i != row)
        .flat_map(move |i| {
            m.row_slice(i)
                .iter()
                .enumerate()
                .filter(move |&(j, _)| j != col)
                .map(|(_, &v)| v)
        })
        .collect::<Vec<f64>>();

    Matrix::from_shape_vec((m.rows() - 1, m.cols() - 1), data)
        .expect("strike: minor of a matrix with at least two rows and columns")
}

/// Square matrices only.
fn cofactor_expansion(m: &Matrix) -> f64 {
    let a = |i: usize, j: usize| m[(i, j)];
    match m.rows() {
        1 => a(0, 0),
        2 => a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
        3 => {
            a(0, 0) * a(1, 1) * a(2, 2) + a(2, 0) * a(0, 1) * a(1, 2) + a(0, 2) * a(1, 0) * a(2, 1)
                - a(2, 0) * a(1, 1) * a(0, 2)
                - a(1, 0) * a(0, 1) * a(2, 2)
                - a(2, 1) * a(1, 2) * a(0, 0)
        }
        n => {
            log::trace!("cofactor expansion of order {}", n);
            let mut result = 0.0;
            for i in 0..n {
                let entry = a(0, i);
                if entry == 0.0 {
                    continue;
                }
                let term = entry * cofactor_expansion(&strike(m, 0, i));
                if i % 2 == 0 {
                    result += term;
                } else {
                    result -= term;
                }
            }
            result
        }
    }
}
