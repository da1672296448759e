use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use num_traits::AsPrimitive;

use crate::error::{MatrixError, Result};

/// Dense `f64` matrix stored row-major.
///
/// Every matrix has at least one row and one column. Operations other than
/// [`Matrix::set`], [`Matrix::transpose`] and the mutable indexers return a
/// freshly allocated matrix and leave `self` untouched.
///
/// Mutation goes through `&mut self`, so sharing a matrix between threads is
/// safe for reads and exclusive for writes; there is no interior locking.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidSize { rows, cols });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidSize { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from owned rows. The outer vector indexes rows.
    ///
    /// The rows are moved into the matrix, so the caller keeps no handle that
    /// could alias the storage.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let (nrows, ncols) = check_rows(&rows)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Build a matrix by copying borrowed rows, e.g. `&[[1.0, 2.0], [3.0, 4.0]]`.
    pub fn from_slice_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let (nrows, ncols) = check_rows(rows)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// `size x size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        let mut m = Self::new(size, size)?;
        for i in 0..size {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row < self.rows && col < self.cols {
            let offset = self.offset(row, col);
            Some(&mut self.data[offset])
        } else {
            None
        }
    }

    /// Write `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [f64] {
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (a_start, b_start) = (self.offset(a, 0), self.offset(b, 0));
        for k in 0..self.cols {
            self.data.swap(a_start + k, b_start + k);
        }
    }

    /// Deep copy of the contents as nested rows.
    pub fn get_raw_matrix(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// True when both matrices have the same shape and every pair of entries
    /// differs by at most `eps`.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Element-wise sum. Both operands must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference. Both operands must have the same shape.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Matrix product `self * other`, shaped `self.rows() x other.cols()`.
    pub fn mult(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut result = Matrix::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            let lhs = self.row_slice(i);
            for j in 0..other.cols {
                result[(i, j)] = lhs
                    .iter()
                    .enumerate()
                    .map(|(k, a)| a * other[(k, j)])
                    .sum::<f64>();
            }
        }
        Ok(result)
    }

    /// Multiply every entry by an integer or floating-point scalar.
    pub fn mult_scalar<S: AsPrimitive<f64>>(&self, multiplier: S) -> Matrix {
        let k: f64 = multiplier.as_();
        self.mapv(|v| v * k)
    }

    /// Transpose in place: a `rows x cols` matrix becomes `cols x rows`.
    pub fn transpose(&mut self) {
        let mut result = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[j * self.rows + i] = self.data[self.offset(i, j)];
            }
        }
        self.data = result;
        std::mem::swap(&mut self.rows, &mut self.cols);
    }

    pub fn transposed(&self) -> Matrix {
        let mut m = self.clone();
        m.transpose();
        m
    }
}

fn check_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<(usize, usize)> {
    let first = rows
        .first()
        .ok_or(MatrixError::InvalidArgument("matrix data cannot be empty"))?;
    let ncols = first.as_ref().len();
    if ncols == 0 {
        return Err(MatrixError::InvalidArgument("matrix rows cannot be empty"));
    }
    for (row, values) in rows.iter().enumerate() {
        let found = values.as_ref().len();
        if found != ncols {
            return Err(MatrixError::RaggedRows {
                row,
                expected: ncols,
                found,
            });
        }
    }
    Ok((rows.len(), ncols))
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        match Matrix::sub(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        match self.mult(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.mult_scalar(rhs)
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.mapv(|v| -v)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                if idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
