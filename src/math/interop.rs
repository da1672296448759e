//! Conversions between [`Matrix`] and `ndarray::Array2<f64>`.

use ndarray::Array2;

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

impl From<&Matrix> for Array2<f64> {
    fn from(value: &Matrix) -> Self {
        Array2::from_shape_vec(value.shape(), value.as_slice().to_vec())
            .expect("matrix buffer always matches its shape")
    }
}

impl TryFrom<&Array2<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(value: &Array2<f64>) -> Result<Self> {
        // `iter` walks in logical row-major order regardless of memory layout.
        Matrix::from_shape_vec(value.dim(), value.iter().copied().collect())
    }
}
