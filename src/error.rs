use std::error::Error;
use std::fmt;

/// Errors raised by matrix construction, access and linear-algebra routines.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A requested dimension was zero.
    InvalidSize { rows: usize, cols: usize },
    /// The source data was missing or empty.
    InvalidArgument(&'static str),
    /// A row of the source data did not match the length of the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer did not hold exactly `rows * cols` values.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// An element index was past the last row or column.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// The operation is only defined for square matrices.
    NotSquare { rows: usize, cols: usize },
    /// The matrix has no inverse; carries the determinant (or pivot) that tripped the check.
    Singular { determinant: f64 },
    /// The entry at `(row, col)` is NaN or infinite.
    NonFinite { row: usize, col: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidSize { rows, cols } => write!(
                f,
                "matrix size must be positive, got {} x {}",
                rows, cols
            ),
            MatrixError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            MatrixError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of bounds for {} x {} matrix",
                row, col, rows, cols
            ),
            MatrixError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "cannot {} a {} x {} matrix with a {} x {} matrix",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::NotSquare { rows, cols } => write!(
                f,
                "operation requires a square matrix, got {} x {}",
                rows, cols
            ),
            MatrixError::Singular { determinant } => write!(
                f,
                "matrix is singular (determinant {})",
                determinant
            ),
            MatrixError::NonFinite { row, col } => write!(
                f,
                "entry ({}, {}) is not a finite number",
                row, col
            ),
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
