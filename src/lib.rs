//! densemat: dense `f64` matrices with the classic textbook algorithms.
//!
//! The crate provides a single row-major [`Matrix`] type with construction,
//! checked element access, arithmetic, transposition, determinants by cofactor
//! expansion (or LU), cofactor ("allied") matrices and Gauss-Jordan inversion.
//! Numerical tolerances and pivoting live in [`config::LinalgConfig`].
//!
//! Routines report progress through the `log` facade; install any logger
//! (e.g. `env_logger`) to see it.
pub mod config;
pub mod error;
pub mod math;

pub use config::{DeterminantMethod, LinalgConfig, PivotStrategy};
pub use error::{MatrixError, Result};
pub use math::Matrix;
