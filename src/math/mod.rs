//! The dense `Matrix` type and the linear-algebra routines built on it.
//!
//! `matrix` holds storage, access and arithmetic; `determinant` and `inverse`
//! add the numerical algorithms as further `impl Matrix` blocks.
pub mod determinant;
#[cfg(feature = "ndarray")]
pub mod interop;
pub mod inverse;
pub mod matrix;

pub use matrix::Matrix;
