use crate::config::{LinalgConfig, PivotStrategy};
use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

/// Pivots this much smaller than the largest entry of their row are reported.
const SMALL_PIVOT_RATIO: f64 = 1e-8;

impl Matrix {
    /// Inverse with the default [`LinalgConfig`]: partial pivoting and a
    /// cofactor determinant check with a relative tolerance of `1e-12`.
    pub fn reverse(&self) -> Result<Matrix> {
        self.reverse_with(&LinalgConfig::default())
    }

    /// Inverse by Gauss-Jordan elimination.
    ///
    /// A working copy of `self` and an identity accumulator are reduced in
    /// lockstep; once the copy reaches the identity the accumulator holds the
    /// inverse.
    ///
    /// Tolerances are relative to `scale`, the largest entry magnitude: the
    /// determinant must exceed `singular_epsilon * scale^n` and every pivot
    /// `singular_epsilon * scale`, otherwise [`MatrixError::Singular`] is
    /// returned. NaN or infinite entries fail with [`MatrixError::NonFinite`].
    pub fn reverse_with(&self, config: &LinalgConfig) -> Result<Matrix> {
        if let Some(offset) = self.as_slice().iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinite {
                row: offset / self.cols(),
                col: offset % self.cols(),
            });
        }
        let determinant = self.determinant_with(config)?;

        let n = self.rows();
        let scale = self.as_slice().iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        let det_tolerance = config.singular_epsilon * scale.powi(n as i32);
        let pivot_tolerance = config.singular_epsilon * scale;
        if determinant.is_nan() || determinant.abs() <= det_tolerance {
            return Err(MatrixError::Singular { determinant });
        }

        log::debug!(
            "inverting {} x {} matrix (det = {}, pivoting = {:?})",
            n,
            n,
            determinant,
            config.pivoting
        );

        let mut work = self.clone();
        let mut inverse = Matrix::identity(n)?;

        for i in 0..n {
            let pivot_row = match config.pivoting {
                PivotStrategy::Partial => (i..n)
                    .max_by(|&a, &b| work[(a, i)].abs().total_cmp(&work[(b, i)].abs()))
                    .unwrap_or(i),
                PivotStrategy::None => i,
            };
            if pivot_row != i {
                log::debug!("swapping rows {} and {}", i, pivot_row);
                work.swap_rows(i, pivot_row);
                inverse.swap_rows(i, pivot_row);
            }

            let pivot = work[(i, i)];
            if pivot.is_nan() || pivot.abs() <= pivot_tolerance {
                return Err(MatrixError::Singular { determinant: pivot });
            }
            let row_scale = work
                .row_slice(i)
                .iter()
                .fold(0.0f64, |acc, v| acc.max(v.abs()));
            if pivot.abs() < row_scale * SMALL_PIVOT_RATIO {
                log::warn!(
                    "pivot {} in row {} is small relative to row scale {}",
                    pivot,
                    i,
                    row_scale
                );
            }

            work.row_slice_mut(i).iter_mut().for_each(|v| *v /= pivot);
            inverse.row_slice_mut(i).iter_mut().for_each(|v| *v /= pivot);

            for j in 0..n {
                if j == i {
                    continue;
                }
                let factor = work[(j, i)];
                if factor == 0.0 {
                    continue;
                }
                log::trace!("eliminating column {} from row {}", i, j);
                for k in 0..n {
                    let w = work[(i, k)];
                    work[(j, k)] -= factor * w;
                    let v = inverse[(i, k)];
                    inverse[(j, k)] -= factor * v;
                }
            }
        }

        Ok(inverse)
    }
}
