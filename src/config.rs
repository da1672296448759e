use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tuning knobs for the numerical routines.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LinalgConfig {
    /// Relative singularity tolerance. Determinants at or below
    /// `singular_epsilon * scale^n` and pivots at or below
    /// `singular_epsilon * scale` are treated as zero, `scale` being the
    /// largest entry magnitude.
    pub singular_epsilon: f64,

    pub pivoting: PivotStrategy,

    pub determinant: DeterminantMethod,
}

/// Row selection during Gauss-Jordan elimination.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// Swap in the row with the largest magnitude in the pivot column.
    #[default]
    Partial,
    /// Always pivot on the diagonal entry.
    None,
}

/// Algorithm used to compute determinants.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeterminantMethod {
    /// Recursive first-row cofactor expansion. Exact for small integer matrices, O(n!).
    #[default]
    Cofactor,
    /// Product of the pivots of an LU factorisation with partial pivoting.
    Lu,
}

impl FromStr for PivotStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "partial" => Ok(PivotStrategy::Partial),
            "none" => Ok(PivotStrategy::None),
            _ => Err(format!(
                "Unknown pivot strategy: {}. Expected one of `partial`, `none`",
                s
            )),
        }
    }
}

impl FromStr for DeterminantMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cofactor" => Ok(DeterminantMethod::Cofactor),
            "lu" => Ok(DeterminantMethod::Lu),
            _ => Err(format!(
                "Unknown determinant method: {}. Expected one of `cofactor`, `lu`",
                s
            )),
        }
    }
}

impl LinalgConfig {
    pub fn new(
        singular_epsilon: f64,
        pivoting: PivotStrategy,
        determinant: DeterminantMethod,
    ) -> Self {
        Self {
            singular_epsilon,
            pivoting,
            determinant,
        }
    }

    pub fn with_singular_epsilon(mut self, singular_epsilon: f64) -> Self {
        self.singular_epsilon = singular_epsilon;
        self
    }

    pub fn with_pivoting(mut self, pivoting: PivotStrategy) -> Self {
        self.pivoting = pivoting;
        self
    }

    pub fn with_determinant(mut self, determinant: DeterminantMethod) -> Self {
        self.determinant = determinant;
        self
    }
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            singular_epsilon: 1e-12,
            pivoting: PivotStrategy::Partial,
            determinant: DeterminantMethod::Cofactor,
        }
    }
}
