//! Z-score normalization using the population standard deviation.

pub mod matrix;
pub mod vector;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("cannot normalize an empty dataset")]
    EmptyDataset,
    #[error("degenerate variance: all {len} values equal {value}")]
    DegenerateVector { len: usize, value: f64 },
    #[error("degenerate variance in feature columns {0:?}")]
    DegenerateColumns(Vec<usize>),
    #[error("statistics overflow: mean {mean}, std_dev {std_dev}")]
    NonFiniteVector { mean: f64, std_dev: f64 },
    #[error("statistics overflow in feature columns {0:?}")]
    NonFiniteColumns(Vec<usize>),
    #[error("row {row} has {found} values, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Mean and population standard deviation of one column or vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ScalingStats {
    /// Recorded for columns that are passed through untouched.
    pub const SENTINEL: ScalingStats = ScalingStats {
        mean: 1.0,
        std_dev: 1.0,
    };

    /// Returns `None` for an empty input.
    ///
    /// Constant input yields `mean == values[0]` and `std_dev == 0.0` exactly.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        if values.iter().all(|v| *v == first) {
            return Some(Self {
                mean: first,
                std_dev: 0.0,
            });
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: var.sqrt(),
        })
    }

    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// False when the sums overflowed.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite()
    }

    pub fn apply(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }

    pub fn invert(&self, scaled: f64) -> f64 {
        scaled * self.std_dev + self.mean
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scale/mod.rs"]
mod tests;
