use serde::{Deserialize, Serialize};

pub const BIAS_VALUE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Intercept column, held at [`BIAS_VALUE`] and never rescaled.
    Bias,
    Feature,
}

/// Row-major feature matrix plus the target column.
///
/// Every row of `features` has `roles.len()` values and `target.len()` equals
/// the row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub target: Vec<f64>,
    pub roles: Vec<ColumnRole>,
}

impl Dataset {
    pub fn n_rows(&self) -> usize {
        self.features.len()
    }

    pub fn n_cols(&self) -> usize {
        self.roles.len()
    }

    /// Feature columns, excluding bias and target.
    pub fn n_features(&self) -> usize {
        self.roles
            .iter()
            .filter(|r| **r == ColumnRole::Feature)
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/dataset.rs"]
mod tests;
