use serde::{Deserialize, Serialize};

use crate::model::dataset::{BIAS_VALUE, ColumnRole};
use crate::scale::{ScaleError, ScalingStats};

/// Normalized matrix with the per-column statistics needed to reapply or undo it.
///
/// Bias columns record [`ScalingStats::SENTINEL`] and hold [`BIAS_VALUE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixScaling {
    pub values: Vec<Vec<f64>>,
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
    pub roles: Vec<ColumnRole>,
}

impl MatrixScaling {
    pub fn column_stats(&self, index: usize) -> Option<ScalingStats> {
        Some(ScalingStats {
            mean: *self.mean.get(index)?,
            std_dev: *self.std_dev.get(index)?,
        })
    }

    /// Applies the fitted transform to a new row of raw values.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>, ScaleError> {
        self.map_row(row, ScalingStats::apply)
    }

    pub fn invert_row(&self, row: &[f64]) -> Result<Vec<f64>, ScaleError> {
        self.map_row(row, ScalingStats::invert)
    }

    fn map_row(
        &self,
        row: &[f64],
        f: impl Fn(&ScalingStats, f64) -> f64,
    ) -> Result<Vec<f64>, ScaleError> {
        check_width(0, self.roles.len(), row.len())?;
        Ok(self
            .roles
            .iter()
            .zip(self.mean.iter().zip(&self.std_dev))
            .zip(row)
            .map(|((role, (&mean, &std_dev)), &value)| match role {
                ColumnRole::Bias => BIAS_VALUE,
                ColumnRole::Feature => f(&ScalingStats { mean, std_dev }, value),
            })
            .collect())
    }
}

/// Normalizes every [`ColumnRole::Feature`] column of `rows` independently.
///
/// All zero-variance columns are reported together in one
/// [`ScaleError::DegenerateColumns`]; columns whose sums overflow are reported
/// the same way in [`ScaleError::NonFiniteColumns`].
pub fn normalize_matrix(
    rows: &[Vec<f64>],
    roles: &[ColumnRole],
) -> Result<MatrixScaling, ScaleError> {
    if rows.is_empty() {
        return Err(ScaleError::EmptyDataset);
    }
    for (idx, row) in rows.iter().enumerate() {
        check_width(idx, roles.len(), row.len())?;
    }

    let mut stats = Vec::with_capacity(roles.len());
    let mut degenerate = Vec::new();
    let mut overflowed = Vec::new();
    let mut column = Vec::with_capacity(rows.len());
    for (j, role) in roles.iter().enumerate() {
        if *role == ColumnRole::Bias {
            stats.push(ScalingStats::SENTINEL);
            continue;
        }
        column.clear();
        column.extend(rows.iter().map(|row| row[j]));
        let fitted = ScalingStats::fit(&column).ok_or(ScaleError::EmptyDataset)?;
        if fitted.is_degenerate() {
            degenerate.push(j);
        } else if !fitted.is_finite() {
            overflowed.push(j);
        }
        stats.push(fitted);
    }
    if !degenerate.is_empty() {
        return Err(ScaleError::DegenerateColumns(degenerate));
    }
    if !overflowed.is_empty() {
        return Err(ScaleError::NonFiniteColumns(overflowed));
    }

    let values = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(roles.iter().zip(&stats))
                .map(|(&value, (role, s))| match role {
                    ColumnRole::Bias => BIAS_VALUE,
                    ColumnRole::Feature => s.apply(value),
                })
                .collect()
        })
        .collect();

    Ok(MatrixScaling {
        values,
        mean: stats.iter().map(|s| s.mean).collect(),
        std_dev: stats.iter().map(|s| s.std_dev).collect(),
        roles: roles.to_vec(),
    })
}

fn check_width(row: usize, expected: usize, found: usize) -> Result<(), ScaleError> {
    if found != expected {
        return Err(ScaleError::ShapeMismatch {
            row,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/scale/matrix.rs"]
mod tests;
