use serde::{Deserialize, Serialize};

use crate::scale::{ScaleError, ScalingStats};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorScaling {
    pub values: Vec<f64>,
    pub mean: f64,
    pub std_dev: f64,
}

impl VectorScaling {
    pub fn stats(&self) -> ScalingStats {
        ScalingStats {
            mean: self.mean,
            std_dev: self.std_dev,
        }
    }

    /// Maps normalized values back to the original scale.
    pub fn invert(&self, scaled: &[f64]) -> Vec<f64> {
        let stats = self.stats();
        scaled.iter().map(|&z| stats.invert(z)).collect()
    }
}

pub fn normalize_vector(values: &[f64]) -> Result<VectorScaling, ScaleError> {
    let stats = ScalingStats::fit(values).ok_or(ScaleError::EmptyDataset)?;
    if stats.is_degenerate() {
        return Err(ScaleError::DegenerateVector {
            len: values.len(),
            value: stats.mean,
        });
    }
    if !stats.is_finite() {
        return Err(ScaleError::NonFiniteVector {
            mean: stats.mean,
            std_dev: stats.std_dev,
        });
    }

    Ok(VectorScaling {
        values: values.iter().map(|&v| stats.apply(v)).collect(),
        mean: stats.mean,
        std_dev: stats.std_dev,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/scale/vector.rs"]
mod tests;
