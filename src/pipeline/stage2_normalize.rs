use thiserror::Error;

use crate::pipeline::stage1_load::DatasetCtx;
use crate::scale::ScaleError;
use crate::scale::matrix::{MatrixScaling, normalize_matrix};
use crate::scale::vector::{VectorScaling, normalize_vector};

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("feature matrix: {0}")]
    Features(#[source] ScaleError),
    #[error("target vector: {0}")]
    Target(#[source] ScaleError),
}

#[derive(Debug, Clone)]
pub struct ScaledContext {
    pub features: MatrixScaling,
    pub target: VectorScaling,
}

pub fn run_stage2(ctx: &DatasetCtx) -> Result<ScaledContext, Stage2Error> {
    let dataset = &ctx.dataset;
    let features =
        normalize_matrix(&dataset.features, &dataset.roles).map_err(Stage2Error::Features)?;
    let target = normalize_vector(&dataset.target).map_err(Stage2Error::Target)?;
    Ok(ScaledContext { features, target })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
