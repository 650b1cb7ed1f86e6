use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::InputError;
use crate::input::loader::read_dataset;
use crate::model::dataset::Dataset;

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct DatasetCtx {
    pub input_path: PathBuf,
    pub dataset: Dataset,
    pub n_rows: usize,
    pub n_features: usize,
}

pub fn run_stage1(input_path: &Path) -> Result<DatasetCtx, Stage1Error> {
    let dataset = read_dataset(input_path)?;
    Ok(DatasetCtx {
        input_path: input_path.to_path_buf(),
        n_rows: dataset.n_rows(),
        n_features: dataset.n_features(),
        dataset,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
