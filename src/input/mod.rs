pub mod loader;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("no data rows found in {0}")]
    EmptyDataset(String),
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}

pub fn open_reader(path: &Path) -> Result<BufReader<File>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
