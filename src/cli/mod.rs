use std::path::PathBuf;

use clap::Parser;

mod run;

#[derive(Parser, Debug)]
#[command(
    name = "feature-scale",
    version,
    about = "Z-score normalize a comma-separated training set"
)]
pub struct Cli {
    /// Training data: one row per line, features then target, comma-separated
    input: PathBuf,
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        run::handle(&self.input, &mut std::io::stdout().lock())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
