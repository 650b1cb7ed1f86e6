use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_normalize::run_stage2;
use crate::report::json::{build_summary, render_summary};

/// Runs both stages and writes the JSON summary to `out`.
pub fn handle(input: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let start = Instant::now();
    info!(stage = "stage1_load", path = %input.display(), "starting stage");
    let ctx = run_stage1(input)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        rows = ctx.n_rows,
        features = ctx.n_features,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_normalize", "starting stage");
    let scaled = run_stage2(&ctx)?;
    info!(
        stage = "stage2_normalize",
        elapsed_ms = start.elapsed().as_millis(),
        target_mean = scaled.target.mean,
        target_std_dev = scaled.target.std_dev,
        "finished stage"
    );

    let summary = build_summary(&ctx, &scaled);
    writeln!(out, "{}", render_summary(&summary)?)?;
    Ok(())
}
