use serde::Serialize;

use crate::pipeline::stage1_load::DatasetCtx;
use crate::pipeline::stage2_normalize::ScaledContext;
use crate::scale::ScalingStats;

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub features: FeatureSummary,
    pub target: ScalingStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub n_rows: usize,
    pub n_features: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
}

pub fn build_summary(ctx: &DatasetCtx, scaled: &ScaledContext) -> Summary {
    Summary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            path: ctx.input_path.to_string_lossy().to_string(),
            n_rows: ctx.n_rows,
            n_features: ctx.n_features,
        },
        features: FeatureSummary {
            mean: scaled.features.mean.clone(),
            std_dev: scaled.features.std_dev.clone(),
        },
        target: scaled.target.stats(),
    }
}

pub fn render_summary(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
