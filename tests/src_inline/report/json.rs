use super::*;
use crate::model::dataset::{ColumnRole, Dataset};
use crate::pipeline::stage2_normalize::run_stage2;
use std::path::PathBuf;

#[test]
fn summary_contains_counts_and_stats() {
    let dataset = Dataset {
        features: vec![vec![1.0, 1.0, 2.0], vec![1.0, 4.0, 5.0]],
        target: vec![3.0, 6.0],
        roles: vec![ColumnRole::Bias, ColumnRole::Feature, ColumnRole::Feature],
    };
    let ctx = DatasetCtx {
        input_path: PathBuf::from("train.csv"),
        n_rows: dataset.n_rows(),
        n_features: dataset.n_features(),
        dataset,
    };
    let scaled = run_stage2(&ctx).expect("stage2");

    let summary = build_summary(&ctx, &scaled);
    let text = render_summary(&summary).expect("render");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");

    assert_eq!(value["tool"]["name"], "feature-scale");
    assert_eq!(value["input"]["path"], "train.csv");
    assert_eq!(value["input"]["n_rows"], 2);
    assert_eq!(value["input"]["n_features"], 2);
    assert_eq!(value["features"]["mean"][0], 1.0);
    assert_eq!(value["features"]["std_dev"][1], 1.5);
    assert_eq!(value["target"]["mean"], 4.5);
    assert_eq!(value["target"]["std_dev"], 1.5);
}
