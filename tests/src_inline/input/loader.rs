use super::*;
use std::fs;
use tempfile::tempdir;

fn load(text: &str) -> Result<Dataset, InputError> {
    read_dataset_from(text.as_bytes(), "inline")
}

#[test]
fn loads_bias_features_and_target() {
    let ds = load("1,2,3\n4,5,6\n").expect("load");
    assert_eq!(ds.features, vec![vec![1.0, 1.0, 2.0], vec![1.0, 4.0, 5.0]]);
    assert_eq!(ds.target, vec![3.0, 6.0]);
    assert_eq!(
        ds.roles,
        vec![ColumnRole::Bias, ColumnRole::Feature, ColumnRole::Feature]
    );
    assert_eq!(ds.n_rows(), 2);
    assert_eq!(ds.n_features(), 2);
}

#[test]
fn bias_is_set_regardless_of_content() {
    let ds = load("0,9\n-3.5,7\n").expect("load");
    assert_eq!(ds.features, vec![vec![1.0, 0.0], vec![1.0, -3.5]]);
    assert_eq!(ds.target, vec![9.0, 7.0]);
}

#[test]
fn mismatched_token_count_is_rejected() {
    let err = load("1,2,3\n1,2\n").unwrap_err();
    match err {
        InputError::MalformedRow { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("expected 3"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn longer_row_is_rejected() {
    let err = load("1,2\n1,2,3\n").unwrap_err();
    assert!(matches!(err, InputError::MalformedRow { line: 2, .. }));
}

#[test]
fn unparsable_token_is_rejected() {
    let err = load("1,2,3\n4,abc,6\n").unwrap_err();
    match err {
        InputError::MalformedRow { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("field 2"), "{reason}");
            assert!(reason.contains("abc"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_token_is_rejected() {
    let err = load("1,inf,3\n").unwrap_err();
    assert!(matches!(err, InputError::MalformedRow { line: 1, .. }));
}

#[test]
fn empty_input_is_rejected() {
    match load("").unwrap_err() {
        InputError::EmptyDataset(source) => assert_eq!(source, "inline"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        load("\n\n").unwrap_err(),
        InputError::EmptyDataset(_)
    ));
}

#[test]
fn blank_lines_and_padding_are_ignored() {
    let ds = load("1, 2 ,3\n\n4,5,6\r\n").expect("load");
    assert_eq!(ds.features, vec![vec![1.0, 1.0, 2.0], vec![1.0, 4.0, 5.0]]);
    assert_eq!(ds.target, vec![3.0, 6.0]);
}

#[test]
fn single_field_rows_have_bias_only() {
    let ds = load("3\n4\n").expect("load");
    assert_eq!(ds.features, vec![vec![1.0], vec![1.0]]);
    assert_eq!(ds.target, vec![3.0, 4.0]);
    assert_eq!(ds.n_features(), 0);
}

#[test]
fn row_reader_is_lazy() {
    let mut rows = RowReader::new("1,2\n3,4\nbad\n".as_bytes());
    assert_eq!(rows.width(), None);
    let first = rows.next().expect("row").expect("parsed");
    assert_eq!(first.line, 1);
    assert_eq!(first.features, vec![1.0, 1.0]);
    assert_eq!(first.target, 2.0);
    assert_eq!(rows.width(), Some(2));
    assert!(rows.next().expect("row").is_ok());
    assert!(rows.next().expect("row").is_err());
}

#[test]
fn reads_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("train.csv");
    fs::write(&path, "2104,3,399900\n1600,3,329900\n2400,3,369000\n").expect("write file");

    let ds = read_dataset(&path).expect("read dataset");
    assert_eq!(ds.n_rows(), 3);
    assert_eq!(ds.n_cols(), 3);
    assert_eq!(ds.target[2], 369000.0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.csv");
    match read_dataset(&path).unwrap_err() {
        InputError::Open { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other:?}"),
    }
}
