//! Comma-separated training set reader.
//!
//! Each non-empty line holds `k` feature values followed by one target value.
//! Rows are parsed lazily by [`RowReader`]; [`read_dataset`] collects them into a
//! [`Dataset`] whose feature rows carry a leading bias value of `1.0`.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::input::{InputError, open_reader};
use crate::model::dataset::{BIAS_VALUE, ColumnRole, Dataset};

/// One parsed line: bias-prefixed feature values and the target.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub line: usize,
    pub features: Vec<f64>,
    pub target: f64,
}

pub struct RowReader<R: Read> {
    inner: csv::Reader<R>,
    record: StringRecord,
    width: Option<usize>,
}

impl<R: Read> RowReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(reader);
        Self {
            inner,
            record: StringRecord::new(),
            width: None,
        }
    }

    /// Token count per line, fixed by the first row read.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    fn parse_current(&mut self, line: usize) -> Result<ParsedRow, InputError> {
        let found = self.record.len();
        let expected = *self.width.get_or_insert(found);
        if found != expected {
            return Err(InputError::MalformedRow {
                line,
                reason: format!("expected {expected} fields, found {found}"),
            });
        }

        let mut features = Vec::with_capacity(found);
        features.push(BIAS_VALUE);
        for (idx, token) in self.record.iter().enumerate() {
            let value = parse_value(token, line, idx)?;
            if idx + 1 == found {
                return Ok(ParsedRow {
                    line,
                    features,
                    target: value,
                });
            }
            features.push(value);
        }

        Err(InputError::MalformedRow {
            line,
            reason: "row has no fields".to_string(),
        })
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<ParsedRow, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self
                    .record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(0);
                Some(self.parse_current(line))
            }
            Err(err) => Some(Err(csv_error(err))),
        }
    }
}

fn parse_value(token: &str, line: usize, column: usize) -> Result<f64, InputError> {
    let value: f64 = token.parse().map_err(|_| InputError::MalformedRow {
        line,
        reason: format!("field {} is not a number: {token:?}", column + 1),
    })?;
    if !value.is_finite() {
        return Err(InputError::MalformedRow {
            line,
            reason: format!("field {} is not finite: {token:?}", column + 1),
        });
    }
    Ok(value)
}

fn csv_error(err: csv::Error) -> InputError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => InputError::Io(e),
        _ => InputError::MalformedRow { line, reason },
    }
}

pub fn read_dataset(path: &Path) -> Result<Dataset, InputError> {
    let reader = open_reader(path)?;
    read_dataset_from(reader, &path.to_string_lossy())
}

/// Collects every row of `reader`; the first error aborts the load.
pub fn read_dataset_from<R: Read>(reader: R, source: &str) -> Result<Dataset, InputError> {
    let mut rows = RowReader::new(reader);
    let mut features = Vec::new();
    let mut target = Vec::new();
    for row in rows.by_ref() {
        let row = row?;
        features.push(row.features);
        target.push(row.target);
    }

    let Some(width) = rows.width() else {
        return Err(InputError::EmptyDataset(source.to_string()));
    };

    let mut roles = vec![ColumnRole::Feature; width];
    roles[0] = ColumnRole::Bias;

    Ok(Dataset {
        features,
        target,
        roles,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/loader.rs"]
mod tests;
