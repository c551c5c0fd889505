//! JSON dump reader
//!
//! Expects an array of flat objects. Strings are taken as-is, numbers and
//! booleans are stringified, nulls are dropped.

use super::{SourceError, SourceResult};
use crate::post::Record;
use serde_json::{Map, Value};
use std::io::Read;

/// Read an array of flat objects
pub fn read_records<R: Read>(input: R) -> SourceResult<Vec<Record>> {
    let rows: Vec<Map<String, Value>> = serde_json::from_reader(input)?;
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row_to_record(index, row))
        .collect()
}

fn row_to_record(index: usize, row: Map<String, Value>) -> SourceResult<Record> {
    let mut record = Record::new();
    for (key, value) in row {
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => continue,
            Value::Array(_) | Value::Object(_) => {
                return Err(SourceError::InvalidRecord {
                    index,
                    reason: format!("field {} is not a scalar", key),
                });
            }
        };
        record.insert(key, value);
    }
    Ok(record)
}
