//! Reading integer records from text.
//!
//! Records are whitespace separated and may be spread over any number of lines. Empty lines are
//! skipped.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub fn parse_records(text: &str) -> Result<Vec<i64>> {
    let mut records = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let record = token.parse::<i64>().map_err(|_| Error::MalformedRecord {
                line: line_idx + 1,
                token: token.to_owned(),
            })?;

            records.push(record);
        }
    }

    Ok(records)
}

pub fn read_records(path: &Path) -> Result<Vec<i64>> {
    parse_records(&fs::read_to_string(path)?)
}
