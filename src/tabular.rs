//! Naive tabular input reader.
//!
//! Parses a flat comma-delimited file with a header row into a sequence of
//! [`Record`]s. Parsing splits on newline then on comma, trimming every
//! header and field (which also strips `\r` on CRLF input).
//!
//! # Limitations
//! This reader is deliberately naive: it performs no quoting, escaping, or
//! embedded-delimiter handling, so a comma inside a value silently corrupts
//! that row. Column alignment is positional: short rows yield empty-string
//! fields for the missing columns and excess values are dropped. The seed
//! inputs this crate consumes are plain identifier lists, which never need a
//! CSV dialect.

use crate::error::SeedError;
use std::fs;
use std::path::Path;

/// One row of tabular input: ordered `(header, value)` pairs.
///
/// Every record produced by one [`read_records`] call has the same field
/// set, derived from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Look up a field by exact header name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate `(header, value)` pairs in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }
}

/// Read a tabular file into a sequence of [`Record`]s.
///
/// Reusable across invocations with different paths; no state is kept
/// between calls.
///
/// # Errors
/// Returns [`SeedError::InputFormat`] if the file cannot be read or holds
/// fewer than two lines (no header, or no data rows).
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>, SeedError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SeedError::InputFormat {
        path: path.to_path_buf(),
        reason: format!("read failed: {e}"),
    })?;
    let lines: Vec<&str> = content.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(SeedError::InputFormat {
            path: path.to_path_buf(),
            reason: "expected a header row and at least one data row".into(),
        });
    }

    let headers: Vec<String> = lines[0].split(',').map(|h| h.trim().to_string()).collect();

    let mut out = Vec::with_capacity(lines.len() - 1);
    for line in &lines[1..] {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        // Positional alignment: the Nth value maps to the Nth header.
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = values.get(i).copied().unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();
        out.push(Record { fields });
    }
    Ok(out)
}
