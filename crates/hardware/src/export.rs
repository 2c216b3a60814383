//! Result export.
//!
//! This module persists [`TestResult`] records as flat files. It provides:
//! 1. **JSON:** A pretty-printed array of records.
//! 2. **CSV:** One header row plus one row per result. An empty result set
//!    produces an empty file with no header.
//! 3. **Directory export:** Both files under fixed names in an output directory.
//!
//! Flag columns in CSV use the compact `C=1 Z=0 N=0 V=1` form; an unchecked
//! expected flag prints as `-` and a missing actual output leaves the cell empty.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::VectorError;
use crate::config::HarnessConfig;
use crate::harness::TestResult;
use crate::vector::ExpectedFlags;

/// File name of the JSON export.
pub const RESULTS_JSON: &str = "test_results.json";

/// File name of the CSV export.
pub const RESULTS_CSV: &str = "test_results.csv";

/// CSV header, in record field order.
pub const CSV_HEADER: [&str; 9] = [
    "vector_file",
    "test_name",
    "operation",
    "passed",
    "expected_result",
    "actual_result",
    "expected_flags",
    "actual_flags",
    "message",
];

/// Serializes results as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`VectorError::Serialize`] if serialization fails.
pub fn to_json_string<'a>(results: impl IntoIterator<Item = &'a TestResult>) -> Result<String, VectorError> {
    let rows: Vec<&TestResult> = results.into_iter().collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Renders results as CSV text.
pub fn to_csv_string<'a>(results: impl IntoIterator<Item = &'a TestResult>) -> String {
    let mut rows = results.into_iter().peekable();
    let mut out = String::new();
    if rows.peek().is_none() {
        return out;
    }
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');
    for r in rows {
        let cells = [
            escape(&r.vector_file),
            escape(&r.test_name),
            escape(&r.operation),
            r.passed.to_string(),
            r.expected_result.to_string(),
            r.actual_result.map(|v| v.to_string()).unwrap_or_default(),
            expected_cell(&r.expected_flags),
            r.actual_flags.map(|f| f.to_string()).unwrap_or_default(),
            escape(&r.message),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Writes the JSON export to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`VectorError::Io`] on write failure or [`VectorError::Serialize`].
pub fn write_results_json<'a>(
    results: impl IntoIterator<Item = &'a TestResult>,
    path: &Path,
) -> Result<(), VectorError> {
    let raw = to_json_string(results)?;
    write_file(path, &raw)
}

/// Writes the CSV export to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`VectorError::Io`] on write failure.
pub fn write_results_csv<'a>(
    results: impl IntoIterator<Item = &'a TestResult>,
    path: &Path,
) -> Result<(), VectorError> {
    write_file(path, &to_csv_string(results))
}

/// Writes every export enabled in `config` into `config.output_dir`.
///
/// Returns the paths written.
///
/// # Errors
///
/// Returns the first write or serialization failure.
pub fn write_results(results: &[&TestResult], config: &HarnessConfig) -> Result<Vec<PathBuf>, VectorError> {
    let mut written = Vec::new();
    if config.write_json {
        let path = config.output_dir.join(RESULTS_JSON);
        write_results_json(results.iter().copied(), &path)?;
        written.push(path);
    }
    if config.write_csv {
        let path = config.output_dir.join(RESULTS_CSV);
        write_results_csv(results.iter().copied(), &path)?;
        written.push(path);
    }
    for path in &written {
        info!(path = %path.display(), rows = results.len(), "wrote results");
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<(), VectorError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| VectorError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| VectorError::io(path, e))
}

fn expected_cell(flags: &ExpectedFlags) -> String {
    flags
        .entries()
        .into_iter()
        .map(|(name, value)| {
            let bit = value.map_or("-", |v| if v { "1" } else { "0" });
            format!("{}={bit}", name[..1].to_ascii_uppercase())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quotes a field if it contains a delimiter, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
