//! Vector file discovery and loading.
//!
//! This module turns files on disk into [`TestVector`] lists. It provides:
//! 1. **Discovery:** Finds `*.json` files in a vector directory, optionally recursively,
//!    in a stable (sorted) order.
//! 2. **Parsing:** Accepts either a bare array of vectors or an object with a `tests` array.
//! 3. **Validation:** Optionally runs the structural schema check before deserializing.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::TestVector;
use super::schema;
use crate::common::VectorError;

/// Options controlling how a single vector file is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Run [`schema::validate_document`] before deserializing.
    pub validate_schema: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            validate_schema: true,
        }
    }
}

/// Lists vector files under `dir`.
///
/// Only regular files with a `.json` extension (any case) are returned,
/// sorted by path so evaluation order does not depend on the filesystem.
///
/// # Errors
///
/// Returns [`VectorError::MissingDirectory`] if `dir` is not a directory, or
/// [`VectorError::Io`] if it cannot be read.
pub fn discover_vector_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, VectorError> {
    if !dir.is_dir() {
        return Err(VectorError::MissingDirectory(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    collect(dir, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<(), VectorError> {
    let entries = fs::read_dir(dir).map_err(|e| VectorError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| VectorError::io(dir, e))?.path();
        if path.is_dir() {
            if recursive {
                collect(&path, recursive, files)?;
            }
        } else if is_json(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Reads and parses a file as JSON without interpreting it.
///
/// # Errors
///
/// Returns [`VectorError::Io`] or [`VectorError::Json`].
pub fn read_document(path: &Path) -> Result<Value, VectorError> {
    let text = fs::read_to_string(path).map_err(|e| VectorError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| VectorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every vector from one file.
///
/// Each returned vector has its `source` set to `path`.
///
/// # Errors
///
/// Returns [`VectorError::Schema`] with every violation when validation is
/// enabled and the document is structurally invalid, otherwise any error from [`read_document`] or
/// [`parse_vectors`].
pub fn load_vectors(path: &Path, options: LoadOptions) -> Result<Vec<TestVector>, VectorError> {
    let document = read_document(path)?;
    if options.validate_schema {
        let violations = schema::validate_document(&document);
        if !violations.is_empty() {
            debug!(file = %path.display(), count = violations.len(), "schema violations");
            return Err(VectorError::Schema {
                path: path.to_path_buf(),
                violations,
            });
        }
    }
    let mut vectors = parse_vectors(document, path)?;
    for vector in &mut vectors {
        vector.source = Some(path.to_path_buf());
    }
    debug!(file = %path.display(), vectors = vectors.len(), "loaded vector file");
    Ok(vectors)
}

/// Interprets a parsed document as a vector list.
///
/// Accepts a bare array or an object whose `tests` member is an array.
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns [`VectorError::Format`] for any other top-level layout, or
/// [`VectorError::Json`] if an entry does not match the record layout.
pub fn parse_vectors(document: Value, path: &Path) -> Result<Vec<TestVector>, VectorError> {
    let list = match document {
        Value::Array(_) => document,
        Value::Object(mut map) => match map.remove("tests") {
            Some(tests @ Value::Array(_)) => tests,
            _ => return Err(format_error(path, "object has no \"tests\" array")),
        },
        _ => {
            return Err(format_error(
                path,
                "expected an array of vectors or an object with a \"tests\" array",
            ));
        }
    };
    serde_json::from_value(list).map_err(|source| VectorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn format_error(path: &Path, message: &str) -> VectorError {
    VectorError::Format {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
