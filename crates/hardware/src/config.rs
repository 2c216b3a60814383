//! Configuration for the vector harness.
//!
//! This module defines the settings that drive a harness run. It provides:
//! 1. **Defaults:** Directory layout and behavior used when no configuration is given.
//! 2. **Structure:** [`HarnessConfig`], deserializable from JSON with every field optional.
//!
//! Command-line flags override individual fields after loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::{VectorError, Width};

/// Default harness settings.
mod defaults {
    /// Directory scanned for `*.json` vector files.
    pub const VECTORS_DIR: &str = "test/vectors";

    /// Directory where `test_results.json` and `test_results.csv` are written.
    pub const OUTPUT_DIR: &str = "results";
}

/// Settings for one harness run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory scanned for vector files.
    pub vectors_dir: PathBuf,
    /// Directory receiving exported results.
    pub output_dir: PathBuf,
    /// Descend into sub-directories of `vectors_dir`.
    pub recursive: bool,
    /// Validate every document against the vector schema before evaluation.
    pub validate_schema: bool,
    /// Width for vectors that omit `width`.
    pub default_width: Width,
    /// Evaluate vectors in canonical opcode order.
    pub sort_by_opcode: bool,
    /// Write `test_results.json`.
    pub write_json: bool,
    /// Write `test_results.csv`.
    pub write_csv: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            vectors_dir: PathBuf::from(defaults::VECTORS_DIR),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            recursive: false,
            validate_schema: true,
            default_width: Width::default(),
            sort_by_opcode: true,
            write_json: true,
            write_csv: true,
        }
    }
}

impl HarnessConfig {
    /// Parses a configuration from JSON text. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error, including for a width outside `1..=32`.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Io`] if the file cannot be read, or
    /// [`VectorError::Json`] if it is not a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self, VectorError> {
        let text = fs::read_to_string(path).map_err(|e| VectorError::io(path, e))?;
        Self::from_json_str(&text).map_err(|source| VectorError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns true if any export is enabled.
    pub const fn exports(&self) -> bool {
        self.write_json || self.write_csv
    }
}
