//! Error definitions for the golden model and the vector harness.
//!
//! This module defines the error taxonomy shared by every layer. It provides:
//! 1. **Evaluation Errors:** Identifier resolution, operand range, and width failures
//!    raised while evaluating a single vector.
//! 2. **Vector Errors:** File-level failures (I/O, JSON, schema) that cause one
//!    vector file to be skipped without aborting the batch.
//! 3. **Schema Violations:** Individual rule failures located by JSON pointer.
//!
//! Expected-versus-actual divergence is not an error; it is recorded as a failed
//! [`TestResult`](crate::harness::TestResult).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving or evaluating a single ALU operation.
///
/// These never abort a run: the harness converts them into failed results
/// carrying the error text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// Opcode string does not name one of the 19 operations.
    ///
    /// The associated value is the identifier as supplied.
    #[error("unknown opcode '{0}'")]
    UnknownOpcode(String),

    /// Operation name does not resolve to one of the 19 operations.
    ///
    /// The associated value is the identifier as supplied.
    #[error("unsupported operation '{0}'")]
    UnsupportedOperation(String),

    /// A vector names an operation and an opcode that disagree.
    #[error("operation '{name}' does not match opcode '{opcode}'")]
    OperationMismatch {
        /// The symbolic operation name.
        name: String,
        /// The binary opcode string.
        opcode: String,
    },

    /// A vector carries neither an `operation` nor an `opcode` field.
    #[error("vector has no operation or opcode")]
    MissingOperation,

    /// An operand does not fit the datapath width.
    #[error("operand {operand} = {value} out of range for {width}-bit datapath (0..={max})")]
    OperandOutOfRange {
        /// Operand label (`"A"` or `"B"`).
        operand: &'static str,
        /// The offending value.
        value: i64,
        /// Datapath width in bits.
        width: u32,
        /// Largest representable operand.
        max: u32,
    },

    /// Width is zero or exceeds the widest supported datapath.
    #[error("invalid datapath width {0}")]
    InvalidWidth(u32),

    /// Exhaustive generation was requested for a width too wide to enumerate.
    #[error("exhaustive sweep refused for {width}-bit datapath (max {max})")]
    ExhaustiveWidth {
        /// Requested width.
        width: u32,
        /// Widest width allowed for exhaustive sweeps.
        max: u32,
    },
}

/// A single schema rule failure inside a vector document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value (e.g. `/tests/3/A`).
    pub pointer: String,
    /// Human-readable description of the failed rule.
    pub message: String,
}

impl SchemaViolation {
    /// Creates a violation at `pointer`.
    pub fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pointer.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.pointer, self.message)
        }
    }
}

/// Errors raised while locating, reading, validating, or writing vector files.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Reading or writing a file failed.
    #[error("{path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON or do not match the record layout.
    #[error("{path}: invalid JSON: {source}")]
    Json {
        /// Offending file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// JSON is valid but the top-level layout is not a vector list.
    #[error("{path}: {message}")]
    Format {
        /// Offending file.
        path: PathBuf,
        /// Description of the layout problem.
        message: String,
    },

    /// Document violates the published test-vector schema.
    #[error("{path}: {} schema violation(s), first: {}", .violations.len(), first_violation(.violations))]
    Schema {
        /// Offending file.
        path: PathBuf,
        /// Every violation found.
        violations: Vec<SchemaViolation>,
    },

    /// The vector directory does not exist or is not a directory.
    ///
    /// This is the only fatal harness error.
    #[error("vector directory {0} not found")]
    MissingDirectory(PathBuf),

    /// Serializing results or vectors failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl VectorError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn first_violation(violations: &[SchemaViolation]) -> String {
    violations
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}
