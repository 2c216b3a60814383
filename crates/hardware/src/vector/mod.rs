//! Test vector records.
//!
//! This module defines the stimulus/expected-response records consumed by the
//! harness. It provides:
//! 1. **`TestVector`:** One immutable record as stored in a vector file.
//! 2. **`ExpectedFlags`:** Per-flag expectations where an absent flag is "don't care".
//! 3. **`VectorDocument`:** The `{ "tests": [...] }` file layout used when writing.
//!
//! Loading and schema checking live in [`loader`] and [`schema`].

/// Vector file discovery and loading.
pub mod loader;

/// Published JSON Schema and structural validation.
pub mod schema;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::alu::{AluOutput, FlagSet};
use crate::isa::Operation;

/// One test vector: stimulus plus expected response.
///
/// Operands and the expected result are read as signed 64-bit integers so
/// that negative or oversized values reach the oracle's range check instead
/// of failing deserialization. The source path is attached by the loader and
/// never serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    /// Vector identifier, unique within its file by convention.
    #[serde(default = "default_test_name")]
    pub test_name: String,
    /// 5-bit binary opcode string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opcode: Option<String>,
    /// Symbolic operation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Operand A.
    #[serde(rename = "A")]
    pub a: i64,
    /// Operand B.
    #[serde(rename = "B")]
    pub b: i64,
    /// Expected result word.
    pub expected_result: i64,
    /// Expected flags; absent flags are not compared.
    #[serde(default)]
    pub expected_flags: ExpectedFlags,
    /// Datapath width override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// File the vector was loaded from.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_test_name() -> String {
    "unnamed".to_string()
}

impl TestVector {
    /// Builds a vector whose expectation is the given engine output.
    ///
    /// The vector is keyed by opcode string, which is how generated vector
    /// files address the hardware.
    pub fn from_output(name: impl Into<String>, op: Operation, a: u32, b: u32, out: AluOutput) -> Self {
        Self {
            test_name: name.into(),
            opcode: Some(op.opcode_str()),
            operation: None,
            a: i64::from(a),
            b: i64::from(b),
            expected_result: i64::from(out.result),
            expected_flags: ExpectedFlags::from(out.flags),
            width: None,
            source: None,
        }
    }

    /// Sets the datapath width override.
    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Best-effort label for the operation, used before resolution succeeds.
    ///
    /// Prefers the symbolic name, then the opcode string, then `"UNKNOWN"`.
    pub fn identifier(&self) -> &str {
        self.operation
            .as_deref()
            .or(self.opcode.as_deref())
            .map_or("UNKNOWN", str::trim)
    }

    /// File name (without directory) of the vector's source, or `""`.
    pub fn file_name(&self) -> String {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Expected status flags with per-flag "don't care".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpectedFlags {
    /// Expected carry, if checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carry: Option<bool>,
    /// Expected zero, if checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<bool>,
    /// Expected negative, if checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,
    /// Expected overflow, if checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<bool>,
}

/// One flag whose actual value differs from its expectation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagMismatch {
    /// Flag name (`"carry"`, `"zero"`, ...).
    pub flag: &'static str,
    /// Expected value.
    pub expected: bool,
    /// Actual value.
    pub actual: bool,
}

impl ExpectedFlags {
    /// Returns `(name, expectation)` pairs in reporting order.
    pub const fn entries(&self) -> [(&'static str, Option<bool>); 4] {
        [
            ("carry", self.carry),
            ("zero", self.zero),
            ("negative", self.negative),
            ("overflow", self.overflow),
        ]
    }

    /// Returns true if no flag is checked.
    pub const fn is_empty(&self) -> bool {
        self.carry.is_none()
            && self.zero.is_none()
            && self.negative.is_none()
            && self.overflow.is_none()
    }

    /// Lists every checked flag that differs from `actual`.
    pub fn mismatches(&self, actual: &FlagSet) -> Vec<FlagMismatch> {
        self.entries()
            .into_iter()
            .filter_map(|(flag, expected)| {
                let expected = expected?;
                let actual = actual.get(flag)?;
                (expected != actual).then_some(FlagMismatch {
                    flag,
                    expected,
                    actual,
                })
            })
            .collect()
    }
}

impl From<FlagSet> for ExpectedFlags {
    fn from(flags: FlagSet) -> Self {
        Self {
            carry: Some(flags.carry),
            zero: Some(flags.zero),
            negative: Some(flags.negative),
            overflow: Some(flags.overflow),
        }
    }
}

/// Vector file layout `{ "tests": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorDocument {
    /// Vectors in file order.
    pub tests: Vec<TestVector>,
}
