//! Test vector runner.
//!
//! This module drives vectors through a [`HardwareInterface`] and compares the
//! observed output against each vector's expectation. It provides:
//! 1. **Evaluation:** One [`TestResult`] per vector; evaluation errors become failed
//!    results and never abort the run.
//! 2. **Ordering:** Canonical evaluation order (stable sort by resolved opcode,
//!    unresolvable vectors last) so runs and hardware round-trips are reproducible.
//! 3. **Reports:** [`FileReport`] per vector file and [`RunReport`] per directory.
//!    A file that cannot be loaded is recorded as skipped and its siblings still run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::alu::{AluOutput, FlagSet};
use crate::common::VectorError;
use crate::config::HarnessConfig;
use crate::isa::Operation;
use crate::oracle::{HardwareInterface, VectorOracle};
use crate::stats::RunSummary;
use crate::vector::loader::{self, LoadOptions};
use crate::vector::{ExpectedFlags, TestVector};

/// Outcome of evaluating one vector.
///
/// Serializes as the flat export record. `actual_result` and `actual_flags`
/// are `None` when evaluation failed before producing an output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// File name the vector came from (empty for in-memory vectors).
    pub vector_file: String,
    /// Vector identifier.
    pub test_name: String,
    /// Canonical operation name, or the raw identifier if it did not resolve.
    pub operation: String,
    /// True iff the result and every checked flag matched.
    pub passed: bool,
    /// Expected result word.
    pub expected_result: i64,
    /// Observed result word.
    pub actual_result: Option<u32>,
    /// Expected flags (absent flags were not checked).
    pub expected_flags: ExpectedFlags,
    /// Observed flags.
    pub actual_flags: Option<FlagSet>,
    /// `"pass"`, `"mismatch: ..."` naming each diverging field, or `"error: ..."`.
    pub message: String,
    /// Resolved operation, used for per-operation grouping.
    #[serde(skip)]
    pub resolved: Option<Operation>,
}

impl TestResult {
    /// Compares an observed output against the vector's expectation.
    pub fn compare(vector: &TestVector, op: Option<Operation>, actual: AluOutput) -> Self {
        let mut diffs = Vec::new();
        if i64::from(actual.result) != vector.expected_result {
            diffs.push(format!(
                "result expected {} got {}",
                vector.expected_result, actual.result
            ));
        }
        for m in vector.expected_flags.mismatches(&actual.flags) {
            diffs.push(format!(
                "{} expected {} got {}",
                m.flag,
                u8::from(m.expected),
                u8::from(m.actual)
            ));
        }
        let passed = diffs.is_empty();
        let message = if passed {
            "pass".to_string()
        } else {
            format!("mismatch: {}", diffs.join("; "))
        };
        Self {
            actual_result: Some(actual.result),
            actual_flags: Some(actual.flags),
            passed,
            message,
            ..Self::skeleton(vector, op)
        }
    }

    /// Builds the failed result for a vector whose evaluation errored.
    pub fn errored(vector: &TestVector, op: Option<Operation>, error: &dyn std::error::Error) -> Self {
        Self {
            message: format!("error: {error}"),
            ..Self::skeleton(vector, op)
        }
    }

    fn skeleton(vector: &TestVector, op: Option<Operation>) -> Self {
        Self {
            vector_file: vector.file_name(),
            test_name: vector.test_name.clone(),
            operation: op.map_or_else(|| vector.identifier().to_string(), |op| op.name().to_string()),
            passed: false,
            expected_result: vector.expected_result,
            actual_result: None,
            expected_flags: vector.expected_flags,
            actual_flags: None,
            message: String::new(),
            resolved: op,
        }
    }
}

/// Results for one vector file.
#[derive(Debug)]
pub struct FileReport {
    /// Path of the vector file.
    pub path: PathBuf,
    /// Results in evaluation order; empty if the file was skipped.
    pub results: Vec<TestResult>,
    /// Why the file was skipped, if it was.
    pub error: Option<VectorError>,
}

impl FileReport {
    /// Number of passing vectors.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of failing vectors.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// True if the file could not be loaded.
    pub const fn is_skipped(&self) -> bool {
        self.error.is_some()
    }

    /// True if the file loaded and every vector passed.
    pub fn is_success(&self) -> bool {
        !self.is_skipped() && self.failed() == 0
    }

    /// File name for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "SKIP {}: {err}", self.file_name()),
            None => {
                let status = if self.is_success() { "PASS" } else { "FAIL" };
                write!(
                    f,
                    "{status} {}: {}/{}",
                    self.file_name(),
                    self.passed(),
                    self.results.len()
                )
            }
        }
    }
}

/// Results for a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// One report per discovered file, in discovery order.
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Every result across all files.
    pub fn results(&self) -> impl Iterator<Item = &TestResult> {
        self.files.iter().flat_map(|f| f.results.iter())
    }

    /// Total passing vectors.
    pub fn passed(&self) -> usize {
        self.files.iter().map(FileReport::passed).sum()
    }

    /// Total failing vectors.
    pub fn failed(&self) -> usize {
        self.files.iter().map(FileReport::failed).sum()
    }

    /// Number of files that could not be loaded.
    pub fn skipped_files(&self) -> usize {
        self.files.iter().filter(|f| f.is_skipped()).count()
    }

    /// Per-operation statistics over every result.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_results(self.results())
    }

    /// True iff at least one file ran, no file was skipped, and nothing failed.
    pub fn success(&self) -> bool {
        !self.files.is_empty() && self.files.iter().all(FileReport::is_success)
    }
}

/// Feeds vectors to a hardware interface and records the outcomes.
///
/// The runner is generic over the backend so the golden model and a
/// hardware-in-the-loop device share one comparison path.
#[derive(Debug)]
pub struct VectorRunner<H> {
    hardware: H,
    sort_by_opcode: bool,
    load_options: LoadOptions,
}

impl VectorRunner<VectorOracle> {
    /// Creates a runner over the golden model, configured from `config`.
    pub const fn golden(config: &HarnessConfig) -> Self {
        Self::with_config(VectorOracle::new(config.default_width), config)
    }
}

impl<H: HardwareInterface> VectorRunner<H> {
    /// Creates a runner with canonical ordering and schema validation enabled.
    pub fn new(hardware: H) -> Self {
        Self {
            hardware,
            sort_by_opcode: true,
            load_options: LoadOptions::default(),
        }
    }

    /// Creates a runner using the ordering and loading settings in `config`.
    pub const fn with_config(hardware: H, config: &HarnessConfig) -> Self {
        Self {
            hardware,
            sort_by_opcode: config.sort_by_opcode,
            load_options: LoadOptions {
                validate_schema: config.validate_schema,
            },
        }
    }

    /// Enables or disables canonical opcode ordering.
    #[must_use]
    pub const fn sort_by_opcode(mut self, enabled: bool) -> Self {
        self.sort_by_opcode = enabled;
        self
    }

    /// Returns the backend.
    pub const fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Consumes the runner and returns the backend.
    pub fn into_hardware(self) -> H {
        self.hardware
    }

    /// Evaluates one vector.
    pub fn evaluate(&mut self, vector: &TestVector) -> TestResult {
        let op = VectorOracle::resolve_operation(vector).ok();
        let result = match self.hardware.evaluate(vector) {
            Ok(actual) => TestResult::compare(vector, op, actual),
            Err(err) => TestResult::errored(vector, op, &err),
        };
        trace!(
            test = %result.test_name,
            operation = %result.operation,
            passed = result.passed,
            "evaluated vector"
        );
        if !result.passed {
            debug!(
                test = %result.test_name,
                file = %result.vector_file,
                "{}",
                result.message
            );
        }
        result
    }

    /// Evaluates a sequence of vectors.
    ///
    /// With opcode ordering enabled, vectors are evaluated in a stable sort by
    /// resolved opcode; vectors whose operation does not resolve keep their
    /// relative order and run last.
    pub fn run(&mut self, vectors: &[TestVector]) -> Vec<TestResult> {
        let mut order: Vec<&TestVector> = vectors.iter().collect();
        if self.sort_by_opcode {
            order.sort_by_cached_key(|v| {
                VectorOracle::resolve_operation(v).map_or(u16::MAX, |op| u16::from(op.opcode()))
            });
        }
        order.into_iter().map(|v| self.evaluate(v)).collect()
    }

    /// Loads and evaluates one vector file.
    ///
    /// Load failures are logged and recorded in the report rather than returned.
    pub fn run_file(&mut self, path: &Path) -> FileReport {
        match loader::load_vectors(path, self.load_options) {
            Ok(vectors) => {
                info!(file = %path.display(), vectors = vectors.len(), "running vector file");
                let results = self.run(&vectors);
                let report = FileReport {
                    path: path.to_path_buf(),
                    results,
                    error: None,
                };
                info!(
                    file = %path.display(),
                    passed = report.passed(),
                    failed = report.failed(),
                    "finished vector file"
                );
                report
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping vector file");
                FileReport {
                    path: path.to_path_buf(),
                    results: Vec::new(),
                    error: Some(err),
                }
            }
        }
    }

    /// Runs every vector file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::MissingDirectory`] or [`VectorError::Io`] if the
    /// directory cannot be listed. Per-file problems are recorded in the
    /// returned report instead.
    pub fn run_directory(&mut self, dir: &Path, recursive: bool) -> Result<RunReport, VectorError> {
        let paths = loader::discover_vector_files(dir, recursive)?;
        if paths.is_empty() {
            warn!(dir = %dir.display(), "no vector files found");
        }
        let files = paths.iter().map(|path| self.run_file(path)).collect();
        Ok(RunReport { files })
    }
}
