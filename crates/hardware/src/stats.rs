//! Test run statistics collection and reporting.
//!
//! This module aggregates per-vector results for display. It provides:
//! 1. **Grouping:** Pass/fail counts per operation, in canonical opcode order with
//!    unrecognized identifiers last.
//! 2. **Totals:** Overall passed, failed, and pass rate.
//! 3. **Rendering:** A fixed-width per-operation table via `Display`.

use std::collections::BTreeMap;
use std::fmt;

use crate::harness::TestResult;
use crate::isa::Operation;

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Grouping key for per-operation statistics.
///
/// Known operations order by opcode and sort before any unrecognized identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationKey {
    /// One of the 19 operations.
    Known(Operation),
    /// An identifier that did not resolve, as written in the vector.
    Unknown(String),
}

impl OperationKey {
    /// Key for a result.
    pub fn of(result: &TestResult) -> Self {
        result
            .resolved
            .map_or_else(|| Self::Unknown(result.operation.clone()), Self::Known)
    }

    /// Opcode column text (`-----` when unknown).
    pub fn opcode_label(&self) -> String {
        match self {
            Self::Known(op) => op.opcode_str(),
            Self::Unknown(_) => "-----".to_string(),
        }
    }

    /// Name column text.
    pub fn name(&self) -> &str {
        match self {
            Self::Known(op) => op.name(),
            Self::Unknown(raw) => raw,
        }
    }
}

/// Pass/fail counts for one operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationStats {
    /// Operation the counts belong to.
    pub key: OperationKey,
    /// Passing vectors.
    pub passed: usize,
    /// Failing vectors.
    pub failed: usize,
}

impl OperationStats {
    /// Vectors evaluated for this operation.
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Percentage of passing vectors (0 when nothing ran).
    pub fn pass_rate(&self) -> f64 {
        rate(self.passed, self.total())
    }
}

/// Aggregated statistics for a set of results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-operation counts in canonical order.
    pub operations: Vec<OperationStats>,
    /// Total passing vectors.
    pub passed: usize,
    /// Total failing vectors.
    pub failed: usize,
}

impl RunSummary {
    /// Aggregates results by operation.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a TestResult>) -> Self {
        let mut groups: BTreeMap<OperationKey, (usize, usize)> = BTreeMap::new();
        for result in results {
            let entry = groups.entry(OperationKey::of(result)).or_default();
            if result.passed {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
        let operations: Vec<OperationStats> = groups
            .into_iter()
            .map(|(key, (passed, failed))| OperationStats {
                key,
                passed,
                failed,
            })
            .collect();
        Self {
            passed: operations.iter().map(|s| s.passed).sum(),
            failed: operations.iter().map(|s| s.failed).sum(),
            operations,
        }
    }

    /// Total vectors evaluated.
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Overall pass percentage (0 when nothing ran).
    pub fn pass_rate(&self) -> f64 {
        rate(self.passed, self.total())
    }

    /// Stats for one operation, if any vector exercised it.
    pub fn get(&self, op: Operation) -> Option<&OperationStats> {
        self.operations
            .iter()
            .find(|s| s.key == OperationKey::Known(op))
    }

    /// Renders the per-operation table.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Prints the per-operation table to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "ALU TEST VECTOR SUMMARY")?;
        writeln!(f, "{RULE}")?;
        for stats in &self.operations {
            let status = if stats.failed == 0 { "PASS" } else { "FAIL" };
            writeln!(
                f,
                "{status} {:<5} | {:<8} | {:>6}/{:<6} ({:.2}%)",
                stats.key.opcode_label(),
                stats.key.name(),
                stats.passed,
                stats.total(),
                stats.pass_rate()
            )?;
        }
        writeln!(f, "{THIN_RULE}")?;
        writeln!(
            f,
            "total {:>6}/{:<6} passed, {} failed ({:.2}%)",
            self.passed,
            self.total(),
            self.failed,
            self.pass_rate()
        )?;
        writeln!(f, "{RULE}")
    }
}

fn rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (passed as f64 / total as f64) * 100.0
    }
}
