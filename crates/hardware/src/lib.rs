//! Golden model and test-vector harness for an 8-bit ALU.
//!
//! This crate is the reference implementation used to validate a
//! discrete-transistor ALU against known-correct behavior. It provides:
//! 1. **ALU:** 19 pure operations with exact carry/zero/negative/overflow derivation.
//! 2. **ISA:** The closed operation set, its 5-bit opcodes, names, and aliases.
//! 3. **Oracle:** A hardware-interface implementation backed by the golden model.
//! 4. **Harness:** Vector loading, schema validation, evaluation, and per-operation statistics.
//! 5. **Tooling:** Result export, harness configuration, and vector generation.

/// Status flags, flag policy, and the exhaustive operation dispatch.
pub mod alu;
/// Common types and constants (width, errors, limits).
pub mod common;
/// Harness configuration (defaults, JSON loading).
pub mod config;
/// JSON and CSV result writers.
pub mod export;
/// Boundary and exhaustive vector generation.
pub mod generate;
/// Vector runner, per-vector results, and per-file reports.
pub mod harness;
/// Operation set (opcodes, names, categories).
pub mod isa;
/// Hardware interface contract and the golden-model oracle.
pub mod oracle;
/// Per-operation pass/fail statistics and report rendering.
pub mod stats;
/// Test vector records, loading, and schema.
pub mod vector;

/// ALU engine value; use `Alu::default()` for the 8-bit datapath.
pub use crate::alu::{Alu, AluOutput, FlagSet};
/// Error types and the datapath width.
pub use crate::common::{AluError, VectorError, Width};
/// Harness settings; use `HarnessConfig::default()` or load from JSON.
pub use crate::config::HarnessConfig;
/// Runner and its result records.
pub use crate::harness::{FileReport, RunReport, TestResult, VectorRunner};
/// One of the 19 operations.
pub use crate::isa::Operation;
/// Hardware contract and the golden-model implementation.
pub use crate::oracle::{HardwareInterface, VectorOracle};
/// Vector records.
pub use crate::vector::{ExpectedFlags, TestVector};
