//! Test vector generation.
//!
//! This module produces vectors whose expectations come from the golden model.
//! It provides:
//! 1. **Boundary sets:** Corner operands (zero, one, signed limits, all-ones,
//!    alternating bits) crossed for every operation.
//! 2. **Exhaustive sweeps:** Every operand pair for one operation, limited to
//!    widths small enough to enumerate.
//! 3. **Output:** Writing a `{ "tests": [...] }` document.
//!
//! Operations that do not read B are generated with `B = 0` only.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::alu;
use crate::common::constants::{DEFAULT_WIDTH, EXHAUSTIVE_MAX_WIDTH, PATTERN_01, PATTERN_10};
use crate::common::{AluError, VectorError, Width};
use crate::isa::Operation;
use crate::vector::{TestVector, VectorDocument};

/// Corner operands for `width`, masked, sorted, and deduplicated.
pub fn corner_operands(width: Width) -> Vec<u32> {
    let mut corners: Vec<u32> = [
        0,
        1,
        width.signed_max(),
        width.signed_min(),
        width.mask(),
        PATTERN_01,
        PATTERN_10,
    ]
    .into_iter()
    .map(|v| v & width.mask())
    .collect();
    corners.sort_unstable();
    corners.dedup();
    corners
}

/// Conventional vector name: `{NAME}_{A}_{B}` with operands in zero-padded hex.
pub fn vector_name(op: Operation, a: u32, b: u32, width: Width) -> String {
    let digits = width.hex_digits();
    format!("{}_{a:0digits$X}_{b:0digits$X}", op.name())
}

/// Builds one vector for `op` with its expectation computed by the engine.
pub fn vector_for(op: Operation, a: u32, b: u32, width: Width) -> TestVector {
    let out = alu::execute(op, a, b, width);
    let vector = TestVector::from_output(vector_name(op, a, b, width), op, a, b, out);
    if width.bits() == DEFAULT_WIDTH {
        vector
    } else {
        vector.with_width(width.bits())
    }
}

/// Boundary vectors for every operation.
pub fn boundary_vectors(width: Width) -> Vec<TestVector> {
    let corners = corner_operands(width);
    let mut vectors = Vec::new();
    for op in Operation::ALL {
        let bs: &[u32] = if op.uses_b() { &corners } else { &[0] };
        for &a in &corners {
            for &b in bs {
                vectors.push(vector_for(op, a, b, width));
            }
        }
    }
    vectors
}

/// Every operand combination for `op`.
///
/// Produces `2^W × 2^W` vectors, or `2^W` when the operation ignores B.
///
/// # Errors
///
/// Returns [`AluError::ExhaustiveWidth`] above the enumerable width limit.
pub fn exhaustive_vectors(op: Operation, width: Width) -> Result<Vec<TestVector>, AluError> {
    if width.bits() > EXHAUSTIVE_MAX_WIDTH {
        return Err(AluError::ExhaustiveWidth {
            width: width.bits(),
            max: EXHAUSTIVE_MAX_WIDTH,
        });
    }
    let mask = width.mask();
    let b_max = if op.uses_b() { mask } else { 0 };
    let mut vectors = Vec::with_capacity((mask as usize + 1) * (b_max as usize + 1));
    for a in 0..=mask {
        for b in 0..=b_max {
            vectors.push(vector_for(op, a, b, width));
        }
    }
    Ok(vectors)
}

/// Generates vectors for a set of operations.
///
/// An empty `ops` slice selects all 19 operations.
///
/// # Errors
///
/// Returns [`AluError::ExhaustiveWidth`] if `exhaustive` is set and the
/// width is too large to enumerate.
pub fn generate(ops: &[Operation], width: Width, exhaustive: bool) -> Result<Vec<TestVector>, AluError> {
    let selected: &[Operation] = if ops.is_empty() { &Operation::ALL } else { ops };
    if exhaustive {
        let mut vectors = Vec::new();
        for &op in selected {
            vectors.extend(exhaustive_vectors(op, width)?);
        }
        Ok(vectors)
    } else {
        Ok(boundary_vectors(width)
            .into_iter()
            .filter(|v| {
                v.opcode
                    .as_deref()
                    .and_then(|code| Operation::from_opcode_str(code).ok())
                    .is_some_and(|op| selected.contains(&op))
            })
            .collect())
    }
}

/// Writes vectors to `path` as a `{ "tests": [...] }` document.
///
/// # Errors
///
/// Returns [`VectorError::Serialize`] or [`VectorError::Io`].
pub fn write_document(document: &VectorDocument, path: &Path) -> Result<(), VectorError> {
    let raw = serde_json::to_string_pretty(document)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| VectorError::io(parent, e))?;
    }
    fs::write(path, raw).map_err(|e| VectorError::io(path, e))?;
    info!(path = %path.display(), vectors = document.tests.len(), "wrote vector document");
    Ok(())
}
