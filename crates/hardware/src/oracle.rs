//! Hardware interface contract and the golden-model oracle.
//!
//! This module defines the seam between the vector runner and whatever
//! produces actual results. It provides:
//! 1. **Contract:** [`HardwareInterface`], a single `evaluate` call per vector, so a
//!    hardware-in-the-loop backend can replace the model without touching the runner.
//! 2. **Oracle:** [`VectorOracle`], the golden-model implementation.
//! 3. **Resolution:** Mapping a vector's name/opcode fields to one [`Operation`],
//!    and its optional `width` plus operands to a checked datapath.

use crate::alu::{self, AluOutput};
use crate::common::{AluError, Width};
use crate::isa::Operation;
use crate::vector::TestVector;

/// A device (real or modeled) that can evaluate one test vector.
///
/// Implementations return the observed result word and flags; comparison
/// against the vector's expectation is the runner's job.
pub trait HardwareInterface {
    /// Returns a short name for reports (e.g., `"golden-model"`, `"serial:/dev/ttyUSB0"`).
    fn name(&self) -> &str;

    /// Drives the vector's stimulus and returns the observed output.
    ///
    /// # Errors
    ///
    /// Returns an [`AluError`] if the vector cannot be applied (unresolvable
    /// identifier, operand out of range, bad width). The runner records the
    /// error as a failed result and continues.
    fn evaluate(&mut self, vector: &TestVector) -> Result<AluOutput, AluError>;
}

/// Golden-model implementation of [`HardwareInterface`].
///
/// Holds only the width used for vectors that omit `width`; evaluation is
/// otherwise stateless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VectorOracle {
    default_width: Width,
}

impl VectorOracle {
    /// Creates an oracle that assumes `default_width` for vectors without a width.
    pub const fn new(default_width: Width) -> Self {
        Self { default_width }
    }

    /// Resolves the vector's operation from its `operation` and/or `opcode` fields.
    ///
    /// # Errors
    ///
    /// * [`AluError::UnsupportedOperation`] - the name is not a known operation or alias
    /// * [`AluError::UnknownOpcode`] - the opcode string is malformed or unassigned
    /// * [`AluError::OperationMismatch`] - both are present and disagree
    /// * [`AluError::MissingOperation`] - neither is present
    pub fn resolve_operation(vector: &TestVector) -> Result<Operation, AluError> {
        match (vector.operation.as_deref(), vector.opcode.as_deref()) {
            (Some(name), Some(opcode)) => {
                let named = Operation::from_name(name)?;
                let coded = Operation::from_opcode_str(opcode)?;
                if named == coded {
                    Ok(named)
                } else {
                    Err(AluError::OperationMismatch {
                        name: name.to_string(),
                        opcode: opcode.to_string(),
                    })
                }
            }
            (Some(name), None) => Operation::from_name(name),
            (None, Some(opcode)) => Operation::from_opcode_str(opcode),
            (None, None) => Err(AluError::MissingOperation),
        }
    }

    /// Returns the vector's width, or the oracle default.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] if the vector's width is outside `1..=32`.
    pub fn resolve_width(&self, vector: &TestVector) -> Result<Width, AluError> {
        vector.width.map_or(Ok(self.default_width), Width::new)
    }
}

/// Narrows a vector operand to a datapath word.
///
/// # Errors
///
/// Returns [`AluError::OperandOutOfRange`] if `value` is negative or wider than `width`.
pub fn check_operand(operand: &'static str, value: i64, width: Width) -> Result<u32, AluError> {
    if width.contains(value) {
        Ok(value as u32)
    } else {
        Err(AluError::OperandOutOfRange {
            operand,
            value,
            width: width.bits(),
            max: width.mask(),
        })
    }
}

impl HardwareInterface for VectorOracle {
    fn name(&self) -> &str {
        "golden-model"
    }

    fn evaluate(&mut self, vector: &TestVector) -> Result<AluOutput, AluError> {
        let op = Self::resolve_operation(vector)?;
        let width = self.resolve_width(vector)?;
        let a = check_operand("A", vector.a, width)?;
        let b = check_operand("B", vector.b, width)?;
        Ok(alu::execute(op, a, b, width))
    }
}
