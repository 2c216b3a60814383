//! Arithmetic Logic Unit (ALU) golden model.
//!
//! This module implements the reference behavior of the discrete-transistor
//! ALU: 19 operations on two fixed-width unsigned operands, each producing a
//! masked result and four status flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, IncA, DecA, Cmp
//! - [`logic`]:      Nand, Nor, Xor, And, Or, Xnor, PassA, PassB, NotA, NotB
//! - [`shifts`]:     Lsl, Lsr, Asr, RevA
//!
//! Flag derivation lives in [`flags`].

/// Adder-based operations (add, subtract, increment, decrement, compare).
pub mod arithmetic;

/// Status flags and the carry/overflow policy.
pub mod flags;

/// Bitwise gates, pass-throughs, and inverters.
pub mod logic;

/// Single-bit shifts and bit reversal.
pub mod shifts;

use serde::{Deserialize, Serialize};

pub use self::flags::FlagSet;
use crate::common::{AluError, Width};
use crate::isa::Operation;

/// Result word and status flags produced by one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AluOutput {
    /// Result word, masked to the datapath width.
    pub result: u32,
    /// Status flags.
    pub flags: FlagSet,
}

impl AluOutput {
    /// Creates an output from a result word and flags.
    #[inline(always)]
    pub const fn new(result: u32, flags: FlagSet) -> Self {
        Self { result, flags }
    }
}

/// Arithmetic Logic Unit golden model.
///
/// The engine holds only its datapath width and no mutable state, so one
/// value can be shared freely across threads. Every evaluation is a pure
/// function of the operation and the two operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alu {
    width: Width,
}

impl Alu {
    /// Creates an engine for the given datapath width.
    pub const fn new(width: Width) -> Self {
        Self { width }
    }

    /// Returns the datapath width.
    pub const fn width(&self) -> Width {
        self.width
    }

    /// Executes one ALU operation.
    ///
    /// Operands are masked to the datapath width before use; values outside
    /// the range are silently truncated. Callers that need a hard error
    /// should check operands with [`Width::contains`] first.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation selected on the opcode lines
    /// * `a`  - Operand A
    /// * `b`  - Operand B (ignored by single-operand operations)
    ///
    /// # Examples
    ///
    /// ```
    /// use alu8_core::alu::Alu;
    /// use alu8_core::isa::Operation;
    ///
    /// let alu = Alu::default();
    ///
    /// // Signed overflow: 127 + 1
    /// let out = alu.execute(Operation::Add, 127, 1);
    /// assert_eq!(out.result, 128);
    /// assert!(out.flags.overflow);
    ///
    /// // Borrow: carry clears
    /// let out = alu.execute(Operation::Sub, 3, 10);
    /// assert_eq!(out.result, 249);
    /// assert!(!out.flags.carry);
    ///
    /// // Compare reports the flags of A - B with a zero result word
    /// let out = alu.execute(Operation::Cmp, 42, 42);
    /// assert_eq!(out.result, 0);
    /// assert!(out.flags.zero && out.flags.carry);
    /// ```
    pub const fn execute(&self, op: Operation, a: u32, b: u32) -> AluOutput {
        execute(op, a, b, self.width)
    }

    /// Executes an operation given by name or opcode string.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::UnsupportedOperation`] if `id` resolves to none of
    /// the 19 operations.
    pub fn execute_named(&self, id: &str, a: u32, b: u32) -> Result<AluOutput, AluError> {
        let op = id
            .parse::<Operation>()
            .map_err(|_| AluError::UnsupportedOperation(id.to_string()))?;
        Ok(self.execute(op, a, b))
    }
}

/// Executes `op` on `a` and `b` at the given width.
///
/// Dispatch is a single exhaustive match, so every operation is handled and
/// there is no fall-through result.
pub const fn execute(op: Operation, a: u32, b: u32, width: Width) -> AluOutput {
    let a = a & width.mask();
    let b = b & width.mask();
    match op {
        Operation::Add => arithmetic::add(a, b, width),
        Operation::Sub => arithmetic::sub(a, b, width),
        Operation::IncA => arithmetic::inc_a(a, width),
        Operation::DecA => arithmetic::dec_a(a, width),
        Operation::Lsl => shifts::lsl(a, width),
        Operation::Lsr => shifts::lsr(a, width),
        Operation::Asr => shifts::asr(a, width),
        Operation::RevA => shifts::rev_a(a, width),
        Operation::Nand => logic::nand(a, b, width),
        Operation::Nor => logic::nor(a, b, width),
        Operation::Xor => logic::xor(a, b, width),
        Operation::PassA => logic::pass_a(a, width),
        Operation::PassB => logic::pass_b(b, width),
        Operation::And => logic::and(a, b, width),
        Operation::Or => logic::or(a, b, width),
        Operation::Xnor => logic::xnor(a, b, width),
        Operation::Cmp => arithmetic::cmp(a, b, width),
        Operation::NotA => logic::not_a(a, width),
        Operation::NotB => logic::not_b(b, width),
    }
}
