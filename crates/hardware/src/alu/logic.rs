//! ALU logical operations.
//!
//! Implements the bitwise gates (NAND, NOR, XOR, AND, OR, XNOR), the
//! pass-throughs (PASS_A, PASS_B), and the inverters (NOT_A, NOT_B).
//!
//! Inverting results are masked back to the datapath width. Carry and
//! overflow are always clear for this group.

use super::AluOutput;
use super::flags::FlagSet;
use crate::common::Width;

#[inline(always)]
const fn output(result: u32, width: Width) -> AluOutput {
    let result = result & width.mask();
    AluOutput::new(result, FlagSet::from_result(result, width))
}

/// NAND: `~(a & b)`.
pub const fn nand(a: u32, b: u32, width: Width) -> AluOutput {
    output(!(a & b), width)
}

/// NOR: `~(a | b)`.
pub const fn nor(a: u32, b: u32, width: Width) -> AluOutput {
    output(!(a | b), width)
}

/// XOR: `a ^ b`.
pub const fn xor(a: u32, b: u32, width: Width) -> AluOutput {
    output(a ^ b, width)
}

/// AND: `a & b`.
pub const fn and(a: u32, b: u32, width: Width) -> AluOutput {
    output(a & b, width)
}

/// OR: `a | b`.
pub const fn or(a: u32, b: u32, width: Width) -> AluOutput {
    output(a | b, width)
}

/// XNOR: `~(a ^ b)`.
pub const fn xnor(a: u32, b: u32, width: Width) -> AluOutput {
    output(!(a ^ b), width)
}

/// PASS_A: `a` unchanged.
pub const fn pass_a(a: u32, width: Width) -> AluOutput {
    output(a, width)
}

/// PASS_B: `b` unchanged.
pub const fn pass_b(b: u32, width: Width) -> AluOutput {
    output(b, width)
}

/// NOT_A: `~a`.
pub const fn not_a(a: u32, width: Width) -> AluOutput {
    output(!a, width)
}

/// NOT_B: `~b`.
pub const fn not_b(b: u32, width: Width) -> AluOutput {
    output(!b, width)
}
