//! ALU arithmetic operations.
//!
//! Implements the adder-based operations: ADD, SUB, INC_A, DEC_A, and CMP.
//! Each computes the raw result in `i64` so that carry-out and borrow survive
//! until the flag policy has inspected them; the returned result is masked.
//!
//! CMP runs the subtractor for its flags only. Its output word is always 0,
//! while `zero` and `negative` describe the internal difference `a - b`.

use super::AluOutput;
use super::flags::{self, FlagSet};
use crate::common::Width;

/// ADD: `a + b`.
pub const fn add(a: u32, b: u32, width: Width) -> AluOutput {
    let raw = a as i64 + b as i64;
    AluOutput::new(
        width.truncate(raw),
        FlagSet::from_raw(
            raw,
            width,
            flags::add_carry(raw, width),
            flags::add_overflow(a, b, raw, width),
        ),
    )
}

/// SUB: `a - b`, carry set when no borrow occurred.
pub const fn sub(a: u32, b: u32, width: Width) -> AluOutput {
    let raw = a as i64 - b as i64;
    AluOutput::new(width.truncate(raw), subtract_flags(a, b, raw, width))
}

/// INC_A: `a + 1`; B is ignored.
pub const fn inc_a(a: u32, width: Width) -> AluOutput {
    let raw = a as i64 + 1;
    AluOutput::new(
        width.truncate(raw),
        FlagSet::from_raw(
            raw,
            width,
            flags::add_carry(raw, width),
            flags::inc_overflow(a, width),
        ),
    )
}

/// DEC_A: `a - 1`; B is ignored.
pub const fn dec_a(a: u32, width: Width) -> AluOutput {
    let raw = a as i64 - 1;
    AluOutput::new(
        width.truncate(raw),
        FlagSet::from_raw(
            raw,
            width,
            flags::dec_carry(a),
            flags::dec_overflow(a, width),
        ),
    )
}

/// CMP: flags of `a - b`, result always 0.
pub const fn cmp(a: u32, b: u32, width: Width) -> AluOutput {
    let raw = a as i64 - b as i64;
    AluOutput::new(0, subtract_flags(a, b, raw, width))
}

const fn subtract_flags(a: u32, b: u32, raw: i64, width: Width) -> FlagSet {
    FlagSet::from_raw(
        raw,
        width,
        flags::sub_carry(a, b),
        flags::sub_overflow(a, b, raw, width),
    )
}
