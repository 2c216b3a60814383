//! ALU shift and bit-permutation operations.
//!
//! Implements single-bit logical shift left (LSL), logical shift right (LSR),
//! arithmetic shift right (ASR), and bit reversal (REV_A). All four read only
//! operand A.
//!
//! Shifts report the bit shifted out in `carry` (the MSB for LSL, the LSB for
//! LSR/ASR). ASR refills the vacated MSB with the original sign bit. REV_A
//! swaps bit `i` with bit `W-1-i` and clears carry.

use super::AluOutput;
use super::flags::FlagSet;
use crate::common::Width;

/// LSL: `a << 1`, carry = original MSB.
pub const fn lsl(a: u32, width: Width) -> AluOutput {
    let carry = width.is_negative(a);
    let result = (a << 1) & width.mask();
    AluOutput::new(result, FlagSet::shifted(result, width, carry))
}

/// LSR: `a >> 1` with zero fill, carry = original LSB.
pub const fn lsr(a: u32, width: Width) -> AluOutput {
    let carry = a & 1 != 0;
    let result = (a >> 1) & width.mask();
    AluOutput::new(result, FlagSet::shifted(result, width, carry))
}

/// ASR: `a >> 1` with the sign bit preserved, carry = original LSB.
pub const fn asr(a: u32, width: Width) -> AluOutput {
    let carry = a & 1 != 0;
    let result = ((a >> 1) | (a & width.sign_bit())) & width.mask();
    AluOutput::new(result, FlagSet::shifted(result, width, carry))
}

/// REV_A: bit reversal within the datapath width.
pub const fn rev_a(a: u32, width: Width) -> AluOutput {
    let result = (a & width.mask()).reverse_bits() >> (u32::BITS - width.bits());
    AluOutput::new(result, FlagSet::from_result(result, width))
}
