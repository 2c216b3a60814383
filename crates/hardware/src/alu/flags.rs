//! Status flags and the flag derivation policy.
//!
//! This module owns every rule that turns a raw (unmasked) arithmetic result
//! into status flags. It provides:
//! 1. **`FlagSet`:** The four status outputs (carry, zero, negative, overflow).
//! 2. **Result Flags:** `zero` and `negative`, always taken from the masked result.
//! 3. **Arithmetic Policy:** Carry and overflow rules for the ADD/INC and
//!    SUB/DEC/CMP families.
//!
//! Carry follows the "carry = no borrow" convention for every subtracting
//! operation: SUB and CMP set carry when `a >= b`, DEC_A when `a != 0`.
//! Logic, pass, and NOT operations never consult the arithmetic rules; their
//! carry and overflow are always clear.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Width;

/// The four status flags produced alongside every result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagSet {
    /// Carry out (ADD/INC), no-borrow (SUB/DEC/CMP), or shifted-out bit (shifts).
    pub carry: bool,
    /// Masked result is zero.
    pub zero: bool,
    /// Most significant bit of the masked result is set.
    pub negative: bool,
    /// Signed (two's-complement) overflow.
    pub overflow: bool,
}

impl FlagSet {
    /// Flag names in reporting order.
    pub const NAMES: [&'static str; 4] = ["carry", "zero", "negative", "overflow"];

    /// Builds flags for a raw arithmetic result.
    ///
    /// `zero` and `negative` are derived from `raw` masked to `width`; `carry`
    /// and `overflow` are supplied by the operation's policy.
    pub const fn from_raw(raw: i64, width: Width, carry: bool, overflow: bool) -> Self {
        Self {
            carry,
            zero: zero(raw, width),
            negative: negative(raw, width),
            overflow,
        }
    }

    /// Builds flags for a non-arithmetic result: carry and overflow clear.
    pub const fn from_result(result: u32, width: Width) -> Self {
        Self::from_raw(result as i64, width, false, false)
    }

    /// Builds flags for a shift: `carry` is the bit shifted out, overflow clear.
    pub const fn shifted(result: u32, width: Width, carry: bool) -> Self {
        Self::from_raw(result as i64, width, carry, false)
    }

    /// Returns the value of a flag by name, or `None` for an unknown name.
    pub fn get(&self, name: &str) -> Option<bool> {
        match name {
            "carry" => Some(self.carry),
            "zero" => Some(self.zero),
            "negative" => Some(self.negative),
            "overflow" => Some(self.overflow),
            _ => None,
        }
    }

    /// Packs the flags as `NZCV` (bit 3 = negative ... bit 0 = overflow).
    pub const fn to_nzcv(self) -> u8 {
        (self.negative as u8) << 3
            | (self.zero as u8) << 2
            | (self.carry as u8) << 1
            | self.overflow as u8
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={} Z={} N={} V={}",
            u8::from(self.carry),
            u8::from(self.zero),
            u8::from(self.negative),
            u8::from(self.overflow)
        )
    }
}

/// Zero flag: the masked result is zero.
#[inline(always)]
pub const fn zero(raw: i64, width: Width) -> bool {
    width.truncate(raw) == 0
}

/// Negative flag: the MSB of the masked result is set.
#[inline(always)]
pub const fn negative(raw: i64, width: Width) -> bool {
    width.is_negative(width.truncate(raw))
}

/// ADD/INC carry: the raw sum exceeds the width.
#[inline(always)]
pub const fn add_carry(raw: i64, width: Width) -> bool {
    raw > width.mask() as i64
}

/// SUB/CMP carry: no borrow, i.e. `a >= b` unsigned.
#[inline(always)]
pub const fn sub_carry(a: u32, b: u32) -> bool {
    a >= b
}

/// DEC_A carry: no borrow, i.e. `a != 0`.
#[inline(always)]
pub const fn dec_carry(a: u32) -> bool {
    a != 0
}

/// ADD overflow: operands share a sign and the result's sign differs.
pub const fn add_overflow(a: u32, b: u32, raw: i64, width: Width) -> bool {
    let sign_a = width.is_negative(a);
    let sign_b = width.is_negative(b);
    sign_a == sign_b && negative(raw, width) != sign_a
}

/// SUB/CMP overflow: operand signs differ and the result's sign differs from A.
pub const fn sub_overflow(a: u32, b: u32, raw: i64, width: Width) -> bool {
    let sign_a = width.is_negative(a);
    let sign_b = width.is_negative(b);
    sign_a != sign_b && negative(raw, width) != sign_a
}

/// INC_A overflow: A is the largest positive signed value.
#[inline(always)]
pub const fn inc_overflow(a: u32, width: Width) -> bool {
    a == width.signed_max()
}

/// DEC_A overflow: A is the most negative signed value.
#[inline(always)]
pub const fn dec_overflow(a: u32, width: Width) -> bool {
    a == width.signed_min()
}
