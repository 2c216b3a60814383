//! Datapath width type.
//!
//! This module defines a strong type for the ALU bit width. It provides the following:
//! 1. **Validation:** Only widths in `1..=MAX_WIDTH` can be constructed.
//! 2. **Masks:** Result mask, sign bit, and signed extremes derived from the width.
//! 3. **Signed View:** Two's-complement interpretation of a masked word.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_WIDTH, MAX_WIDTH};
use super::error::AluError;

/// Validated datapath width in bits.
///
/// Every operand and result handled by the engine is masked to this width.
/// Serializes as a plain integer (`"width": 8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Width(u32);

impl Width {
    /// The 8-bit width of the physical ALU.
    pub const W8: Self = Self(DEFAULT_WIDTH);

    /// Creates a width, rejecting 0 and anything wider than [`MAX_WIDTH`].
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidWidth`] when `bits` is outside `1..=MAX_WIDTH`.
    pub fn new(bits: u32) -> Result<Self, AluError> {
        if bits == 0 || bits > MAX_WIDTH {
            Err(AluError::InvalidWidth(bits))
        } else {
            Ok(Self(bits))
        }
    }

    /// Returns the number of bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// All-ones mask of `bits` width (`0xFF` at width 8).
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        if self.0 == u32::BITS {
            u32::MAX
        } else {
            (1 << self.0) - 1
        }
    }

    /// The most significant bit of the word (`0x80` at width 8).
    #[inline(always)]
    pub const fn sign_bit(self) -> u32 {
        1 << (self.0 - 1)
    }

    /// Largest positive two's-complement value (`0x7F` at width 8).
    #[inline(always)]
    pub const fn signed_max(self) -> u32 {
        self.sign_bit() - 1
    }

    /// Most negative two's-complement value (`0x80` at width 8).
    #[inline(always)]
    pub const fn signed_min(self) -> u32 {
        self.sign_bit()
    }

    /// Truncates a raw arithmetic result to the width.
    ///
    /// Negative raw values wrap as two's complement, so `-7` at width 8 is `0xF9`.
    #[inline(always)]
    pub const fn truncate(self, raw: i64) -> u32 {
        (raw as u64 & self.mask() as u64) as u32
    }

    /// Returns true if `value` is a representable unsigned operand.
    pub const fn contains(self, value: i64) -> bool {
        value >= 0 && value <= self.mask() as i64
    }

    /// Returns true if the most significant bit of `word` is set.
    #[inline(always)]
    pub const fn is_negative(self, word: u32) -> bool {
        word & self.sign_bit() != 0
    }

    /// Interprets a masked word as a two's-complement signed value.
    pub const fn to_signed(self, word: u32) -> i64 {
        let word = (word & self.mask()) as i64;
        if word & self.sign_bit() as i64 != 0 {
            word - (1_i64 << self.0)
        } else {
            word
        }
    }

    /// Number of hex digits needed to print a full word.
    pub const fn hex_digits(self) -> usize {
        self.0.div_ceil(4) as usize
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::W8
    }
}

impl TryFrom<u32> for Width {
    type Error = AluError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
