//! ALU operation enumeration.
//!
//! This module defines the closed set of 19 operations and every way of naming
//! one. It provides:
//! 1. **Encoding:** The total, bijective mapping between operations, canonical names,
//!    and 5-bit opcode strings.
//! 2. **Parsing:** Case- and space-insensitive name lookup (including the compact
//!    command-line aliases) and opcode-string parsing.
//! 3. **Metadata:** Category, expression, and description used by listings and reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::opcodes as op;
use crate::common::constants::{OPCODE_BITS, OPERATION_COUNT};
use crate::common::error::AluError;

/// One of the 19 operations selectable on the ALU opcode lines.
///
/// Variants are declared in opcode order, so the derived `Ord` sorts by opcode.
/// Serializes as the canonical name (`"INC_A"`, `"PASS_B"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// A + B.
    Add,
    /// A - B.
    Sub,
    /// A + 1.
    IncA,
    /// A - 1.
    DecA,
    /// A << 1.
    Lsl,
    /// A >> 1 (zero fill).
    Lsr,
    /// A >> 1 (sign fill).
    Asr,
    /// Bit-reversed A.
    RevA,
    /// ~(A & B).
    Nand,
    /// ~(A | B).
    Nor,
    /// A ^ B.
    Xor,
    /// A.
    PassA,
    /// B.
    PassB,
    /// A & B.
    And,
    /// A | B.
    Or,
    /// ~(A ^ B).
    Xnor,
    /// Flags of A - B, result 0.
    Cmp,
    /// ~A.
    NotA,
    /// ~B.
    NotB,
}

/// Functional group an operation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Adder-based operations.
    Arithmetic,
    /// Bitwise gates and pass-throughs.
    Logic,
    /// Single-bit shifts.
    Shift,
    /// Bit reversal and compare.
    Special,
}

impl Category {
    /// Categories in listing order.
    pub const ALL: [Self; 4] = [Self::Arithmetic, Self::Logic, Self::Shift, Self::Special];

    /// Display name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arithmetic => "Arithmetic",
            Self::Logic => "Logic",
            Self::Shift => "Shift",
            Self::Special => "Special",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Operation {
    /// Every operation in opcode order.
    pub const ALL: [Self; OPERATION_COUNT] = [
        Self::Add,
        Self::Sub,
        Self::IncA,
        Self::DecA,
        Self::Lsl,
        Self::Lsr,
        Self::Asr,
        Self::RevA,
        Self::Nand,
        Self::Nor,
        Self::Xor,
        Self::PassA,
        Self::PassB,
        Self::And,
        Self::Or,
        Self::Xnor,
        Self::Cmp,
        Self::NotA,
        Self::NotB,
    ];

    /// Returns the numeric opcode.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Add => op::OP_ADD,
            Self::Sub => op::OP_SUB,
            Self::IncA => op::OP_INC_A,
            Self::DecA => op::OP_DEC_A,
            Self::Lsl => op::OP_LSL,
            Self::Lsr => op::OP_LSR,
            Self::Asr => op::OP_ASR,
            Self::RevA => op::OP_REV_A,
            Self::Nand => op::OP_NAND,
            Self::Nor => op::OP_NOR,
            Self::Xor => op::OP_XOR,
            Self::PassA => op::OP_PASS_A,
            Self::PassB => op::OP_PASS_B,
            Self::And => op::OP_AND,
            Self::Or => op::OP_OR,
            Self::Xnor => op::OP_XNOR,
            Self::Cmp => op::OP_CMP,
            Self::NotA => op::OP_NOT_A,
            Self::NotB => op::OP_NOT_B,
        }
    }

    /// Looks up an operation by numeric opcode.
    pub const fn from_opcode(code: u8) -> Option<Self> {
        match code {
            op::OP_ADD => Some(Self::Add),
            op::OP_SUB => Some(Self::Sub),
            op::OP_INC_A => Some(Self::IncA),
            op::OP_DEC_A => Some(Self::DecA),
            op::OP_LSL => Some(Self::Lsl),
            op::OP_LSR => Some(Self::Lsr),
            op::OP_ASR => Some(Self::Asr),
            op::OP_REV_A => Some(Self::RevA),
            op::OP_NAND => Some(Self::Nand),
            op::OP_NOR => Some(Self::Nor),
            op::OP_XOR => Some(Self::Xor),
            op::OP_PASS_A => Some(Self::PassA),
            op::OP_PASS_B => Some(Self::PassB),
            op::OP_AND => Some(Self::And),
            op::OP_OR => Some(Self::Or),
            op::OP_XNOR => Some(Self::Xnor),
            op::OP_CMP => Some(Self::Cmp),
            op::OP_NOT_A => Some(Self::NotA),
            op::OP_NOT_B => Some(Self::NotB),
            _ => None,
        }
    }

    /// Returns the 5-character binary opcode string (`"00111"` for REV_A).
    pub fn opcode_str(self) -> String {
        format!("{:0width$b}", self.opcode(), width = OPCODE_BITS)
    }

    /// Reads the numeric value of a binary opcode string without checking
    /// that an operation is assigned to it.
    ///
    /// Accepts exactly [`OPCODE_BITS`] binary digits, optionally prefixed with
    /// `0b`/`0B`; surrounding whitespace is ignored.
    pub fn parse_opcode_bits(raw: &str) -> Option<u8> {
        let trimmed = raw.trim();
        let bits = trimmed
            .strip_prefix("0b")
            .or_else(|| trimmed.strip_prefix("0B"))
            .unwrap_or(trimmed);
        if bits.len() != OPCODE_BITS || !bits.bytes().all(|c| c == b'0' || c == b'1') {
            return None;
        }
        u8::from_str_radix(bits, 2).ok()
    }

    /// Parses a binary opcode string.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::UnknownOpcode`] if the string is malformed (see
    /// [`Operation::parse_opcode_bits`]) or names an opcode above [`op::OP_MAX`].
    pub fn from_opcode_str(raw: &str) -> Result<Self, AluError> {
        let unknown = || AluError::UnknownOpcode(raw.to_string());
        match Self::parse_opcode_bits(raw) {
            Some(code) if code <= op::OP_MAX => Self::from_opcode(code).ok_or_else(unknown),
            _ => Err(unknown()),
        }
    }

    /// Returns the canonical name (`"ADD"`, `"INC_A"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::IncA => "INC_A",
            Self::DecA => "DEC_A",
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Asr => "ASR",
            Self::RevA => "REV_A",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::PassA => "PASS_A",
            Self::PassB => "PASS_B",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xnor => "XNOR",
            Self::Cmp => "CMP",
            Self::NotA => "NOT_A",
            Self::NotB => "NOT_B",
        }
    }

    /// Normalizes a symbolic name: trims, uppercases, and collapses runs of
    /// whitespace, `-` or `_` into a single `_` (`"pass a"` becomes `"PASS_A"`).
    pub fn normalize_name(raw: &str) -> String {
        raw.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
            .to_ascii_uppercase()
    }

    /// Looks up an operation by symbolic name.
    ///
    /// Canonical names and the compact aliases `INC`, `DEC`, `REV`, `PASSA`,
    /// `PASSB`, `NOTA`, `NOTB` are accepted after normalization.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::UnsupportedOperation`] if the name is not recognised.
    pub fn from_name(raw: &str) -> Result<Self, AluError> {
        let op = match Self::normalize_name(raw).as_str() {
            "ADD" => Self::Add,
            "SUB" => Self::Sub,
            "INC_A" | "INC" => Self::IncA,
            "DEC_A" | "DEC" => Self::DecA,
            "LSL" => Self::Lsl,
            "LSR" => Self::Lsr,
            "ASR" => Self::Asr,
            "REV_A" | "REV" => Self::RevA,
            "NAND" => Self::Nand,
            "NOR" => Self::Nor,
            "XOR" => Self::Xor,
            "PASS_A" | "PASSA" => Self::PassA,
            "PASS_B" | "PASSB" => Self::PassB,
            "AND" => Self::And,
            "OR" => Self::Or,
            "XNOR" => Self::Xnor,
            "CMP" => Self::Cmp,
            "NOT_A" | "NOTA" => Self::NotA,
            "NOT_B" | "NOTB" => Self::NotB,
            _ => return Err(AluError::UnsupportedOperation(raw.to_string())),
        };
        Ok(op)
    }

    /// Functional group of the operation.
    pub const fn category(self) -> Category {
        match self {
            Self::Add | Self::Sub | Self::IncA | Self::DecA => Category::Arithmetic,
            Self::Lsl | Self::Lsr | Self::Asr => Category::Shift,
            Self::RevA | Self::Cmp => Category::Special,
            Self::Nand
            | Self::Nor
            | Self::Xor
            | Self::PassA
            | Self::PassB
            | Self::And
            | Self::Or
            | Self::Xnor
            | Self::NotA
            | Self::NotB => Category::Logic,
        }
    }

    /// Short algebraic expression for listings.
    pub const fn expression(self) -> &'static str {
        match self {
            Self::Add => "A + B",
            Self::Sub => "A - B",
            Self::IncA => "A + 1",
            Self::DecA => "A - 1",
            Self::Lsl => "A << 1",
            Self::Lsr => "A >> 1",
            Self::Asr => "A >> 1 (sign)",
            Self::RevA => "reverse(A)",
            Self::Nand => "~(A & B)",
            Self::Nor => "~(A | B)",
            Self::Xor => "A ^ B",
            Self::PassA => "A",
            Self::PassB => "B",
            Self::And => "A & B",
            Self::Or => "A | B",
            Self::Xnor => "~(A ^ B)",
            Self::Cmp => "A - B (flags)",
            Self::NotA => "~A",
            Self::NotB => "~B",
        }
    }

    /// One-line description for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Sub => "Subtraction (2's complement)",
            Self::IncA => "Increment A",
            Self::DecA => "Decrement A",
            Self::Lsl => "Logical shift left",
            Self::Lsr => "Logical shift right",
            Self::Asr => "Arithmetic shift right",
            Self::RevA => "Reverse bit order",
            Self::Nand => "NAND gate",
            Self::Nor => "NOR gate",
            Self::Xor => "XOR gate",
            Self::PassA => "Pass A through",
            Self::PassB => "Pass B through",
            Self::And => "AND gate",
            Self::Or => "OR gate",
            Self::Xnor => "XNOR gate",
            Self::Cmp => "Compare (flags only)",
            Self::NotA => "Invert A",
            Self::NotB => "Invert B",
        }
    }

    /// Returns true if the result depends on operand B.
    pub const fn uses_b(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Sub
                | Self::Nand
                | Self::Nor
                | Self::Xor
                | Self::PassB
                | Self::And
                | Self::Or
                | Self::Xnor
                | Self::Cmp
                | Self::NotB
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = AluError;

    /// Parses a symbolic name, falling back to a binary opcode string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).or_else(|err| Self::from_opcode_str(s).map_err(|_| err))
    }
}
