//! ALU Instruction Set.
//!
//! Contains the opcode assignments and the closed operation enumeration
//! selected by the ALU's 5-bit opcode field.
//!
//! # Operation Groups
//!
//! * Arithmetic: ADD, SUB, INC_A, DEC_A.
//! * Shift: LSL, LSR, ASR.
//! * Logic: NAND, NOR, XOR, PASS_A, PASS_B, AND, OR, XNOR, NOT_A, NOT_B.
//! * Special: REV_A, CMP.

/// Opcode constants (one per operation).
pub mod opcodes;

/// Operation enumeration, names, opcode strings, and metadata.
pub mod operation;

pub use operation::{Category, Operation};
