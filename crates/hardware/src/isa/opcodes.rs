//! ALU Opcodes.
//!
//! Defines the 5-bit opcode presented on the ALU select lines for each
//! operation. Opcodes are dense from `0b00000` to `0b10010`.

/// Addition (A + B).
pub const OP_ADD: u8 = 0b00000;
/// Subtraction (A - B).
pub const OP_SUB: u8 = 0b00001;
/// Increment A (A + 1).
pub const OP_INC_A: u8 = 0b00010;
/// Decrement A (A - 1).
pub const OP_DEC_A: u8 = 0b00011;

/// Logical shift left by one.
pub const OP_LSL: u8 = 0b00100;
/// Logical shift right by one.
pub const OP_LSR: u8 = 0b00101;
/// Arithmetic (sign-preserving) shift right by one.
pub const OP_ASR: u8 = 0b00110;
/// Bit reversal of A.
pub const OP_REV_A: u8 = 0b00111;

/// NOT (A AND B).
pub const OP_NAND: u8 = 0b01000;
/// NOT (A OR B).
pub const OP_NOR: u8 = 0b01001;
/// A XOR B.
pub const OP_XOR: u8 = 0b01010;
/// Pass A through.
pub const OP_PASS_A: u8 = 0b01011;
/// Pass B through.
pub const OP_PASS_B: u8 = 0b01100;
/// A AND B.
pub const OP_AND: u8 = 0b01101;
/// A OR B.
pub const OP_OR: u8 = 0b01110;
/// NOT (A XOR B).
pub const OP_XNOR: u8 = 0b01111;

/// Compare (A - B, flags only).
pub const OP_CMP: u8 = 0b10000;
/// Invert A.
pub const OP_NOT_A: u8 = 0b10001;
/// Invert B.
pub const OP_NOT_B: u8 = 0b10010;

/// Highest assigned opcode.
pub const OP_MAX: u8 = OP_NOT_B;
