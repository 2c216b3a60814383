//! Global Datapath Constants.
//!
//! This module defines the fixed parameters of the ALU golden model. It includes:
//! 1. **Width Constants:** Default and maximum datapath width in bits.
//! 2. **Opcode Constants:** Opcode field width and the size of the operation set.
//! 3. **Generation Limits:** Upper bound for exhaustive operand sweeps.

/// Datapath width of the physical ALU in bits.
pub const DEFAULT_WIDTH: u32 = 8;

/// Widest datapath the model accepts.
///
/// Raw arithmetic is carried in `i64`, so any width up to 32 keeps the
/// carry-out and borrow visible before masking.
pub const MAX_WIDTH: u32 = 32;

/// Number of bits in the opcode field (`"00000"`..=`"10010"`).
pub const OPCODE_BITS: usize = 5;

/// Number of operations implemented by the ALU.
pub const OPERATION_COUNT: usize = 19;

/// Widest datapath for which an exhaustive `2^W x 2^W` sweep is generated.
///
/// At 12 bits a single operation already produces 16M vectors.
pub const EXHAUSTIVE_MAX_WIDTH: u32 = 12;

/// Alternating-bit pattern `0b0101...` used for boundary vectors.
pub const PATTERN_01: u32 = 0x5555_5555;

/// Alternating-bit pattern `0b1010...` used for boundary vectors.
pub const PATTERN_10: u32 = 0xAAAA_AAAA;
