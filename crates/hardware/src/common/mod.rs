//! Common utilities and types used throughout the ALU golden model.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the model and the harness. It includes:
//! 1. **Constants:** Datapath width limits and opcode field sizes.
//! 2. **Width:** A validated bit-width type with derived masks.
//! 3. **Error Handling:** Evaluation errors, vector-file errors, and schema violations.

/// Datapath-wide constants.
pub mod constants;

/// Error types for evaluation and vector handling.
pub mod error;

/// Validated datapath width.
pub mod width;

pub use constants::{DEFAULT_WIDTH, MAX_WIDTH, OPERATION_COUNT};
pub use error::{AluError, SchemaViolation, VectorError};
pub use width::Width;
