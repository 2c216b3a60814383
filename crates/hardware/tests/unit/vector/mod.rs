//! # Vector Tests

/// File discovery and loading.
pub mod loader;

/// Vector record serde layout and flag expectations.
pub mod records;
