//! # Operation Set Tests
