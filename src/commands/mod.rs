//! CLI command implementations.

/// Convert command implementation.
pub mod convert;
