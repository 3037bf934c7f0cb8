//! Shared utilities used across the crate.

/// Error types
pub mod error;

/// XML escaping helpers
pub mod xml;

pub use error::{Error, Result};
