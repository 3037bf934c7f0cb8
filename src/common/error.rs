//! Unified error types for the deck generator.
//!
//! All failures propagate unchanged to the caller; there is no retry or
//! partial-output cleanup anywhere in the crate.

use thiserror::Error;

/// Main error type for deck generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid document structure or configuration
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),
}

/// Result type for deck generation.
pub type Result<T> = std::result::Result<T, Error>;

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}
