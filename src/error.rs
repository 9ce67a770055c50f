//! Error types for the xmlstream library

use thiserror::Error;

/// Result type alias for xmlstream operations
pub type Result<T> = std::result::Result<T, XmlError>;

/// Main error type for all XML writing operations
#[derive(Error, Debug)]
pub enum XmlError {
    /// An operation was called in a writer state that does not allow it
    #[error("Invalid writer state: {0}")]
    InvalidState(&'static str),

    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
