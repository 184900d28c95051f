//! Error types for Orchard

use thiserror::Error;

/// Result type alias using Orchard Error
pub type Result<T> = std::result::Result<T, Error>;

/// Orchard error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
