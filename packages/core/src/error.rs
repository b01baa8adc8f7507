//! Error types for the core layer.

use thiserror::Error;

use crate::path::Path;

/// Errors raised by the fallible core operations.
///
/// Everything not listed here is total: malformed input produces a
/// degraded but defined result instead of an error.
#[derive(Debug, Error)]
pub enum Error {
    /// `set` without `create` hit a missing intermediate container.
    #[error("path provided does not exist: '{path}' (missing segment '{segment}')")]
    PathNotFound { path: Path, segment: String },

    /// `set` tried to walk into or assign onto a scalar value.
    #[error("cannot traverse non-container value at segment '{segment}' of '{path}'")]
    NotAContainer { path: Path, segment: String },

    /// An array was addressed with a segment that is not a usable index.
    #[error("invalid array index '{segment}' in '{path}': {message}")]
    InvalidIndex {
        path: Path,
        segment: String,
        message: String,
    },

    /// The argument's keys cannot be enumerated.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
