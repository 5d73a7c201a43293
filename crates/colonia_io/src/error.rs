//! Error types for colonia_io crate.
//!
//! Wraps file system, JSON and parse failures together with the core
//! [`SimError`] raised while validating what was loaded.

use colonia_core::SimError;
use thiserror::Error;

/// Main error type for colonia_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed tabular input
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Loaded data rejected by the simulation core
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for colonia_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a new parse error.
    #[must_use]
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
