//! # Errors
//!
//! Typed failures for the core. Loading distinguishes "no save file yet"
//! from "save file is unusable" so the session can pick its own policy.

use std::path::PathBuf;

use thiserror::Error;

/// Caller misuse. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("counter count must be positive, got {0}")]
    NonPositiveCount(i32),

    #[error("storage path cannot be empty or whitespace")]
    BlankPath,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// No previous session has been saved at this path.
    #[error("no save file at {path}")]
    NotFound { path: PathBuf },

    #[error("save file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("I/O error while {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Failures that end a running session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to draw frame: {0}")]
    Render(#[source] std::io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
