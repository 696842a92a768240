//! Error types for preference storage.

use thiserror::Error;

/// Result type for preference store operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors raised by a [`PreferenceStore`](crate::PreferenceStore).
#[derive(Debug, Error)]
pub enum PrefsError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store contents are not a JSON object of strings.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store cannot be used at all (disabled, quota exceeded, read-only).
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}
