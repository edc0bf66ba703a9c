//! Error types for the journal and offline cache.

use thiserror::Error;

/// Main error type for journal, quote, and cache operations.
#[derive(Debug, Error)]
pub enum ReframeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid cache entry format: {0}")]
    InvalidFormat(String),

    #[error("Checksum mismatch: expected {expected}, got {got}")]
    ChecksumMismatch { expected: u32, got: u32 },

    #[error("Fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("Index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Clipboard unavailable: both write paths failed")]
    ClipboardUnavailable,

    #[error("No install prompt is currently retained")]
    InstallUnavailable,
}

impl From<serde_json::Error> for ReframeError {
    fn from(e: serde_json::Error) -> Self {
        ReframeError::Serialization(e.to_string())
    }
}

/// Result type for journal, quote, and cache operations.
pub type Result<T> = std::result::Result<T, ReframeError>;
