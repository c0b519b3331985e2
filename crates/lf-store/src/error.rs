//! Storage error types for lf-store.

use std::path::PathBuf;

use lf_core::errors::CoreError;
use thiserror::Error;

/// Errors from persistence and board operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation or authorization failure raised by lf-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A stored collection could not be deserialized. Fatal at startup.
    #[error("Stored collection '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized.
    #[error("Failed to serialize collection '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a stored value failed.
    #[error("Failed to read '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a stored value failed (disk full, permissions, ...).
    #[error("Failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The photo file could not be read.
    #[error("Failed to read photo {path}: {source}")]
    PhotoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The photo file exceeds the configured size limit.
    #[error("Photo {path} is {size} bytes, limit is {max}")]
    PhotoTooLarge { path: PathBuf, size: u64, max: u64 },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Whether this is a failure to persist, which the front end reports
    /// with a generic notice rather than the raw error.
    #[must_use]
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Serialize { .. })
    }
}
