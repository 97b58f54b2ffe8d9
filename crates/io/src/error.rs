//! Error types for bore-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the bore-io crate.
///
/// Write failures are reported as-is; nothing is retried and no partial
/// document is cleaned up.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a calendar document does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a filesystem failure while reading or writing a document.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps a JSON encoding or decoding failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serde_json failure.
        reason: String,
    },
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}
