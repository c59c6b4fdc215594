//! History store error types.

use std::path::PathBuf;
use thiserror::Error;

/// History store error.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// File I/O error.
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored document is not valid JSON for its record type.
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {record}")]
    Serialize {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The temp file was written but could not replace the target.
    #[error("failed to replace {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HistoryError {
    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { operation, .. } if *operation == "read" => {
                Some("Check that the data directory is readable.")
            }
            Self::Io { .. } | Self::AtomicWriteFailed { .. } => {
                Some("Check that you have permission to write to the data directory.")
            }
            Self::Parse { .. } => Some("Delete or repair the file; it will be recreated."),
            Self::Serialize { .. } => None,
        }
    }
}

/// Result type alias for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
