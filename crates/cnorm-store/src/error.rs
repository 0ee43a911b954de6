//! Store error types.
//!
//! Every failure here means the alias dictionary is unavailable. Callers
//! cannot match anything without it, so these errors are propagated
//! rather than folded into a match outcome.

use std::path::PathBuf;
use thiserror::Error;

/// Alias store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} alias store: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `open` was called on a path with no store file.
    #[error("Alias store not found: {path}")]
    Missing { path: PathBuf },

    /// The file exists but is not an alias store.
    #[error("Invalid alias store format: {path}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// Store file written by a newer format version.
    #[error("Alias store version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    #[error("Failed to serialize alias store")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Temp file was written but could not be renamed over the target.
    #[error("Failed to complete alias store write")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the alias store at {}", operation, path.display())
            }
            Self::Missing { path } => {
                format!("No alias store exists at {}", path.display())
            }
            Self::InvalidFormat { path, reason } => {
                format!(
                    "The file at {} is not a valid alias store: {}",
                    path.display(),
                    reason
                )
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => {
                format!(
                    "This alias store was written by a newer version \
                    (store version {}, this version supports up to {}).",
                    found, max_supported
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while encoding the alias dictionary.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the alias store to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the store exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Missing { .. } => {
                Some("Create the store first or point the session at an existing file.".into())
            }
            Self::InvalidFormat { .. } => Some("Restore the store from a backup.".into()),
            Self::UnsupportedVersion { .. } => Some("Upgrade to a newer release.".into()),
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or move the store to a writable location.".into())
            }
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
