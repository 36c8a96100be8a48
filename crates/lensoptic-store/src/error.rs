//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the backing-file path                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI displays a user-friendly message                                   │
//! │                                                                         │
//! │  Domain failures (duplicate name, bad index, ...) pass through         │
//! │  unchanged as StoreError::Core.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use lensoptic_core::CoreError;

/// Persistence operation errors.
///
/// A failed write never corrupts the prior file content: collections are
/// replaced via temp-file-then-rename, so the backing file either keeps its
/// old records or holds the complete new set.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not decode as a record collection.
    ///
    /// ## When This Occurs
    /// - File edited by hand
    /// - Truncated by an external process
    #[error("Invalid collection in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be serialized.
    #[error("Failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),

    /// Domain failure detected before any write (duplicate name, missing
    /// product, index out of range, validation).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates an Io error carrying the backing-file path.
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a Decode error carrying the backing-file path.
    pub(crate) fn decode(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        StoreError::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_path() {
        let err = StoreError::io(
            "/data/products.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/data/products.json"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_core_error_passes_through() {
        let err: StoreError = CoreError::DuplicateName("Frame A".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Duplicate product name: 'Frame A' already exists"
        );
    }
}
