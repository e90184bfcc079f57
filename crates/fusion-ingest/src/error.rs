//! Error types for reference data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading reference files.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Base directory not found or not a directory.
    #[error("reference directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Reference file not found.
    #[error("reference file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a reference file.
    #[error("failed to read reference file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for reference loading operations.
pub type Result<T> = std::result::Result<T, ReferenceError>;
