//! Error types for pubspec-pin.
//!
//! All operations return `Result<T>` which aliases `Result<T, PinError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from discovery, scanning and committing manifests.
#[derive(Debug, Error)]
pub enum PinError {
    /// Manifest could not be read (missing, unreadable, not UTF-8).
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rewritten manifest could not be written back.
    ///
    /// The original file is left untouched when this is returned.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed `NAME=VERSION` override.
    #[error("Invalid pin '{0}': {1}")]
    InvalidPin(String, String),

    /// One or more manifests failed under `--strict`.
    #[error("{0} manifest(s) could not be processed")]
    Failures(usize),
}

/// Result type alias for pubspec-pin operations.
pub type Result<T> = std::result::Result<T, PinError>;
