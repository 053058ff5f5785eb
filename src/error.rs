//! Error types for the shannon-map entropy toolkit.
//!
//! Library operations return [`MapError`] through the [`Result`] alias; the
//! command-line binary wraps these in `anyhow` for top-level reporting.

use crate::pipeline::BatchReport;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shannon-map operations.
#[derive(Debug, Error)]
pub enum MapError {
    /// Input file could not be opened or decoded as an image
    #[error("Failed to load image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A file could not be read, created or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed in-memory input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A fail-fast batch stopped early; `report` holds the files seen so far
    #[error("Batch aborted: {failed} of {total} file(s) failed")]
    Batch {
        failed: usize,
        total: usize,
        report: Box<BatchReport>,
    },
}

/// Result type alias for shannon-map operations
pub type Result<T> = std::result::Result<T, MapError>;
