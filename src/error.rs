//! Error types for the frame knowledge base tooling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning a source directory for frame sets
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

/// Top-level errors for the build pipelines
#[derive(Debug, Error)]
pub enum KbError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("No frame directories found in {0}. Extract frames from your videos first.")]
    NoFrameDirectories(PathBuf),

    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl KbError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KbError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for KbError {
    fn from(err: config::ConfigError) -> Self {
        KbError::Config(err.to_string())
    }
}
