//! Error types for the razzie core library.
//!
//! Uses `thiserror` for public API error types with structured variants
//! covering ingestion and configuration. The interval analyzer itself has
//! no error surface: every input, including an empty dataset, maps to a
//! well-defined result.

use std::path::PathBuf;

/// Top-level error type for the razzie core library.
#[derive(Debug, thiserror::Error)]
pub enum RazzieError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from loading the movie dataset.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed record at line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("Invalid year '{value}' at line {line}")]
    InvalidYear { line: u64, value: String },
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// A type alias for results using the top-level `RazzieError`.
pub type Result<T> = std::result::Result<T, RazzieError>;
