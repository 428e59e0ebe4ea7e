//! Error types for aisd-io.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading input, loading config, or writing output.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A malformed input row.  `row` is 1-based and excludes the header.
    #[error("{path}: row {row}: {reason}")]
    Data { path: PathBuf, row: u64, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
