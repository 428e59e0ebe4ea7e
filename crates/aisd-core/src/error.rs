//! Core error type.
//!
//! Only configuration problems are detected in `aisd-core`.  Data errors
//! belong to the reader (`aisd_io::IoError::Data`) and logic errors to action
//! inference (`aisd_action::ActionError`).

use thiserror::Error;

/// Errors raised while validating run options and grid configuration.
#[derive(Debug, Error)]
pub enum AisdError {
    /// Invalid run options or grid configuration.  Fatal, never retried.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Shorthand result type for option and configuration checks.
pub type AisdResult<T> = Result<T, AisdError>;
