//! Grid-model error type.

use thiserror::Error;

/// Errors produced by `aisd-grid`.  All of them are configuration errors:
/// fatal, surfaced before any state is assigned.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid_len must be positive and finite, got {0}")]
    NonPositiveGridLen(f64),

    #[error("invalid {axis} bounds: min {min} is not below max {max}")]
    InvalidBounds {
        axis: &'static str,
        min:  f64,
        max:  f64,
    },

    #[error("cannot infer {0} bounds: no coordinates observed")]
    NoCoordinates(&'static str),
}

pub type GridResult<T> = Result<T, GridError>;
