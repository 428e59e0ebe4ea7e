use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrajError {
    #[error("min_states must be at least 2, got {0}")]
    MinStates(usize),
}

pub type TrajResult<T> = Result<T, TrajError>;
