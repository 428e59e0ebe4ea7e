use thiserror::Error;

use aisd_core::StateId;

use crate::Heading;

/// Logic errors raised by action inference.  Each one points at a bug in
/// upstream normalization and is not recoverable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("self-transition at state {0} reached action inference")]
    SelfTransition(StateId),

    /// The policy has no code for a move it was asked to take.
    #[error("{policy} policy has no action for heading {heading:?}")]
    UndefinedAction {
        heading: Heading,
        policy:  &'static str,
    },
}

pub type ActionResult<T> = Result<T, ActionError>;
