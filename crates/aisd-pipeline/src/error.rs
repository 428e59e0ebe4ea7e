use thiserror::Error;

use aisd_action::ActionError;
use aisd_core::{AisdError, SequenceId};
use aisd_grid::GridError;
use aisd_traj::TrajError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] AisdError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("trajectory error: {0}")]
    Traj(#[from] TrajError),

    /// Action inference hit a broken invariant for one trajectory.
    #[error("logic error in sequence {sequence_id}: {source}")]
    Logic {
        sequence_id: SequenceId,
        #[source]
        source:      ActionError,
    },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
