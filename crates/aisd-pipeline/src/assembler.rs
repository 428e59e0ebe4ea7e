//! Turns one normalized trajectory into its output rows.

use aisd_action::ActionModel;
use aisd_core::TransitionRecord;
use aisd_grid::GridParameters;
use aisd_traj::NormalizedTrajectory;

use crate::{PipelineError, PipelineResult};

/// Runs an [`ActionModel`] over every consecutive state pair of a trajectory
/// and closes it with the terminal row.
///
/// Coordinates (when enabled) are rounded to `precision` decimal places
/// before they leave the assembler.
#[derive(Debug, Clone)]
pub struct TransitionAssembler<A: ActionModel> {
    grid:          GridParameters,
    actions:       A,
    append_coords: bool,
    precision:     u32,
}

impl<A: ActionModel> TransitionAssembler<A> {
    pub fn new(grid: GridParameters, actions: A, append_coords: bool, precision: u32) -> Self {
        Self { grid, actions, append_coords, precision }
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// Rows for `trajectory`: the inferred steps of each state pair in order,
    /// then `(last_state, -1, -1)` carrying the final raw coordinate.
    pub fn assemble(&self, trajectory: &NormalizedTrajectory) -> PipelineResult<Vec<TransitionRecord>> {
        let sequence_id = trajectory.sequence_id;
        let mut rows = Vec::with_capacity(trajectory.points.len());

        for pair in trajectory.points.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            let origin = self.append_coords.then_some(prev.coord);

            let steps = self
                .actions
                .infer(&self.grid, prev.state, cur.state, origin)
                .map_err(|source| PipelineError::Logic { sequence_id, source })?;

            rows.extend(steps.into_iter().map(|s| TransitionRecord {
                sequence_id,
                from_state: s.from,
                action:     s.action,
                to_state:   s.to,
                coord:      s.coord.map(|c| c.rounded(self.precision)),
            }));
        }

        if let Some(last) = trajectory.points.last() {
            let coord = self.append_coords.then(|| last.coord.rounded(self.precision));
            rows.push(TransitionRecord::terminal(sequence_id, last.state, coord));
        }

        Ok(rows)
    }
}
