//! The batch pipeline.

use tracing::{debug, info};

use aisd_action::ActionModel;
use aisd_core::{GridConfig, RawRecord, RunOptions, TransitionRecord};
use aisd_grid::{infer_bounds, BoundingBoxFilter, GridParameters};
use aisd_traj::{group_records, NormalizeReport, NormalizedTrajectory, Normalizer};

use crate::{PipelineResult, TransitionAssembler, TransitionSink};

/// Counters and the frozen grid from one [`Pipeline::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records_in:       usize,
    /// Records dropped by the fixed-bounds filter.
    pub records_filtered: usize,
    pub grid:             GridParameters,
    pub normalize:        NormalizeReport,
    /// Non-terminal rows emitted.
    pub transitions:      usize,
    /// All rows emitted, terminal rows included.
    pub rows:             usize,
}

/// A validated, ready-to-run discretization pipeline.
///
/// Build with [`PipelineBuilder`][crate::PipelineBuilder].
pub struct Pipeline<A: ActionModel> {
    pub(crate) options:     RunOptions,
    pub(crate) grid_config: GridConfig,
    pub(crate) actions:     A,
    pub(crate) filter:      BoundingBoxFilter,
}

impl<A: ActionModel + Clone> Pipeline<A> {
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// Drop records outside the fixed bounds of every bounded axis.
    pub fn filter_records(&self, records: Vec<RawRecord>) -> Vec<RawRecord> {
        if !self.filter.is_active() {
            return records;
        }
        records.into_iter().filter(|r| self.filter.keeps(r.coord)).collect()
    }

    /// Phase ②: scan `records` once and freeze the grid.
    pub fn infer_grid(&self, records: &[RawRecord]) -> PipelineResult<GridParameters> {
        let grid = infer_bounds(records.iter().map(|r| r.coord), &self.grid_config, &self.options)?;
        Ok(grid)
    }

    /// Phases ③ and ④ for an already-frozen grid.  Returns one row list per
    /// surviving trajectory, in sequence-id order.
    pub fn discretize(
        &self,
        grid:    GridParameters,
        records: Vec<RawRecord>,
    ) -> PipelineResult<(Vec<Vec<TransitionRecord>>, NormalizeReport)> {
        let normalizer = Normalizer::new(grid, self.options.min_states)?;
        let (trajectories, report) = normalizer.normalize(group_records(records));
        info!(
            entities = report.entities_seen,
            kept = report.entities_kept,
            self_transitions = report.self_transitions,
            "trajectories normalized"
        );

        let assembler = TransitionAssembler::new(
            grid,
            self.actions.clone(),
            self.options.append_coords,
            self.options.coord_precision,
        );
        let rows = assemble_all(&assembler, &trajectories)?;
        Ok((rows, report))
    }

    /// Run every phase over `records` and stream the result into `sink`.
    ///
    /// Nothing reaches `sink` (not even `on_grid`) if any phase fails.
    pub fn run<S: TransitionSink>(&self, records: Vec<RawRecord>, sink: &mut S) -> PipelineResult<RunSummary> {
        let records_in = records.len();
        let records = self.filter_records(records);
        let records_filtered = records_in - records.len();
        if records_filtered > 0 {
            debug!(records_filtered, "records outside fixed bounds dropped");
        }

        let grid = self.infer_grid(&records)?;
        info!(
            min_lon = grid.min_lon,
            max_lon = grid.max_lon,
            min_lat = grid.min_lat,
            max_lat = grid.max_lat,
            num_cols = grid.num_cols,
            num_rows = grid.num_rows(),
            "grid frozen"
        );

        let (per_trajectory, normalize) = self.discretize(grid, records)?;

        sink.on_grid(&grid);
        let mut rows = 0;
        for trajectory_rows in &per_trajectory {
            rows += trajectory_rows.len();
            sink.on_trajectory(trajectory_rows);
        }
        sink.on_finish();

        let summary = RunSummary {
            records_in,
            records_filtered,
            grid,
            normalize,
            transitions: rows - per_trajectory.len(),
            rows,
        };
        info!(
            policy = self.actions.name(),
            transitions = summary.transitions,
            rows = summary.rows,
            "transitions emitted"
        );
        Ok(summary)
    }
}

fn assemble_all<A: ActionModel>(
    assembler:    &TransitionAssembler<A>,
    trajectories: &[NormalizedTrajectory],
) -> PipelineResult<Vec<Vec<TransitionRecord>>> {
    #[cfg(not(feature = "parallel"))]
    {
        trajectories.iter().map(|t| assembler.assemble(t)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        trajectories.par_iter().map(|t| assembler.assemble(t)).collect()
    }
}
