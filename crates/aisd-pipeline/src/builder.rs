//! Fluent builder for constructing a [`Pipeline`].

use aisd_action::{ActionModel, ActionPolicy};
use aisd_core::{GridConfig, RunOptions};
use aisd_grid::BoundingBoxFilter;

use crate::{Pipeline, PipelineResult};

/// Fluent builder for [`Pipeline<A>`].
///
/// # Required inputs
///
/// - [`RunOptions`] — bounds flags, `min_states`, policy flags, output flags
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                              |
/// |----------------|------------------------------------------------------|
/// | `.grid(g)`     | `GridConfig::default()`                              |
/// | `.actions(m)`  | `ActionPolicy::from_options(&options)`               |
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = PipelineBuilder::new(options)
///     .grid(grid_config)
///     .build()?;
/// ```
pub struct PipelineBuilder<A: ActionModel> {
    options: RunOptions,
    grid:    GridConfig,
    actions: A,
}

impl PipelineBuilder<ActionPolicy> {
    /// Start from `options`; the action policy is derived from its
    /// `interp_actions` / `allow_diag` flags.
    pub fn new(options: RunOptions) -> Self {
        let actions = ActionPolicy::from_options(&options);
        Self {
            options,
            grid: GridConfig::default(),
            actions,
        }
    }
}

impl<A: ActionModel + Clone> PipelineBuilder<A> {
    /// Supply the fixed bounds (used on bounded axes) and the cell size.
    pub fn grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Replace the action model chosen from the options.
    pub fn actions<B: ActionModel + Clone>(self, actions: B) -> PipelineBuilder<B> {
        PipelineBuilder {
            options: self.options,
            grid:    self.grid,
            actions,
        }
    }

    /// Validate options and grid configuration and return a ready-to-run
    /// [`Pipeline`].
    pub fn build(self) -> PipelineResult<Pipeline<A>> {
        self.options.validate()?;
        self.grid.validate(&self.options)?;

        let filter = BoundingBoxFilter::new(&self.grid, &self.options);

        Ok(Pipeline {
            options:     self.options,
            grid_config: self.grid,
            actions:     self.actions,
            filter,
        })
    }
}
