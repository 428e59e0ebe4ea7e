//! `TransitionSink` trait — hooks for receiving pipeline output.

use aisd_core::TransitionRecord;
use aisd_grid::GridParameters;

/// Receives the frozen grid and the assembled rows of each trajectory.
///
/// All methods are infallible.  Sinks that do I/O store their first error
/// internally and expose it after the run (see `aisd_io::CsvSink`).
pub trait TransitionSink {
    /// Called once, after bounds inference and before any rows.
    fn on_grid(&mut self, _grid: &GridParameters) {}

    /// Called once per surviving trajectory, in sequence-id order.  `rows`
    /// ends with the terminal marker row.
    fn on_trajectory(&mut self, rows: &[TransitionRecord]);

    /// Called once after the last trajectory.
    fn on_finish(&mut self) {}
}

/// A sink that discards everything.
pub struct NoopSink;

impl TransitionSink for NoopSink {
    #[inline(always)]
    fn on_trajectory(&mut self, _rows: &[TransitionRecord]) {}
}

/// Collects rows in memory.  Handy for tests and small batches.
#[derive(Debug, Default)]
pub struct VecSink {
    pub grid:     Option<GridParameters>,
    pub rows:     Vec<TransitionRecord>,
    pub finished: bool,
}

impl TransitionSink for VecSink {
    fn on_grid(&mut self, grid: &GridParameters) {
        self.grid = Some(*grid);
    }

    fn on_trajectory(&mut self, rows: &[TransitionRecord]) {
        self.rows.extend_from_slice(rows);
    }

    fn on_finish(&mut self) {
        self.finished = true;
    }
}
