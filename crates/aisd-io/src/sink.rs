//! `CsvSink<W>` — bridges `TransitionSink` to a `TransitionWriter`.

use tracing::info;

use aisd_core::TransitionRecord;
use aisd_pipeline::TransitionSink;

use crate::writer::TransitionWriter;
use crate::{IoError, IoResult};

/// A [`TransitionSink`] that forwards every trajectory to a
/// [`TransitionWriter`].
///
/// Sink hooks return nothing, so the first write error is stored and later
/// writes are skipped.  Check [`take_error`][Self::take_error] once the run
/// returns.
pub struct CsvSink<W: TransitionWriter> {
    writer:       W,
    trajectories: usize,
    rows:         usize,
    last_error:   Option<IoError>,
}

impl<W: TransitionWriter> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, trajectories: 0, rows: 0, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<IoError> {
        self.last_error.take()
    }

    /// Rows handed to the writer so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: IoResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TransitionWriter> TransitionSink for CsvSink<W> {
    fn on_trajectory(&mut self, rows: &[TransitionRecord]) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_rows(rows);
        self.store_err(result);
        self.trajectories += 1;
        self.rows += rows.len();
    }

    fn on_finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
        info!(trajectories = self.trajectories, rows = self.rows, "transition file written");
    }
}
