//! The `TransitionWriter` trait implemented by output backends.

use aisd_core::TransitionRecord;

use crate::IoResult;

/// Destination for transition rows.
///
/// [`CsvSink`][crate::CsvSink] calls these from infallible pipeline hooks,
/// storing the first error for [`CsvSink::take_error`][crate::CsvSink::take_error].
pub trait TransitionWriter {
    /// Write the rows of one trajectory, terminal row included.
    fn write_rows(&mut self, rows: &[TransitionRecord]) -> IoResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent.
    fn finish(&mut self) -> IoResult<()>;
}
