//! CSV output backend.
//!
//! ```csv
//! sequence_id,from_state_id,action_id,to_state_id,lon,lat
//! 0,0,1,1,0.1,0.1
//! 0,1,3,3,1.9,0.1
//! 0,3,-1,-1,1.9,1.9
//! ```
//!
//! The `lon,lat` columns are present only when coordinates are appended.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use aisd_core::TransitionRecord;

use crate::writer::TransitionWriter;
use crate::IoResult;

const HEADER: [&str; 4] = ["sequence_id", "from_state_id", "action_id", "to_state_id"];

/// Writes the transition dataset to one CSV file.
pub struct CsvTransitionWriter {
    out:           Writer<File>,
    append_coords: bool,
    rows_written:  u64,
    finished:      bool,
}

impl CsvTransitionWriter {
    /// Create `path` (and missing parent directories) and write the header.
    pub fn new(path: &Path, append_coords: bool) -> IoResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = Writer::from_path(path)?;
        if append_coords {
            out.write_record(HEADER.iter().chain(&["lon", "lat"]))?;
        } else {
            out.write_record(HEADER)?;
        }

        Ok(Self { out, append_coords, rows_written: 0, finished: false })
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }
}

impl TransitionWriter for CsvTransitionWriter {
    fn write_rows(&mut self, rows: &[TransitionRecord]) -> IoResult<()> {
        for row in rows {
            let mut fields = vec![
                row.sequence_id.0.to_string(),
                row.from_state.to_string(),
                row.action.to_string(),
                row.to_state.to_string(),
            ];
            if self.append_coords {
                match row.coord {
                    Some(c) => fields.extend([c.lon.to_string(), c.lat.to_string()]),
                    None => fields.extend([String::new(), String::new()]),
                }
            }
            self.out.write_record(&fields)?;
        }
        self.rows_written += rows.len() as u64;
        Ok(())
    }

    fn finish(&mut self) -> IoResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
