//! `aisd-io` — the file-facing side of the discretization tool.
//!
//! | Module     | Provides                                                      |
//! |------------|---------------------------------------------------------------|
//! | `config`   | [`RunConfig`], the `config.yaml` document                     |
//! | `discover` | recursive `AIS_yyyy_mm_ZoneNN.csv` discovery and filtering    |
//! | `source`   | AIS CSV reader producing `RawRecord`s                         |
//! | `csv`      | [`CsvTransitionWriter`], the transition dataset file          |
//! | `sink`     | [`CsvSink`], bridges `TransitionSink` to a [`TransitionWriter`] |
//! | `meta`     | [`RunMeta`], the `meta_data.yaml` written after a run         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use aisd_io::{collect_csv_files, load_records_csv, CsvSink, CsvTransitionWriter, RunConfig};
//!
//! let config = RunConfig::load(Path::new("config.yaml"))?;
//! let files = collect_csv_files(&config.input_dir(), &config.options, &config.meta_params)?;
//! let writer = CsvTransitionWriter::new(&config.output_file(), config.options.append_coords)?;
//! let mut sink = CsvSink::new(writer);
//! let summary = pipeline.run(records, &mut sink)?;
//! if let Some(e) = sink.take_error() { return Err(e.into()); }
//! ```

pub mod config;
pub mod csv;
pub mod discover;
pub mod error;
pub mod meta;
pub mod sink;
pub mod source;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvTransitionWriter;
pub use config::{Directories, MetaParams, RunConfig};
pub use discover::{collect_csv_files, parse_file_meta, zone_bounds, DiscoveredFile, FileMeta};
pub use error::{IoError, IoResult};
pub use meta::{GridMeta, MetaDirectories, RunMeta};
pub use sink::CsvSink;
pub use source::{load_records_csv, load_records_reader, parse_timestamp};
pub use writer::TransitionWriter;
