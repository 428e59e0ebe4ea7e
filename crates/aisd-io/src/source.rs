//! AIS CSV reader.
//!
//! # CSV format
//!
//! ```csv
//! MMSI,BaseDateTime,LAT,LON,SOG,COG,Heading,VesselName
//! 367390380,2020-01-01T00:00:00,29.93174,-89.99243,0.0,...
//! ```
//!
//! Only `MMSI`, `LON`, `LAT`, and `BaseDateTime` are read; every other
//! column is ignored.  Timestamps become seconds since the Unix epoch (UTC).

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use aisd_core::RawRecord;

use crate::{IoError, IoResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AisRow {
    #[serde(rename = "MMSI")]
    mmsi:      String,
    #[serde(rename = "LON")]
    lon:       f64,
    #[serde(rename = "LAT")]
    lat:       f64,
    #[serde(rename = "BaseDateTime")]
    date_time: String,
}

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Read at most `max_rows` records (all when `None`) from the CSV file at
/// `path`.
pub fn load_records_csv(path: &Path, max_rows: Option<usize>) -> IoResult<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    load_records_reader(file, path, max_rows)
}

/// Like [`load_records_csv`] but accepts any `Read` source.  `origin` only
/// labels errors.
pub fn load_records_reader<R: Read>(reader: R, origin: &Path, max_rows: Option<usize>) -> IoResult<Vec<RawRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let limit = max_rows.unwrap_or(usize::MAX);
    let mut records = Vec::new();

    for (i, result) in csv_reader.deserialize::<AisRow>().take(limit).enumerate() {
        let row = i as u64 + 1;
        let data_err = |reason: String| IoError::Data { path: origin.to_path_buf(), row, reason };

        let ais = result.map_err(|e| data_err(e.to_string()))?;
        let timestamp = parse_timestamp(&ais.date_time)
            .ok_or_else(|| data_err(format!("unparseable BaseDateTime {:?}", ais.date_time)))?;
        if !(ais.lon.is_finite() && ais.lat.is_finite()) {
            return Err(data_err(format!("non-finite coordinate ({}, {})", ais.lon, ais.lat)));
        }

        records.push(RawRecord::new(ais.mmsi.trim(), ais.lon, ais.lat, timestamp));
    }

    Ok(records)
}

/// Seconds since the Unix epoch for an AIS `BaseDateTime`.
///
/// Accepts `2020-01-01T00:00:00`, the same with a space separator, either
/// with fractional seconds, or a plain number of seconds.
pub fn parse_timestamp(text: &str) -> Option<f64> {
    let text = text.trim();
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            let utc = dt.and_utc();
            return Some(utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9);
        }
    }
    text.parse::<f64>().ok().filter(|t| t.is_finite())
}
