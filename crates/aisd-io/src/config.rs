//! The `config.yaml` run configuration.
//!
//! ```yaml
//! options:
//!   bound_lon: true
//!   bound_lat: true
//!   min_states: 2
//!   interp_actions: true
//!   allow_diag: true
//!   append_coords: false
//!   limit_rows: false
//!   max_rows: 0
//!   bound_time: true
//!   bound_zone: true
//! directories:
//!   in_dir_path: ../data/
//!   in_dir_data: raw/
//!   out_dir_path: ../data/
//!   out_dir_file: processed.csv
//! meta_params:
//!   min_year: 2020
//!   max_year: 2020
//!   min_month: 1
//!   max_month: 3
//!   min_zone: 10
//!   max_zone: 11
//! grid_params:
//!   min_lon: -126.0
//!   max_lon: -114.0
//!   min_lat: 30.0
//!   max_lat: 50.0
//!   grid_len: 0.5
//! ```
//!
//! Every section except `directories` may be omitted and falls back to its
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use aisd_core::{GridConfig, RunOptions};

use crate::{zone_bounds, IoError, IoResult};

/// Input and output locations.
///
/// The input root is `in_dir_path` joined with `in_dir_data`; the output
/// file is `out_dir_path` joined with `out_dir_file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directories {
    pub in_dir_path:  String,
    #[serde(default)]
    pub in_dir_data:  String,
    pub out_dir_path: String,
    pub out_dir_file: String,
}

/// Year/month/zone window applied to discovered files when `bound_time` or
/// `bound_zone` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaParams {
    pub min_year:  u32,
    pub max_year:  u32,
    pub min_month: u32,
    pub max_month: u32,
    pub min_zone:  u32,
    pub max_zone:  u32,
}

impl Default for MetaParams {
    fn default() -> Self {
        Self {
            min_year:  0,
            max_year:  u32::MAX,
            min_month: 1,
            max_month: 12,
            min_zone:  1,
            max_zone:  60,
        }
    }
}

impl MetaParams {
    /// `true` if `(year, month)` lies inside the inclusive window
    /// `min_year/min_month ..= max_year/max_month`.
    pub fn contains_month(&self, year: u32, month: u32) -> bool {
        (self.min_year, self.min_month) <= (year, month) && (year, month) <= (self.max_year, self.max_month)
    }

    pub fn contains_zone(&self, zone: u32) -> bool {
        (self.min_zone..=self.max_zone).contains(&zone)
    }

    /// Longitude band covered by zones `min_zone..=max_zone`, or `None` when
    /// the window is empty or leaves the 1..=60 range (where bands wrap).
    pub fn zone_lon_range(&self) -> Option<(f64, f64)> {
        if !(1..=self.max_zone).contains(&self.min_zone) || self.max_zone > 60 {
            return None;
        }
        let (west, _) = zone_bounds(self.min_zone as i32);
        let (_, east) = zone_bounds(self.max_zone as i32);
        Some((west, east))
    }
}

/// The whole `config.yaml` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub options:     RunOptions,
    pub directories: Directories,
    #[serde(default)]
    pub meta_params: MetaParams,
    #[serde(default)]
    pub grid_params: GridConfig,
}

impl RunConfig {
    /// Read, parse, and validate a YAML config file.
    pub fn load(path: &Path) -> IoResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> IoResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check options, grid configuration, and the discovery window.
    pub fn validate(&self) -> IoResult<()> {
        self.options.validate().map_err(|e| IoError::Config(e.to_string()))?;
        self.grid_params
            .validate(&self.options)
            .map_err(|e| IoError::Config(e.to_string()))?;

        let m = &self.meta_params;
        if self.options.bound_time {
            if !(1..=12).contains(&m.min_month) || !(1..=12).contains(&m.max_month) {
                return Err(IoError::Config(format!(
                    "months must be in 1..=12, got {}..{}",
                    m.min_month, m.max_month
                )));
            }
            if (m.min_year, m.min_month) > (m.max_year, m.max_month) {
                return Err(IoError::Config(format!(
                    "time window {}/{} is after {}/{}",
                    m.min_year, m.min_month, m.max_year, m.max_month
                )));
            }
        }
        if self.options.bound_zone && m.min_zone > m.max_zone {
            return Err(IoError::Config(format!(
                "min_zone {} is above max_zone {}",
                m.min_zone, m.max_zone
            )));
        }
        // Every record of the selected zones would be filtered out.
        let zone_band = (self.options.bound_zone && self.options.bound_lon)
            .then(|| m.zone_lon_range())
            .flatten();
        if let Some((west, east)) = zone_band {
            let g = &self.grid_params;
            if !(g.min_lon < east && west < g.max_lon) {
                return Err(IoError::Config(format!(
                    "longitude bounds {}..{} miss zones {}..={} ({west}..{east})",
                    g.min_lon, g.max_lon, m.min_zone, m.max_zone
                )));
            }
        }
        if self.directories.out_dir_file.trim().is_empty() {
            return Err(IoError::Config("out_dir_file must not be empty".to_string()));
        }
        Ok(())
    }

    /// Root directory scanned for input CSV files.
    pub fn input_dir(&self) -> PathBuf {
        Path::new(&self.directories.in_dir_path).join(&self.directories.in_dir_data)
    }

    /// Path of the transition dataset written by the run.
    pub fn output_file(&self) -> PathBuf {
        Path::new(&self.directories.out_dir_path).join(&self.directories.out_dir_file)
    }
}
