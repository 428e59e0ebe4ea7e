//! Run options and fixed grid configuration.
//!
//! Both structs are plain data; file loading lives in `aisd-io`.  Call
//! [`RunOptions::validate`] and [`GridConfig::validate`] before a run.  The
//! pipeline builder does this for you.

use crate::{AisdError, AisdResult};

/// Switches controlling bounds, filtering, action inference, and output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunOptions {
    /// Use `GridConfig::{min,max}_lon` as fixed bounds (and drop records
    /// outside them) instead of inferring the longitude envelope.
    pub bound_lon:       bool,
    /// Same as `bound_lon` for latitude.
    pub bound_lat:       bool,
    /// Trajectories with fewer surviving states than this are dropped.
    pub min_states:      usize,
    /// Interpolate between non-adjacent cells instead of emitting one
    /// spiral-coded action per transition.
    pub interp_actions:  bool,
    /// With `interp_actions`, allow diagonal moves (8-way) instead of 4-way.
    pub allow_diag:      bool,
    /// Append a representative `lon, lat` to every output row.
    pub append_coords:   bool,
    /// Decimal places kept on output coordinates.
    pub coord_precision: u32,
    /// Cap rows read per input file at `max_rows`.
    pub limit_rows:      bool,
    pub max_rows:        usize,
    /// Only read files whose year/month fall in the configured window.
    pub bound_time:      bool,
    /// Only read files whose UTM zone falls in the configured window.
    pub bound_zone:      bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            bound_lon:       false,
            bound_lat:       false,
            min_states:      2,
            interp_actions:  true,
            allow_diag:      true,
            append_coords:   false,
            coord_precision: 4,
            limit_rows:      false,
            max_rows:        0,
            bound_time:      false,
            bound_zone:      false,
        }
    }
}

impl RunOptions {
    pub fn validate(&self) -> AisdResult<()> {
        if self.min_states < 2 {
            return Err(AisdError::Configuration(format!(
                "min_states must be at least 2, got {}",
                self.min_states
            )));
        }
        if self.limit_rows && self.max_rows == 0 {
            return Err(AisdError::Configuration(
                "limit_rows is set but max_rows is 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Row cap to hand to the reader, if any.
    #[inline]
    pub fn row_limit(&self) -> Option<usize> {
        self.limit_rows.then_some(self.max_rows)
    }
}

/// Fixed grid bounds and cell size, in degrees.
///
/// The bounds on an axis are only used when the matching `bound_*` option
/// is set; otherwise they are inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub min_lon:  f64,
    pub max_lon:  f64,
    pub min_lat:  f64,
    pub max_lat:  f64,
    pub grid_len: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_lon:  -180.0,
            max_lon:  180.0,
            min_lat:  -90.0,
            max_lat:  90.0,
            grid_len: 0.5,
        }
    }
}

impl GridConfig {
    /// Check cell size and, for each bounded axis, that the range is
    /// non-empty.
    pub fn validate(&self, options: &RunOptions) -> AisdResult<()> {
        if !(self.grid_len.is_finite() && self.grid_len > 0.0) {
            return Err(AisdError::Configuration(format!(
                "grid_len must be positive and finite, got {}",
                self.grid_len
            )));
        }
        if options.bound_lon && !(self.max_lon > self.min_lon) {
            return Err(AisdError::Configuration(format!(
                "bound_lon is set but min_lon {} is not below max_lon {}",
                self.min_lon, self.max_lon
            )));
        }
        if options.bound_lat && !(self.max_lat > self.min_lat) {
            return Err(AisdError::Configuration(format!(
                "bound_lat is set but min_lat {} is not below max_lat {}",
                self.min_lat, self.max_lat
            )));
        }
        Ok(())
    }
}
