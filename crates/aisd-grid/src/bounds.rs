//! Grid bounds: fixed, inferred, or mixed per axis.
//!
//! # Inference
//!
//! For an axis whose bound flag is off, the envelope is the running min/max
//! of every observed coordinate, rounded outward to whole degrees
//! (`floor` for the minimum, `ceil` for the maximum).  If rounding leaves a
//! zero-width range (every coordinate sitting exactly on one integer
//! degree), the maximum is pushed out by one degree so the grid still has
//! at least one cell on that axis.
//!
//! # Filtering
//!
//! For an axis whose bound flag is on, records outside the fixed closed
//! range are dropped by [`BoundingBoxFilter`] before inference and
//! discretization.

use aisd_core::{Coord, GridConfig, RunOptions};

use crate::{GridError, GridParameters, GridResult};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// A closed longitude/latitude bounding box in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        (self.min_lon..=self.max_lon).contains(&coord.lon)
            && (self.min_lat..=self.max_lat).contains(&coord.lat)
    }
}

// ── BoundsAccumulator ─────────────────────────────────────────────────────────

/// Running min/max over observed coordinates.
///
/// This is the only mutable state in the grid model.  It lives for one
/// discretization run and is consumed by [`finish`][Self::finish], which
/// produces the frozen [`GridParameters`].
#[derive(Clone, Debug)]
pub struct BoundsAccumulator {
    min_lon: f64,
    max_lon: f64,
    min_lat: f64,
    max_lat: f64,
    count:   usize,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self {
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            count:   0,
        }
    }
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn observe(&mut self, coord: Coord) {
        self.min_lon = self.min_lon.min(coord.lon);
        self.max_lon = self.max_lon.max(coord.lon);
        self.min_lat = self.min_lat.min(coord.lat);
        self.max_lat = self.max_lat.max(coord.lat);
        self.count += 1;
    }

    /// Number of coordinates observed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Combine two partial scans (e.g. one per input file).
    pub fn merge(mut self, other: &BoundsAccumulator) -> Self {
        self.min_lon = self.min_lon.min(other.min_lon);
        self.max_lon = self.max_lon.max(other.max_lon);
        self.min_lat = self.min_lat.min(other.min_lat);
        self.max_lat = self.max_lat.max(other.max_lat);
        self.count += other.count;
        self
    }

    /// Resolve each axis (fixed from `config` or inferred from the scan) and
    /// build the frozen grid.
    pub fn finish(self, config: &GridConfig, options: &RunOptions) -> GridResult<GridParameters> {
        if !(config.grid_len.is_finite() && config.grid_len > 0.0) {
            return Err(GridError::NonPositiveGridLen(config.grid_len));
        }

        let (min_lon, max_lon) = if options.bound_lon {
            (config.min_lon, config.max_lon)
        } else {
            self.inferred_axis("longitude", self.min_lon, self.max_lon)?
        };
        let (min_lat, max_lat) = if options.bound_lat {
            (config.min_lat, config.max_lat)
        } else {
            self.inferred_axis("latitude", self.min_lat, self.max_lat)?
        };

        GridParameters::new(Bounds { min_lon, max_lon, min_lat, max_lat }, config.grid_len)
    }

    fn inferred_axis(&self, axis: &'static str, min: f64, max: f64) -> GridResult<(f64, f64)> {
        if self.count == 0 || !min.is_finite() || !max.is_finite() {
            return Err(GridError::NoCoordinates(axis));
        }
        let lo = min.floor();
        let mut hi = max.ceil();
        if hi <= lo {
            hi = lo + 1.0;
        }
        Ok((lo, hi))
    }
}

/// Scan every coordinate once and build the grid.
///
/// Axes flagged as bounded in `options` take their range from `config`;
/// the rest are inferred (see the module docs).
pub fn infer_bounds<I>(coords: I, config: &GridConfig, options: &RunOptions) -> GridResult<GridParameters>
where
    I: IntoIterator<Item = Coord>,
{
    let mut acc = BoundsAccumulator::new();
    for coord in coords {
        acc.observe(coord);
    }
    acc.finish(config, options)
}

// ── BoundingBoxFilter ─────────────────────────────────────────────────────────

/// Drops coordinates outside the fixed range of every bounded axis.
///
/// Unbounded axes accept everything.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBoxFilter {
    lon: Option<(f64, f64)>,
    lat: Option<(f64, f64)>,
}

impl BoundingBoxFilter {
    pub fn new(config: &GridConfig, options: &RunOptions) -> Self {
        Self {
            lon: options.bound_lon.then_some((config.min_lon, config.max_lon)),
            lat: options.bound_lat.then_some((config.min_lat, config.max_lat)),
        }
    }

    /// A filter that keeps everything.
    pub fn pass_all() -> Self {
        Self { lon: None, lat: None }
    }

    /// `true` if at least one axis is bounded.
    pub fn is_active(&self) -> bool {
        self.lon.is_some() || self.lat.is_some()
    }

    #[inline]
    pub fn keeps(&self, coord: Coord) -> bool {
        let lon_ok = self.lon.is_none_or(|(lo, hi)| (lo..=hi).contains(&coord.lon));
        let lat_ok = self.lat.is_none_or(|(lo, hi)| (lo..=hi).contains(&coord.lat));
        lon_ok && lat_ok
    }
}
