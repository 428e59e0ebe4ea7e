//! The frozen grid and its cell arithmetic.
//!
//! A 3 × 4 grid enumerates states row-major from the bottom-left corner
//! `(min_lon, min_lat)`:
//!
//! ```text
//!  8  9 10 11
//!  4  5  6  7
//!  0  1  2  3
//! ```
//!
//! Each cell is half-open: it includes its west and south edges and
//! excludes its east and north edges.  The grid itself is closed, so a
//! coordinate exactly on `max_lon` (`max_lat`) falls in the last column
//! (row) rather than one past it.

use aisd_core::{Coord, StateId};

use crate::{Bounds, GridError, GridResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A `(row, col)` grid position.  Rows grow northward, columns eastward.
///
/// Components are signed: coordinates outside the grid extrapolate to
/// negative or over-range positions rather than being rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    #[inline]
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Decompose a row-major state (floor division, so negative states map
    /// back to the same cell that produced them).
    #[inline]
    pub fn from_state(state: StateId, num_cols: i64) -> Self {
        Self {
            row: state.0.div_euclid(num_cols),
            col: state.0.rem_euclid(num_cols),
        }
    }

    #[inline]
    pub fn state(self, num_cols: i64) -> StateId {
        StateId(self.row * num_cols + self.col)
    }

    /// `(Δrow, Δcol)` from `self` to `other`.
    #[inline]
    pub fn offset_to(self, other: Cell) -> (i64, i64) {
        (other.row - self.row, other.col - self.col)
    }

    /// The cell `d_row` rows north and `d_col` columns east of `self`.
    #[inline]
    pub fn shifted(self, d_row: i64, d_col: i64) -> Cell {
        Cell { row: self.row + d_row, col: self.col + d_col }
    }
}

// ── GridParameters ────────────────────────────────────────────────────────────

/// Immutable grid definition: bounds, cell size, and derived column count.
///
/// Invariants (checked by [`GridParameters::new`]):
/// `max_lon > min_lon`, `max_lat > min_lat`, `grid_len > 0`, `num_cols ≥ 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridParameters {
    pub min_lon:  f64,
    pub max_lon:  f64,
    pub min_lat:  f64,
    pub max_lat:  f64,
    pub grid_len: f64,
    /// `ceil((max_lon - min_lon) / grid_len)`.
    pub num_cols: i64,
}

impl GridParameters {
    /// Validate `bounds` and `grid_len` and derive `num_cols`.
    pub fn new(bounds: Bounds, grid_len: f64) -> GridResult<Self> {
        if !(grid_len.is_finite() && grid_len > 0.0) {
            return Err(GridError::NonPositiveGridLen(grid_len));
        }
        if !(bounds.max_lon > bounds.min_lon) {
            return Err(GridError::InvalidBounds {
                axis: "longitude",
                min:  bounds.min_lon,
                max:  bounds.max_lon,
            });
        }
        if !(bounds.max_lat > bounds.min_lat) {
            return Err(GridError::InvalidBounds {
                axis: "latitude",
                min:  bounds.min_lat,
                max:  bounds.max_lat,
            });
        }

        let num_cols = cell_count("longitude", bounds.min_lon, bounds.max_lon, grid_len)?;
        cell_count("latitude", bounds.min_lat, bounds.max_lat, grid_len)?;

        Ok(Self {
            min_lon: bounds.min_lon,
            max_lon: bounds.max_lon,
            min_lat: bounds.min_lat,
            max_lat: bounds.max_lat,
            grid_len,
            num_cols,
        })
    }

    /// Row count of the bounded grid, `ceil((max_lat - min_lat) / grid_len)`.
    pub fn num_rows(&self) -> i64 {
        ((self.max_lat - self.min_lat) / self.grid_len).ceil() as i64
    }

    /// Number of in-bounds states, `num_rows * num_cols`.
    pub fn num_states(&self) -> i64 {
        self.num_rows() * self.num_cols
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_lon: self.min_lon,
            max_lon: self.max_lon,
            min_lat: self.min_lat,
            max_lat: self.max_lat,
        }
    }

    /// The cell containing `coord`.  Out-of-range input extrapolates.
    #[inline]
    pub fn cell_at(&self, coord: Coord) -> Cell {
        let mut row = ((coord.lat - self.min_lat) / self.grid_len).floor() as i64;
        let mut col = ((coord.lon - self.min_lon) / self.grid_len).floor() as i64;

        // Closed north/east edges.
        if coord.lon == self.max_lon {
            col = col.min(self.num_cols - 1);
        }
        if coord.lat == self.max_lat {
            row = row.min(self.num_rows() - 1);
        }
        Cell { row, col }
    }

    /// Row-major state of the cell containing `coord`.
    ///
    /// Does not reject out-of-range coordinates; the result may be negative
    /// or exceed [`num_states`][Self::num_states].  Filter first (see
    /// [`BoundingBoxFilter`][crate::BoundingBoxFilter]) when a bounded grid
    /// is required.
    #[inline]
    pub fn state_of(&self, coord: Coord) -> StateId {
        self.cell_at(coord).state(self.num_cols)
    }

    #[inline]
    pub fn cell_of(&self, state: StateId) -> Cell {
        Cell::from_state(state, self.num_cols)
    }

    /// Center coordinate of `state`'s cell, the inverse of
    /// [`state_of`][Self::state_of] up to cell resolution.
    pub fn coordinate_of(&self, state: StateId) -> Coord {
        self.center_of(self.cell_of(state))
    }

    pub fn center_of(&self, cell: Cell) -> Coord {
        Coord {
            lon: self.min_lon + self.grid_len * (cell.col as f64 + 0.5),
            lat: self.min_lat + self.grid_len * (cell.row as f64 + 0.5),
        }
    }

    /// `true` if `coord` lies inside the closed bounding box.
    pub fn contains(&self, coord: Coord) -> bool {
        self.bounds().contains(coord)
    }
}

/// `ceil((max - min) / grid_len)` for a validated range, rejecting spans that
/// overflow or underflow to no cells at all.
fn cell_count(axis: &'static str, min: f64, max: f64, grid_len: f64) -> GridResult<i64> {
    let cells = ((max - min) / grid_len).ceil();
    if !(1.0..=i64::MAX as f64).contains(&cells) {
        return Err(GridError::InvalidBounds { axis, min, max });
    }
    Ok(cells as i64)
}
