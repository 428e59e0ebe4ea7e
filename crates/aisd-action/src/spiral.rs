//! Unbounded square-spiral action codes.
//!
//! The code of a move is the index of its `(Δrow, Δcol)` offset in a square
//! spiral centered on the origin cell.  Index 0 is the center; ring `i ≥ 1`
//! holds the `8i` indices `(2i-1)² ..= (2i+1)² - 1`:
//!
//! ```text
//!   15 14 13 12 11
//!   16  4  3  2 10
//!   17  5  0  1  9        north is up, east is right
//!   18  6  7  8 24
//!   19 20 21 22 23
//! ```
//!
//! Each ring starts on the east edge at `Δrow = 0`, climbs to the north-east
//! corner, runs west along the north edge, south along the west edge, east
//! along the south edge, and closes by climbing the east edge back to
//! `Δrow = -1`.
//!
//! [`spiral_index`] and [`spiral_offset`] are the closed forms.
//! [`SpiralWalk`] enumerates the same spiral cell by cell as a small state
//! machine; the two are checked against each other in the tests.

use aisd_core::{ActionId, Coord, StateId};
use aisd_grid::GridParameters;

use crate::model::ensure_distinct;
use crate::{ActionModel, ActionResult, Step};

// ── Closed forms ──────────────────────────────────────────────────────────────

/// Spiral index of the offset `(d_row, d_col)`.
pub fn spiral_index(d_row: i64, d_col: i64) -> i64 {
    let ring = d_row.abs().max(d_col.abs());
    if ring == 0 {
        return 0;
    }
    let base = (2 * ring - 1).pow(2);
    let pos = if d_col == ring && d_row >= 0 {
        d_row
    } else if d_row == ring {
        2 * ring - d_col
    } else if d_col == -ring {
        4 * ring - d_row
    } else if d_row == -ring {
        6 * ring + d_col
    } else {
        8 * ring + d_row
    };
    base + pos
}

/// Inverse of [`spiral_index`]: the `(d_row, d_col)` offset with spiral index
/// `index`.
///
/// # Panics
/// Panics in debug mode if `index` is negative.
pub fn spiral_offset(index: i64) -> (i64, i64) {
    debug_assert!(index >= 0, "spiral index must be non-negative");
    if index <= 0 {
        return (0, 0);
    }

    // Smallest ring whose outer square covers `index`; the float estimate is
    // corrected in integers.
    let mut ring = ((((index as f64).sqrt()) + 1.0) / 2.0).floor() as i64;
    while ring > 1 && (2 * ring - 1).pow(2) > index {
        ring -= 1;
    }
    while (2 * ring + 1).pow(2) <= index {
        ring += 1;
    }

    let pos = index - (2 * ring - 1).pow(2);
    if pos <= ring {
        (pos, ring)
    } else if pos <= 3 * ring {
        (ring, 2 * ring - pos)
    } else if pos <= 5 * ring {
        (4 * ring - pos, -ring)
    } else if pos <= 7 * ring {
        (-ring, pos - 6 * ring)
    } else {
        (pos - 8 * ring, ring)
    }
}

// ── SpiralWalk ────────────────────────────────────────────────────────────────

/// One cell of the spiral enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralCell {
    pub index: i64,
    pub d_row: i64,
    pub d_col: i64,
}

/// The move the walk makes out of its current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    /// Last cell of the ring: jump out to `(0, ring + 1)`.
    NextRing,
    /// East edge, from `Δrow = 0` up to the north-east corner.
    EastAscend,
    /// North edge, westward.
    North,
    /// West edge, southward.
    West,
    /// South edge, eastward.
    South,
    /// East edge below the axis, climbing back toward `Δrow = -1`.
    EastClose,
}

/// Cell-by-cell enumeration of the spiral, starting at the center.
///
/// Infinite; bound it with `take` or `take_while`.
#[derive(Debug, Clone, Default)]
pub struct SpiralWalk {
    ring:  i64,
    index: i64,
    d_row: i64,
    d_col: i64,
}

impl SpiralWalk {
    pub fn new() -> Self {
        Self::default()
    }

    fn leg(&self) -> Leg {
        let r = self.ring;
        if self.index == (2 * r + 1).pow(2) - 1 {
            Leg::NextRing
        } else if self.d_col == r && (0..r).contains(&self.d_row) {
            Leg::EastAscend
        } else if self.d_row == r && self.d_col > -r {
            Leg::North
        } else if self.d_col == -r && self.d_row > -r {
            Leg::West
        } else if self.d_row == -r && self.d_col < r {
            Leg::South
        } else {
            Leg::EastClose
        }
    }

    fn advance(&mut self) {
        match self.leg() {
            Leg::NextRing => {
                self.ring += 1;
                self.d_row = 0;
                self.d_col = self.ring;
            }
            Leg::EastAscend | Leg::EastClose => self.d_row += 1,
            Leg::North => self.d_col -= 1,
            Leg::West  => self.d_row -= 1,
            Leg::South => self.d_col += 1,
        }
        self.index += 1;
    }
}

impl Iterator for SpiralWalk {
    type Item = SpiralCell;

    fn next(&mut self) -> Option<SpiralCell> {
        let cell = SpiralCell { index: self.index, d_row: self.d_row, d_col: self.d_col };
        self.advance();
        Some(cell)
    }
}

// ── SpiralActions ─────────────────────────────────────────────────────────────

/// One step per transition, coded by the spiral index of the offset.
///
/// Never interpolates, so the action space grows with the largest jump in
/// the data (bounded in practice by the grid size).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpiralActions;

impl ActionModel for SpiralActions {
    fn infer(
        &self,
        grid:   &GridParameters,
        from:   StateId,
        to:     StateId,
        origin: Option<Coord>,
    ) -> ActionResult<Vec<Step>> {
        ensure_distinct(from, to)?;
        let (d_row, d_col) = grid.cell_of(from).offset_to(grid.cell_of(to));
        Ok(vec![Step {
            from,
            action: ActionId(spiral_index(d_row, d_col)),
            to,
            coord: origin,
        }])
    }

    fn name(&self) -> &'static str {
        "spiral"
    }
}
