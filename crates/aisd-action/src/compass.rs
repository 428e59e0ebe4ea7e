//! Interpolating policies over the 8- and 4-neighborhoods.
//!
//! Both walk from the source cell toward the target one neighbor at a time,
//! choosing each move from the signs (and for 4-way, the magnitudes) of the
//! remaining `(Δrow, Δcol)`.  Rows grow northward and columns eastward.

use aisd_core::{ActionId, Coord, StateId};
use aisd_grid::{Cell, GridParameters};

use crate::model::ensure_distinct;
use crate::{ActionError, ActionModel, ActionResult, Step};

// ── Heading ───────────────────────────────────────────────────────────────────

/// A compass move to a neighboring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Heading {
    /// `(Δrow, Δcol)` of one move.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::East      => (0, 1),
            Heading::NorthEast => (1, 1),
            Heading::North     => (1, 0),
            Heading::NorthWest => (1, -1),
            Heading::West      => (0, -1),
            Heading::SouthWest => (-1, -1),
            Heading::South     => (-1, 0),
            Heading::SouthEast => (-1, 1),
        }
    }

    /// Counter-clockwise code starting at east: E=1 … SE=8.
    pub fn code8(self) -> ActionId {
        ActionId(match self {
            Heading::East      => 1,
            Heading::NorthEast => 2,
            Heading::North     => 3,
            Heading::NorthWest => 4,
            Heading::West      => 5,
            Heading::SouthWest => 6,
            Heading::South     => 7,
            Heading::SouthEast => 8,
        })
    }

    /// E=1, N=2, W=3, S=4; `None` for diagonals.
    pub fn code4(self) -> Option<ActionId> {
        match self {
            Heading::East  => Some(ActionId(1)),
            Heading::North => Some(ActionId(2)),
            Heading::West  => Some(ActionId(3)),
            Heading::South => Some(ActionId(4)),
            _ => None,
        }
    }

    /// Heading toward `(d_row, d_col)` using signs only.
    ///
    /// # Panics
    /// Panics in debug mode on the zero offset.
    pub fn toward(d_row: i64, d_col: i64) -> Heading {
        debug_assert!(d_row != 0 || d_col != 0, "no heading toward the zero offset");
        match (d_row.signum(), d_col.signum()) {
            (1, 1)   => Heading::NorthEast,
            (1, 0)   => Heading::North,
            (1, -1)  => Heading::NorthWest,
            (0, 1)   => Heading::East,
            (0, -1)  => Heading::West,
            (-1, 1)  => Heading::SouthEast,
            (-1, 0)  => Heading::South,
            _        => Heading::SouthWest,
        }
    }

    /// Axis-aligned heading that reduces the larger of `|d_row|`, `|d_col|`.
    /// The row axis wins ties.
    pub fn toward_axis(d_row: i64, d_col: i64) -> Heading {
        debug_assert!(d_row != 0 || d_col != 0, "no heading toward the zero offset");
        if d_row != 0 && d_row.abs() >= d_col.abs() {
            if d_row > 0 { Heading::North } else { Heading::South }
        } else if d_col > 0 {
            Heading::East
        } else {
            Heading::West
        }
    }
}

// ── Shared walk ───────────────────────────────────────────────────────────────

/// Step from `from` to `to`, asking `choose` for a heading and `code` for its
/// action id at every cell.  The first error from `code` aborts the walk.
pub(crate) fn walk<C, K>(
    grid:   &GridParameters,
    from:   StateId,
    to:     StateId,
    origin: Option<Coord>,
    choose: C,
    code:   K,
) -> ActionResult<Vec<Step>>
where
    C: Fn(i64, i64) -> Heading,
    K: Fn(Heading) -> ActionResult<ActionId>,
{
    let num_cols = grid.num_cols;
    let mut cell: Cell = grid.cell_of(from);
    let (mut d_row, mut d_col) = cell.offset_to(grid.cell_of(to));

    let mut steps = Vec::with_capacity((d_row.abs() + d_col.abs()) as usize);
    while d_row != 0 || d_col != 0 {
        let heading = choose(d_row, d_col);
        let (step_row, step_col) = heading.delta();
        let next = cell.shifted(step_row, step_col);

        let state = cell.state(num_cols);
        let coord = match origin {
            Some(raw) if steps.is_empty() => Some(raw),
            Some(_) => Some(grid.coordinate_of(state)),
            None => None,
        };
        steps.push(Step { from: state, action: code(heading)?, to: next.state(num_cols), coord });

        d_row -= step_row;
        d_col -= step_col;
        cell = next;
    }
    Ok(steps)
}

// ── EightWayActions ───────────────────────────────────────────────────────────

/// Interpolates with diagonal moves; takes `max(|Δrow|, |Δcol|)` steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EightWayActions;

impl ActionModel for EightWayActions {
    fn infer(
        &self,
        grid:   &GridParameters,
        from:   StateId,
        to:     StateId,
        origin: Option<Coord>,
    ) -> ActionResult<Vec<Step>> {
        ensure_distinct(from, to)?;
        walk(grid, from, to, origin, Heading::toward, |h| Ok(h.code8()))
    }

    fn name(&self) -> &'static str {
        "eight-way"
    }
}

// ── FourWayActions ────────────────────────────────────────────────────────────

/// Interpolates with axis-aligned moves only; takes `|Δrow| + |Δcol|` steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FourWayActions;

impl FourWayActions {
    /// E=1, N=2, W=3, S=4.  Diagonals are a logic error.
    pub fn code(heading: Heading) -> ActionResult<ActionId> {
        heading.code4().ok_or(ActionError::UndefinedAction { heading, policy: "four-way" })
    }
}

impl ActionModel for FourWayActions {
    fn infer(
        &self,
        grid:   &GridParameters,
        from:   StateId,
        to:     StateId,
        origin: Option<Coord>,
    ) -> ActionResult<Vec<Step>> {
        ensure_distinct(from, to)?;
        walk(grid, from, to, origin, Heading::toward_axis, FourWayActions::code)
    }

    fn name(&self) -> &'static str {
        "four-way"
    }
}
