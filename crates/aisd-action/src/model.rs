//! The `ActionModel` trait and the run-level policy selector.

use aisd_core::{ActionId, Coord, RunOptions, StateId};
use aisd_grid::GridParameters;

use crate::{ActionError, ActionResult, EightWayActions, FourWayActions, SpiralActions};

// ── Step ──────────────────────────────────────────────────────────────────────

/// One inferred `(from, action, to)` move, optionally annotated with a
/// representative coordinate of `from`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from:   StateId,
    pub action: ActionId,
    pub to:     StateId,
    pub coord:  Option<Coord>,
}

// ── ActionModel trait ─────────────────────────────────────────────────────────

/// Pluggable action-inference strategy.
///
/// # Coordinates
///
/// When `origin` is `Some`, the first returned step carries it (it is the raw
/// observed coordinate of `from`) and every later step carries the center of
/// its own `from` cell.  When `origin` is `None`, no step carries a coordinate.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// Rayon workers assembling different trajectories.
pub trait ActionModel: Send + Sync {
    /// Moves leading from `from` to `to`, in order.
    ///
    /// Returns [`ActionError::SelfTransition`] if `from == to`.
    fn infer(
        &self,
        grid:   &GridParameters,
        from:   StateId,
        to:     StateId,
        origin: Option<Coord>,
    ) -> ActionResult<Vec<Step>>;

    /// Short policy name for logs and run metadata.
    fn name(&self) -> &'static str;
}

/// Fail fast on a self-transition.
#[inline]
pub(crate) fn ensure_distinct(from: StateId, to: StateId) -> ActionResult<()> {
    if from == to {
        return Err(ActionError::SelfTransition(from));
    }
    Ok(())
}

// ── ActionPolicy ──────────────────────────────────────────────────────────────

/// The three policies as one tagged value, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPolicy {
    Spiral(SpiralActions),
    EightWay(EightWayActions),
    FourWay(FourWayActions),
}

impl ActionPolicy {
    /// `interp_actions = false` → spiral; otherwise 8-way when `allow_diag`,
    /// else 4-way.
    pub fn from_options(options: &RunOptions) -> Self {
        match (options.interp_actions, options.allow_diag) {
            (false, _)    => ActionPolicy::Spiral(SpiralActions),
            (true, true)  => ActionPolicy::EightWay(EightWayActions),
            (true, false) => ActionPolicy::FourWay(FourWayActions),
        }
    }

    /// `true` for the policies that synthesize intermediate steps.
    pub fn interpolates(&self) -> bool {
        !matches!(self, ActionPolicy::Spiral(_))
    }

    /// Largest action code the policy can emit, or `None` if unbounded.
    pub fn max_action(&self) -> Option<ActionId> {
        match self {
            ActionPolicy::Spiral(_)   => None,
            ActionPolicy::EightWay(_) => Some(ActionId(8)),
            ActionPolicy::FourWay(_)  => Some(ActionId(4)),
        }
    }
}

impl ActionModel for ActionPolicy {
    fn infer(
        &self,
        grid:   &GridParameters,
        from:   StateId,
        to:     StateId,
        origin: Option<Coord>,
    ) -> ActionResult<Vec<Step>> {
        match self {
            ActionPolicy::Spiral(m)   => m.infer(grid, from, to, origin),
            ActionPolicy::EightWay(m) => m.infer(grid, from, to, origin),
            ActionPolicy::FourWay(m)  => m.infer(grid, from, to, origin),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ActionPolicy::Spiral(m)   => m.name(),
            ActionPolicy::EightWay(m) => m.name(),
            ActionPolicy::FourWay(m)  => m.name(),
        }
    }
}
