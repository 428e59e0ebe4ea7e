//! Trajectory data at each stage of normalization.

use aisd_core::{Coord, EntityIndex, SequenceId, StateId, Timestamp};

/// A raw position fix, before discretization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub coord:     Coord,
    pub timestamp: Timestamp,
}

/// All fixes of one entity, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrack {
    /// Position of the entity in first-seen input order.
    pub entity:    EntityIndex,
    pub entity_id: String,
    pub fixes:     Vec<Fix>,
}

/// A fix with its grid state attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub coord:     Coord,
    pub timestamp: Timestamp,
    pub state:     StateId,
}

/// A time-ordered, self-transition-free track that passed the length filter
/// but has not been aliased yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub entity:    EntityIndex,
    pub entity_id: String,
    pub points:    Vec<TrackPoint>,
}

/// A surviving trajectory with its dense output alias.
///
/// Invariants: `points.len() >= min_states >= 2` and no two consecutive
/// points share a state.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTrajectory {
    pub sequence_id: SequenceId,
    pub entity_id:   String,
    pub points:      Vec<TrackPoint>,
}

impl NormalizedTrajectory {
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.points.iter().map(|p| p.state)
    }

    /// Number of state pairs, i.e. transitions before interpolation.
    pub fn transition_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}
