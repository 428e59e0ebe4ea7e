//! Per-entity normalization and dense aliasing.

use aisd_core::SequenceId;
use aisd_grid::GridParameters;

use crate::{NormalizedTrajectory, RawTrack, TrackPoint, TrajError, TrajResult, Trajectory};

// ── NormalizeReport ───────────────────────────────────────────────────────────

/// Counters describing one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub entities_seen:    usize,
    pub entities_kept:    usize,
    pub fixes_in:         usize,
    /// Fixes removed because they repeated the previous point's state.
    pub self_transitions: usize,
    /// Points remaining across kept trajectories.
    pub points_kept:      usize,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Remove every point whose state equals the previous surviving point's
/// state.  The first point of each run is the one kept.
pub fn drop_self_transitions(mut points: Vec<TrackPoint>) -> Vec<TrackPoint> {
    points.dedup_by_key(|p| p.state);
    points
}

// ── Normalizer ────────────────────────────────────────────────────────────────

/// Applies sort → discretize → dedupe → length filter to each track, then
/// aliases the survivors.
///
/// Holds a frozen copy of the grid; it never changes during a pass.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    grid:       GridParameters,
    min_states: usize,
}

impl Normalizer {
    pub fn new(grid: GridParameters, min_states: usize) -> TrajResult<Self> {
        if min_states < 2 {
            return Err(TrajError::MinStates(min_states));
        }
        Ok(Self { grid, min_states })
    }

    pub fn grid(&self) -> &GridParameters {
        &self.grid
    }

    /// Normalize one entity.  Returns the trajectory and the number of
    /// self-transitions removed; the trajectory is `None` if too few states
    /// survive.
    pub fn normalize_track(&self, track: RawTrack) -> (Option<Trajectory>, usize) {
        let RawTrack { entity, entity_id, mut fixes } = track;

        // `sort_by` is stable: equal timestamps keep input order.
        fixes.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

        let points: Vec<TrackPoint> = fixes
            .iter()
            .map(|f| TrackPoint {
                coord:     f.coord,
                timestamp: f.timestamp,
                state:     self.grid.state_of(f.coord),
            })
            .collect();

        let before = points.len();
        let points = drop_self_transitions(points);
        let dropped = before - points.len();

        if points.len() < self.min_states {
            return (None, dropped);
        }
        (Some(Trajectory { entity, entity_id, points }), dropped)
    }

    /// Normalize every track and alias the survivors in first-seen order.
    ///
    /// With the `parallel` feature the per-entity work runs on Rayon; the
    /// results are collected in input order before aliasing, so the output
    /// is identical either way.
    pub fn normalize(&self, tracks: Vec<RawTrack>) -> (Vec<NormalizedTrajectory>, NormalizeReport) {
        let mut report = NormalizeReport {
            entities_seen: tracks.len(),
            fixes_in:      tracks.iter().map(|t| t.fixes.len()).sum(),
            ..NormalizeReport::default()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<(Option<Trajectory>, usize)> = tracks
            .into_iter()
            .map(|t| self.normalize_track(t))
            .collect();

        #[cfg(feature = "parallel")]
        let results: Vec<(Option<Trajectory>, usize)> = {
            use rayon::prelude::*;
            tracks
                .into_par_iter()
                .map(|t| self.normalize_track(t))
                .collect()
        };

        // ── Synchronization point: alias only after all filtering ─────────
        let mut kept = Vec::with_capacity(results.len());
        for (trajectory, dropped) in results {
            report.self_transitions += dropped;
            if let Some(t) = trajectory {
                kept.push(t);
            }
        }

        let normalized = assign_aliases(kept);
        report.entities_kept = normalized.len();
        report.points_kept = normalized.iter().map(|t| t.points.len()).sum();
        (normalized, report)
    }
}

/// Give each trajectory a dense `SequenceId` in slice order, starting at 0.
pub fn assign_aliases(trajectories: Vec<Trajectory>) -> Vec<NormalizedTrajectory> {
    trajectories
        .into_iter()
        .enumerate()
        .map(|(i, t)| NormalizedTrajectory {
            sequence_id: SequenceId(i as u32),
            entity_id:   t.entity_id,
            points:      t.points,
        })
        .collect()
}
