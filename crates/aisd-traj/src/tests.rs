//! Unit tests for aisd-traj.

use aisd_core::{Coord, RawRecord, SequenceId, StateId, Timestamp};
use aisd_grid::{Bounds, GridParameters};

use crate::{drop_self_transitions, group_records, Normalizer, TrackPoint, TrajError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 10 × 10 grid of 1° cells; state = 10 * floor(lat) + floor(lon).
fn grid10() -> GridParameters {
    GridParameters::new(
        Bounds { min_lon: 0.0, max_lon: 10.0, min_lat: 0.0, max_lat: 10.0 },
        1.0,
    )
    .unwrap()
}

/// A record placed at the center of `state` on `grid10`.
fn rec(id: &str, state: i64, t: f64) -> RawRecord {
    let (row, col) = (state / 10, state % 10);
    RawRecord::new(id, col as f64 + 0.5, row as f64 + 0.5, t)
}

fn point(state: i64) -> TrackPoint {
    TrackPoint {
        coord:     Coord::new(0.0, 0.0),
        timestamp: Timestamp(0.0),
        state:     StateId(state),
    }
}

fn states(points: &[TrackPoint]) -> Vec<i64> {
    points.iter().map(|p| p.state.0).collect()
}

// ── Grouping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grouping {
    use super::*;

    #[test]
    fn first_seen_order_and_all_records_kept() {
        let tracks = group_records(vec![
            rec("b", 1, 0.0),
            rec("a", 2, 0.0),
            rec("b", 3, 1.0),
            rec("c", 4, 0.0),
            rec("a", 5, 1.0),
        ]);
        let ids: Vec<&str> = tracks.iter().map(|t| t.entity_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(tracks[0].fixes.len(), 2);
        assert_eq!(tracks[1].fixes.len(), 2);
        assert_eq!(tracks[2].fixes.len(), 1);
        assert_eq!(tracks[1].entity.0, 1);
    }

    #[test]
    fn empty_input() {
        assert!(group_records(Vec::new()).is_empty());
    }
}

// ── Self-transition removal ───────────────────────────────────────────────────

#[cfg(test)]
mod dedupe {
    use super::*;

    #[test]
    fn collapses_runs_keeping_first() {
        let pts = vec![point(3), point(3), point(3), point(7), point(7)];
        assert_eq!(states(&drop_self_transitions(pts)), vec![3, 7]);
    }

    #[test]
    fn non_consecutive_repeats_survive() {
        let pts = vec![point(1), point(2), point(1), point(1), point(2)];
        assert_eq!(states(&drop_self_transitions(pts)), vec![1, 2, 1, 2]);
    }

    #[test]
    fn first_point_of_run_keeps_its_coordinate() {
        let grid = grid10();
        let norm = Normalizer::new(grid, 2).unwrap();
        let tracks = group_records(vec![
            RawRecord::new("v", 0.1, 0.1, 0.0),
            RawRecord::new("v", 0.9, 0.9, 1.0),
            RawRecord::new("v", 1.5, 0.5, 2.0),
        ]);
        let (out, _) = norm.normalize(tracks);
        assert_eq!(out[0].points[0].coord, Coord::new(0.1, 0.1));
        assert_eq!(states(&out[0].points), vec![0, 1]);
    }
}

// ── Normalizer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod normalizer {
    use super::*;

    #[test]
    fn rejects_min_states_below_two() {
        assert_eq!(Normalizer::new(grid10(), 1).unwrap_err(), TrajError::MinStates(1));
    }

    #[test]
    fn sorts_by_timestamp() {
        let norm = Normalizer::new(grid10(), 2).unwrap();
        let tracks = group_records(vec![rec("v", 30, 3.0), rec("v", 10, 1.0), rec("v", 20, 2.0)]);
        let (out, _) = norm.normalize(tracks);
        assert_eq!(states(&out[0].points), vec![10, 20, 30]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let norm = Normalizer::new(grid10(), 2).unwrap();
        let tracks = group_records(vec![
            rec("v", 5, 1.0),
            rec("v", 6, 0.0),
            rec("v", 7, 1.0),
            rec("v", 8, 1.0),
        ]);
        let (out, _) = norm.normalize(tracks);
        assert_eq!(states(&out[0].points), vec![6, 5, 7, 8]);
    }

    #[test]
    fn five_points_two_states_depends_on_min_states() {
        let records = || {
            vec![
                rec("v", 3, 0.0),
                rec("v", 3, 1.0),
                rec("v", 3, 2.0),
                rec("v", 7, 3.0),
                rec("v", 7, 4.0),
            ]
        };

        let (out, report) = Normalizer::new(grid10(), 3).unwrap().normalize(group_records(records()));
        assert!(out.is_empty());
        assert_eq!(report.entities_kept, 0);
        assert_eq!(report.self_transitions, 3);

        let (out, report) = Normalizer::new(grid10(), 2).unwrap().normalize(group_records(records()));
        assert_eq!(out.len(), 1);
        assert_eq!(states(&out[0].points), vec![3, 7]);
        assert_eq!(out[0].transition_count(), 1);
        assert_eq!(report.points_kept, 2);
    }

    #[test]
    fn aliases_are_dense_over_survivors() {
        let norm = Normalizer::new(grid10(), 2).unwrap();
        let tracks = group_records(vec![
            rec("stays", 1, 0.0),
            rec("stays", 1, 1.0),
            rec("moves-a", 1, 0.0),
            rec("moves-a", 2, 1.0),
            rec("single", 9, 0.0),
            rec("moves-b", 4, 0.0),
            rec("moves-b", 5, 1.0),
        ]);
        let (out, report) = norm.normalize(tracks);

        let got: Vec<(u32, &str)> = out.iter().map(|t| (t.sequence_id.0, t.entity_id.as_str())).collect();
        assert_eq!(got, vec![(0, "moves-a"), (1, "moves-b")]);
        assert_eq!(out[1].sequence_id, SequenceId(1));
        assert_eq!(report.entities_seen, 4);
        assert_eq!(report.entities_kept, 2);
        assert_eq!(report.fixes_in, 7);
    }

    #[test]
    fn deterministic_across_runs() {
        let records = vec![
            rec("x", 12, 5.0), rec("y", 40, 1.0), rec("x", 13, 6.0),
            rec("y", 41, 2.0), rec("x", 33, 7.0), rec("y", 41, 3.0),
        ];
        let norm = Normalizer::new(grid10(), 2).unwrap();
        let a = norm.normalize(group_records(records.clone()));
        let b = norm.normalize(group_records(records));
        assert_eq!(a, b);
    }
}
