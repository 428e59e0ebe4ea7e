//! `aisd-traj` — turns a flat stream of position records into normalized,
//! aliased trajectories of grid states.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`trajectory`] | `Fix`, `RawTrack`, `TrackPoint`, `Trajectory`, `NormalizedTrajectory` |
//! | [`group`]      | `group_records` (entity id → dense track list)            |
//! | [`normalize`]  | `Normalizer`, `NormalizeReport`, `drop_self_transitions`, `assign_aliases` |
//! | [`error`]      | `TrajError`, `TrajResult<T>`                              |
//!
//! # Normalization steps
//!
//! ```text
//! group by entity id          (first-seen order, every record kept)
//! per entity:
//!   stable sort by timestamp  (ties keep input order)
//!   assign grid states
//!   drop consecutive repeats  (first point of each run survives)
//!   drop if < min_states left
//! alias survivors 0, 1, 2, … in first-seen order
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-entity steps on Rayon's thread pool.      |
//! | `fx-hash`  | Uses FxHash for the entity-id map.                     |

pub mod error;
pub mod group;
pub mod normalize;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use error::{TrajError, TrajResult};
pub use group::group_records;
pub use normalize::{assign_aliases, drop_self_transitions, NormalizeReport, Normalizer};
pub use trajectory::{Fix, NormalizedTrajectory, RawTrack, TrackPoint, Trajectory};
