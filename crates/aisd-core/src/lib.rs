//! `aisd-core` — foundational types for the `aisd` AIS discretization toolkit.
//!
//! This crate is a dependency of every other `aisd-*` crate.  It has no
//! `aisd-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `SequenceId`, `EntityIndex`, `StateId`, `ActionId`      |
//! | [`geo`]       | `Coord` (lon/lat degrees), decimal rounding             |
//! | [`time`]      | `Timestamp` (seconds, totally ordered)                  |
//! | [`record`]    | `RawRecord`, `TransitionRecord`                         |
//! | [`options`]   | `RunOptions`, `GridConfig`                              |
//! | [`error`]     | `AisdError`, `AisdResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod options;
pub mod record;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AisdError, AisdResult};
pub use geo::Coord;
pub use ids::{ActionId, EntityIndex, SequenceId, StateId};
pub use options::{GridConfig, RunOptions};
pub use record::{RawRecord, TransitionRecord};
pub use time::Timestamp;
