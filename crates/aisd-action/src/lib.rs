//! `aisd-action` — reconstructs the elementary moves between two grid cells.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`model`]   | `ActionModel` trait, `ActionPolicy` (tagged strategy), `Step` |
//! | [`spiral`]  | `SpiralActions`, `spiral_index`, `spiral_offset`, `SpiralWalk` |
//! | [`compass`] | `EightWayActions`, `FourWayActions`, `Heading`               |
//! | [`error`]   | `ActionError`, `ActionResult<T>`                             |
//!
//! # Policies
//!
//! | Policy     | Steps per transition        | Action codes                       |
//! |------------|-----------------------------|------------------------------------|
//! | spiral     | exactly 1                   | unbounded square-spiral index      |
//! | 8-way      | `max(|Δrow|, |Δcol|)`       | E=1 NE=2 N=3 NW=4 W=5 SW=6 S=7 SE=8 |
//! | 4-way      | `|Δrow| + |Δcol|`           | E=1 N=2 W=3 S=4                    |
//!
//! A policy is picked once per run (see [`ActionPolicy::from_options`]) and
//! injected into the transition assembler.  Self-transitions must be removed
//! upstream; every policy rejects them with [`ActionError::SelfTransition`].

pub mod compass;
pub mod error;
pub mod model;
pub mod spiral;


pub use compass::{EightWayActions, FourWayActions, Heading};
pub use error::{ActionError, ActionResult};
pub use model::{ActionModel, ActionPolicy, Step};
pub use spiral::{spiral_index, spiral_offset, SpiralActions, SpiralCell, SpiralWalk};
