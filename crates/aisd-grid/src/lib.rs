//! `aisd-grid` — the flat degree-lattice grid that turns coordinates into
//! discrete states.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`params`] | `GridParameters` (frozen grid), `Cell` (row/col pair)          |
//! | [`bounds`] | `Bounds`, `BoundsAccumulator`, `infer_bounds`, `BoundingBoxFilter` |
//! | [`error`]  | `GridError`, `GridResult<T>`                                  |
//!
//! # Two phases
//!
//! Bounds inference must see every coordinate before any state is assigned:
//!
//! ```text
//! phase 1: BoundsAccumulator::observe(coord) for all records
//!          → finish(..) → GridParameters   (immutable from here on)
//! phase 2: GridParameters::state_of(coord) for all records
//! ```
//!
//! `GridParameters` is `Copy` and has no interior mutability, so it can be
//! shared freely across worker threads once built.

pub mod bounds;
pub mod error;
pub mod params;


pub use bounds::{infer_bounds, BoundingBoxFilter, Bounds, BoundsAccumulator};
pub use error::{GridError, GridResult};
pub use params::{Cell, GridParameters};
