//! `aisd-pipeline` — drives grid inference, normalization, and action
//! inference over a batch of raw records.
//!
//! # Phases
//!
//! ```text
//! ① Filter    — drop records outside fixed bounds (bounded axes only).
//! ② Grid      — scan every remaining coordinate, freeze GridParameters.
//! ③ Normalize — group, sort, dedupe, length-filter, alias
//!               (parallel per entity with the `parallel` feature).
//! ④ Assemble  — per trajectory, infer actions for each state pair and
//!               append the terminal row (parallel per trajectory).
//! ⑤ Emit      — hand rows to the TransitionSink in sequence-id order.
//! ```
//!
//! Phase ② is a hard barrier: no state is assigned until the whole batch
//! has been scanned.  A logic error in ④ aborts the run before anything is
//! emitted.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aisd_core::{GridConfig, RunOptions};
//! use aisd_pipeline::{PipelineBuilder, VecSink};
//!
//! let pipeline = PipelineBuilder::new(RunOptions::default())
//!     .grid(GridConfig { grid_len: 0.1, ..GridConfig::default() })
//!     .build()?;
//! let mut sink = VecSink::default();
//! let summary = pipeline.run(records, &mut sink)?;
//! ```

pub mod assembler;
pub mod builder;
pub mod error;
pub mod pipeline;
pub mod sink;


pub use assembler::TransitionAssembler;
pub use builder::PipelineBuilder;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, RunSummary};
pub use sink::{NoopSink, TransitionSink, VecSink};
