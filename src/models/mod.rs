//! Scheduling domain models.
//!
//! Provides the core data types shared by every policy engine: the
//! immutable job description, the per-run execution state, and the
//! execution timeline a run produces.
//!
//! # Time Representation
//!
//! All times are symbolic integer units relative to t=0. The simulation
//! never touches the wall clock; one unit means whatever the caller wants
//! it to mean.

mod job;
mod timeline;

pub use job::{Job, JobState};
pub use timeline::{Segment, SegmentLabel, Timeline};

/// Symbolic simulation time, in abstract units from t=0.
pub type TimeStep = i64;
