//! CPU scheduling simulator.
//!
//! Simulates a finite set of jobs under the five classical scheduling
//! policies and derives per-job and aggregate performance metrics from
//! the resulting execution timeline. Time is purely symbolic: the engine
//! computes over integer units and never touches the wall clock.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `JobState`, `Segment`, `Timeline`
//! - **`sim`**: The five policy engines, `SimulationRun`, `RunMetrics`
//! - **`validation`**: Input integrity checks (empty sets, bad bursts/arrivals)
//! - **`generator`**: Random workload generation
//! - **`report`**: Text rendering of results tables and Gantt lanes
//!
//! # Example
//!
//! ```
//! use sched_sim::{simulate_all, Job};
//!
//! let jobs = vec![
//!     Job::new("A", 5),
//!     Job::new("B", 3).with_arrival(1).with_priority(1),
//! ];
//!
//! for run in simulate_all(&jobs, 2).unwrap() {
//!     let metrics = run.metrics();
//!     println!("{}: avg wait {:.2}", run.policy.name(), metrics.avg_waiting);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod generator;
pub mod models;
pub mod report;
pub mod sim;
pub mod validation;

pub use models::{Job, JobState, Segment, SegmentLabel, TimeStep, Timeline};
pub use sim::{simulate_all, Policy, RunMetrics, SimulationRun};
pub use validation::{validate_jobs, ValidationError, ValidationErrorKind, ValidationResult};
