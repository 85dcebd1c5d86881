//! Policy engines and simulation entry points.
//!
//! Each policy run is a pure function from a job set (plus a quantum for
//! round robin) to a finalized [`SimulationRun`]: the execution timeline
//! and the per-job results. Runs are mutually independent; each operates
//! on its own private copy of the input, so the caller may execute
//! several policies in parallel without any locking.
//!
//! # Policies
//!
//! - **FCFS**: arrival order, non-preemptive
//! - **SJF**: shortest burst among ready, non-preemptive
//! - **SRTF**: shortest remaining time, preemptive (1-unit steps)
//! - **Priority**: smallest priority number, preemptive (1-unit steps)
//! - **Round Robin**: FIFO queue with a fixed time quantum
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod context;
mod metrics;
mod nonpreemptive;
mod preemptive;
mod round_robin;

pub use metrics::RunMetrics;

use serde::{Deserialize, Serialize};

use crate::models::{Job, JobState, TimeStep, Timeline};
use crate::validation::{validate_jobs, ValidationError, ValidationErrorKind};

/// A CPU scheduling policy.
///
/// # Example
///
/// ```
/// use sched_sim::{Job, Policy};
///
/// let jobs = vec![
///     Job::new("A", 5),
///     Job::new("B", 3).with_arrival(1),
/// ];
///
/// let run = Policy::Fcfs.run(&jobs).unwrap();
/// assert_eq!(run.jobs[0].completion, 5);
/// assert_eq!(run.jobs[1].completion, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive SJF).
    Srtf,
    /// Preemptive priority; smaller number = more urgent.
    PriorityPreemptive,
    /// Round robin with a fixed time quantum (≥ 1).
    RoundRobin {
        /// Maximum slice granted per turn.
        quantum: TimeStep,
    },
}

impl Policy {
    /// Human-readable policy name, as used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF (non-preemptive)",
            Policy::Srtf => "SJF (preemptive)",
            Policy::PriorityPreemptive => "Priority (preemptive)",
            Policy::RoundRobin { .. } => "Round Robin",
        }
    }

    /// All five policies in canonical order, round robin last.
    pub fn all(quantum: TimeStep) -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Srtf,
            Policy::PriorityPreemptive,
            Policy::RoundRobin { quantum },
        ]
    }

    /// Simulates this policy over the given jobs.
    ///
    /// Validates the input first and refuses to run on any violation;
    /// nothing is coerced. The run itself cannot fail: total remaining
    /// work strictly decreases, so every valid input terminates.
    pub fn run(&self, jobs: &[Job]) -> Result<SimulationRun, Vec<ValidationError>> {
        validate_jobs(jobs)?;

        if let Policy::RoundRobin { quantum } = self {
            if *quantum < 1 {
                return Err(vec![ValidationError::new(
                    ValidationErrorKind::NonPositiveQuantum,
                    format!("Round robin quantum must be positive, got {quantum}"),
                )]);
            }
        }

        let ctx = match self {
            Policy::Fcfs => nonpreemptive::run_fcfs(jobs),
            Policy::Sjf => nonpreemptive::run_sjf(jobs),
            Policy::Srtf => preemptive::run_srtf(jobs),
            Policy::PriorityPreemptive => preemptive::run_priority(jobs),
            Policy::RoundRobin { quantum } => round_robin::run_round_robin(jobs, *quantum),
        };

        Ok(SimulationRun {
            policy: self.clone(),
            jobs: ctx.states,
            timeline: ctx.timeline,
        })
    }
}

/// The finalized outcome of one policy run.
///
/// Handed read-only to the metrics aggregator and to report/visualizer
/// consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// The policy that produced this run.
    pub policy: Policy,
    /// Finalized per-job states, in input order.
    pub jobs: Vec<JobState>,
    /// The recorded execution timeline.
    pub timeline: Timeline,
}

impl SimulationRun {
    /// Aggregate metrics for this run.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics::calculate(&self.jobs)
    }
}

/// Runs all five policies over the same input.
///
/// Each policy simulates from its own fresh copy of `jobs`. Results come
/// back in the canonical order FCFS, SJF, SRTF, Priority, Round Robin.
pub fn simulate_all(
    jobs: &[Job],
    quantum: TimeStep,
) -> Result<Vec<SimulationRun>, Vec<ValidationError>> {
    Policy::all(quantum)
        .iter()
        .map(|policy| policy.run(jobs))
        .collect()
}
