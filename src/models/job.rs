//! Job model.
//!
//! A job is a single-threaded unit of CPU work with an arrival time, a
//! total burst, and a priority. The immutable input description ([`Job`])
//! is kept separate from the mutable per-run bookkeeping ([`JobState`]) so
//! one policy's run can never leak state into another's.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::TimeStep;

/// An immutable job description supplied by the caller.
///
/// `priority` follows the classic convention: smaller number = more
/// urgent. It only influences the preemptive priority policy but is
/// carried through every run for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier (timeline label and report key).
    pub id: String,
    /// Time at which the job becomes eligible to run (≥ 0).
    pub arrival: TimeStep,
    /// Total CPU time required (≥ 1).
    pub burst: TimeStep,
    /// Scheduling priority; smaller = more urgent.
    pub priority: i32,
}

impl Job {
    /// Creates a job arriving at t=0 with the given burst and priority 0.
    pub fn new(id: impl Into<String>, burst: TimeStep) -> Self {
        Self {
            id: id.into(),
            arrival: 0,
            burst,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: TimeStep) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the priority (smaller = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Per-run execution state for one job.
///
/// Created fresh at the start of every policy run; finalized exactly once,
/// when `remaining` reaches zero. `completion` stays 0 until then, matching
/// the report-row convention, so completion status is always read through
/// [`JobState::is_finished`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobState {
    /// The input description this state was built from.
    pub job: Job,
    /// CPU time still required.
    pub remaining: TimeStep,
    /// Time of finishing; 0 until the job completes.
    pub completion: TimeStep,
    /// turnaround − burst. Derived at finalization.
    pub waiting: TimeStep,
    /// completion − arrival. Derived at finalization.
    pub turnaround: TimeStep,
}

impl JobState {
    /// Creates the initial state for a run: full burst remaining.
    pub fn new(job: Job) -> Self {
        let remaining = job.burst;
        Self {
            job,
            remaining,
            completion: 0,
            waiting: 0,
            turnaround: 0,
        }
    }

    /// The job identifier.
    pub fn id(&self) -> &str {
        &self.job.id
    }

    /// Whether the job has arrived by `now` and still needs CPU.
    pub fn is_ready(&self, now: TimeStep) -> bool {
        self.job.arrival <= now && self.remaining > 0
    }

    /// Whether the job has run for its full burst.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Records completion at `now` and derives turnaround and waiting.
    ///
    /// Must only be called once, when `remaining` has reached zero.
    pub fn finalize(&mut self, now: TimeStep) {
        self.completion = now;
        self.turnaround = self.completion - self.job.arrival;
        self.waiting = self.turnaround - self.job.burst;
    }
}
