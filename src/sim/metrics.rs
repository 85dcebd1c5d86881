//! Run performance metrics.
//!
//! Computes standard scheduling performance indicators from the
//! finalized job states of one policy run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround − burst) |
//! | Avg Turnaround | mean(completion − arrival) |
//! | CPU Utilization | total_burst / (last_completion − first_arrival) × 100 |
//! | Throughput | jobs / (last_completion − first_arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::JobState;

/// Aggregate performance indicators for one policy run.
///
/// Policy-agnostic: computed once per run from that run's own finalized
/// job states. The per-job rows themselves are the [`JobState`] list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean waiting time across all jobs.
    pub avg_waiting: f64,
    /// Mean turnaround time across all jobs.
    pub avg_turnaround: f64,
    /// Busy fraction of the schedule span, as a percentage.
    pub cpu_utilization: f64,
    /// Jobs completed per time unit over the schedule span.
    pub throughput: f64,
}

impl RunMetrics {
    /// Computes metrics from the finalized job states of one run.
    ///
    /// The validated simulation entry points never produce an empty
    /// state list; called directly with one, this returns the all-zero
    /// default rather than dividing by zero.
    pub fn calculate(states: &[JobState]) -> Self {
        if states.is_empty() {
            return Self::default();
        }

        let n = states.len() as f64;
        let total_waiting: i64 = states.iter().map(|s| s.waiting).sum();
        let total_turnaround: i64 = states.iter().map(|s| s.turnaround).sum();
        let total_burst: i64 = states.iter().map(|s| s.job.burst).sum();

        // min/max over a non-empty slice
        let first_arrival = states.iter().map(|s| s.job.arrival).min().unwrap_or(0);
        let last_completion = states.iter().map(|s| s.completion).max().unwrap_or(0);
        let span = last_completion - first_arrival;

        // Degenerate zero-span run: the CPU was never observed idle and
        // no meaningful rate exists.
        let (cpu_utilization, throughput) = if span == 0 {
            (100.0, 0.0)
        } else {
            (
                total_burst as f64 / span as f64 * 100.0,
                n / span as f64,
            )
        };

        Self {
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            cpu_utilization,
            throughput,
        }
    }
}
