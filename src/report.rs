//! Text rendering of run results.
//!
//! Renders a [`SimulationRun`] as the classic results table plus the
//! aggregate metrics, and a timeline as a lane-per-job text Gantt. Both
//! return plain `String`s; nothing here performs I/O, so callers decide
//! where the output goes.

use crate::models::{SegmentLabel, Timeline};
use crate::sim::SimulationRun;

/// Renders the per-job results table and aggregate metrics for one run.
///
/// Columns: ID, Arr, Burst, Prio, Comp, Wait, Turn. Jobs appear in input
/// order. Aggregates are formatted to two decimals.
pub fn render_report(run: &SimulationRun) -> String {
    let mut out = String::new();

    out.push_str("==============================\n");
    out.push_str(&format!("{} RESULTS\n", run.policy.name()));
    out.push_str("==============================\n");
    out.push_str(&format!(
        "{:>3} {:>4} {:>5} {:>4} {:>4} {:>4} {:>4}\n",
        "ID", "Arr", "Burst", "Prio", "Comp", "Wait", "Turn"
    ));

    for state in &run.jobs {
        out.push_str(&format!(
            "{:>3} {:>4} {:>5} {:>4} {:>4} {:>4} {:>4}\n",
            state.id(),
            state.job.arrival,
            state.job.burst,
            state.job.priority,
            state.completion,
            state.waiting,
            state.turnaround,
        ));
    }

    let metrics = run.metrics();
    out.push('\n');
    out.push_str(&format!("Average waiting time     = {:.2}\n", metrics.avg_waiting));
    out.push_str(&format!("Average turnaround time  = {:.2}\n", metrics.avg_turnaround));
    out.push_str(&format!("CPU utilization          = {:.2}%\n", metrics.cpu_utilization));
    out.push_str(&format!("Throughput (jobs/time)   = {:.2}\n", metrics.throughput));

    out
}

/// Renders a timeline as one text lane per label.
///
/// The idle lane comes first when present, then job lanes in order of
/// first appearance. Each segment prints as `[start-end)`.
pub fn render_gantt(timeline: &Timeline) -> String {
    let mut lanes: Vec<SegmentLabel> = Vec::new();
    if timeline.has_idle() {
        lanes.push(SegmentLabel::Idle);
    }
    lanes.extend(
        timeline
            .job_lanes()
            .into_iter()
            .map(|id| SegmentLabel::Job(id.to_string())),
    );

    let width = lanes
        .iter()
        .map(|label| label.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for lane in &lanes {
        out.push_str(&format!("{:>width$} |", lane.to_string()));
        for segment in &timeline.segments {
            if segment.label == *lane {
                out.push_str(&format!(" [{}-{})", segment.start, segment.end));
            }
        }
        out.push('\n');
    }

    out
}
