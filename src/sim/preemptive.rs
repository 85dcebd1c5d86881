//! Preemptive policies: SRTF and priority.
//!
//! Both step the simulation one time unit at a time and re-elect after
//! every unit; that re-election is what realizes preemption, since a
//! newly arrived job with a better key wins the very next unit. The two
//! policies differ only in the key: remaining time for SRTF, priority
//! number for preemptive priority.
//!
//! The 1-unit stepping is deliberate. An event-driven variant (stepping
//! to the next arrival or completion) would produce the same final job
//! states, but the timeline contract here records the unmerged length-1
//! segments the stepping emits.

use super::context::{RunContext, SelectionKey};
use crate::models::{Job, TimeStep};

fn run_unit_stepped(jobs: &[Job], key: SelectionKey) -> RunContext {
    let mut ctx = RunContext::new(jobs);

    while !ctx.all_finished() {
        match ctx.select_ready(key) {
            Some(index) => ctx.run_for(index, 1),
            None => ctx.advance_to_next_arrival(),
        }
    }

    ctx
}

/// Shortest-Remaining-Time-First (preemptive SJF).
///
/// Each unit goes to the ready job with the least CPU time left, ties by
/// input order.
pub(crate) fn run_srtf(jobs: &[Job]) -> RunContext {
    run_unit_stepped(jobs, |s| s.remaining)
}

/// Preemptive priority scheduling.
///
/// Each unit goes to the most urgent ready job (smallest priority
/// number), ties by input order.
pub(crate) fn run_priority(jobs: &[Job]) -> RunContext {
    run_unit_stepped(jobs, |s| TimeStep::from(s.job.priority))
}
