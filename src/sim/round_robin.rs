//! Round robin policy.
//!
//! Keeps an explicit FIFO ready queue of job indices plus an arrival
//! cursor over the jobs pre-sorted by arrival. The head job runs for
//! `min(quantum, remaining)` units as one segment; jobs that arrived
//! during the slice are admitted before the preempted job is requeued,
//! so an arrival landing exactly on a slice boundary queues ahead of the
//! job that just ran.

use std::collections::VecDeque;

use super::context::RunContext;
use crate::models::{Job, TimeStep};

/// Round robin with the given time quantum (≥ 1, checked by the caller).
pub(crate) fn run_round_robin(jobs: &[Job], quantum: TimeStep) -> RunContext {
    let mut ctx = RunContext::new(jobs);

    // Arrival cursor: indices in stable arrival order.
    let mut by_arrival: Vec<usize> = (0..ctx.states.len()).collect();
    by_arrival.sort_by_key(|&i| ctx.states[i].job.arrival);

    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut cursor = 0;

    loop {
        // Admit everything that has arrived by now.
        while cursor < by_arrival.len()
            && ctx.states[by_arrival[cursor]].job.arrival <= ctx.clock
        {
            ready.push_back(by_arrival[cursor]);
            cursor += 1;
        }

        let Some(index) = ready.pop_front() else {
            if cursor >= by_arrival.len() {
                break;
            }
            ctx.advance_to_next_arrival();
            continue;
        };

        let slice = quantum.min(ctx.states[index].remaining);
        ctx.run_for(index, slice);

        // Admission before requeue: arrivals during the slice go ahead
        // of the job that just ran.
        while cursor < by_arrival.len()
            && ctx.states[by_arrival[cursor]].job.arrival <= ctx.clock
        {
            ready.push_back(by_arrival[cursor]);
            cursor += 1;
        }

        if !ctx.states[index].is_finished() {
            ready.push_back(index);
        }
    }

    ctx
}
