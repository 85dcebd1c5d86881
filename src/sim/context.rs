//! Shared run state for the policy engines.
//!
//! Every policy run owns a [`RunContext`]: a fresh set of job states, the
//! timeline being recorded, and the simulation clock. The ready-set
//! selection, idle jump, and finalize bookkeeping live here so the five
//! engines differ only in their selection rule and preemption granularity.

use crate::models::{Job, JobState, TimeStep, Timeline};

/// Score returned by a selection key.
///
/// Lower scores = scheduled first, the same convention dispatching rules
/// use in the literature (SJF = smallest burst, priority = smallest
/// number).
pub(crate) type SelectionKey = fn(&JobState) -> TimeStep;

/// Mutable state of one policy run: job states, timeline, clock.
#[derive(Debug)]
pub(crate) struct RunContext {
    pub states: Vec<JobState>,
    pub timeline: Timeline,
    pub clock: TimeStep,
}

impl RunContext {
    /// Builds a fresh context from the input jobs.
    ///
    /// Each run gets its own private copies; nothing is shared across
    /// policy runs. The clock starts at the earliest arrival so the
    /// recorded timeline covers exactly `[first_arrival, last_completion]`
    /// with no leading idle segment.
    pub fn new(jobs: &[Job]) -> Self {
        let clock = jobs.iter().map(|j| j.arrival).min().unwrap_or(0);
        Self {
            states: jobs.iter().cloned().map(JobState::new).collect(),
            timeline: Timeline::new(),
            clock,
        }
    }

    /// Whether every job has run for its full burst.
    pub fn all_finished(&self) -> bool {
        self.states.iter().all(JobState::is_finished)
    }

    /// Index of the ready job with the lowest key, ties broken by input
    /// order.
    ///
    /// Returns `None` when no job is ready at the current clock; the
    /// caller then idles via [`RunContext::advance_to_next_arrival`].
    pub fn select_ready(&self, key: SelectionKey) -> Option<usize> {
        let mut best: Option<(usize, TimeStep)> = None;
        for (index, state) in self.states.iter().enumerate() {
            if !state.is_ready(self.clock) {
                continue;
            }
            let score = key(state);
            match best {
                Some((_, lowest)) if score >= lowest => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Jumps the clock to the next arrival among unfinished jobs,
    /// recording the gap as an idle segment.
    ///
    /// The simulation never busy-waits through idle periods one unit at a
    /// time; it moves straight to the next relevant event. No-op when all
    /// jobs are finished or the next arrival is not in the future.
    pub fn advance_to_next_arrival(&mut self) {
        let next = self
            .states
            .iter()
            .filter(|s| !s.is_finished())
            .map(|s| s.job.arrival)
            .min();

        if let Some(next) = next {
            if next > self.clock {
                self.timeline.push_idle(self.clock, next);
                self.clock = next;
            }
        }
    }

    /// Runs the job at `index` for `units` of CPU time as one segment.
    ///
    /// Advances the clock, decrements the job's remaining time, and
    /// finalizes it the moment the remaining time reaches zero.
    pub fn run_for(&mut self, index: usize, units: TimeStep) {
        debug_assert!(units >= 1, "a run slice must consume at least one unit");
        debug_assert!(units <= self.states[index].remaining);

        let start = self.clock;
        let end = start + units;
        self.timeline.push_run(self.states[index].id(), start, end);
        self.clock = end;

        let state = &mut self.states[index];
        state.remaining -= units;
        if state.is_finished() {
            state.finalize(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jobs() -> Vec<Job> {
        vec![
            Job::new("A", 5),
            Job::new("B", 3).with_arrival(4),
            Job::new("C", 3).with_arrival(4),
        ]
    }

    #[test]
    fn test_fresh_context() {
        let ctx = RunContext::new(&make_jobs());
        assert_eq!(ctx.clock, 0);
        assert!(ctx.timeline.is_empty());
        assert!(!ctx.all_finished());
        assert_eq!(ctx.states[0].remaining, 5);
    }

    #[test]
    fn test_clock_starts_at_first_arrival() {
        let ctx = RunContext::new(&[
            Job::new("A", 2).with_arrival(7),
            Job::new("B", 1).with_arrival(3),
        ]);
        assert_eq!(ctx.clock, 3);
    }

    #[test]
    fn test_select_ready_filters_unarrived() {
        let ctx = RunContext::new(&make_jobs());
        // Only A has arrived at t=0.
        assert_eq!(ctx.select_ready(|s| s.job.burst), Some(0));
    }

    #[test]
    fn test_select_ready_ties_break_by_input_order() {
        let mut ctx = RunContext::new(&make_jobs());
        ctx.clock = 4;
        // B and C tie on burst 3; B comes first in the input.
        assert_eq!(ctx.select_ready(|s| s.job.burst), Some(1));
    }

    #[test]
    fn test_select_ready_none_when_nothing_arrived() {
        let mut ctx = RunContext::new(&make_jobs());
        ctx.run_for(0, 5);
        ctx.clock = 3;
        // A is finished, B and C arrive at 4.
        assert_eq!(ctx.select_ready(|s| s.job.burst), None);
    }

    #[test]
    fn test_idle_jump_records_segment() {
        // A runs [0, 2), then nothing is ready until B arrives at 7.
        let mut ctx = RunContext::new(&[
            Job::new("A", 2),
            Job::new("B", 1).with_arrival(7),
        ]);
        ctx.run_for(0, 2);
        ctx.advance_to_next_arrival();
        assert_eq!(ctx.clock, 7);
        assert_eq!(ctx.timeline.len(), 2);
        assert!(ctx.timeline.has_idle());
        assert_eq!(ctx.timeline.span(), Some((0, 7)));
    }

    #[test]
    fn test_idle_jump_noop_when_job_already_arrived() {
        let mut ctx = RunContext::new(&make_jobs());
        ctx.advance_to_next_arrival();
        assert_eq!(ctx.clock, 0);
        assert!(ctx.timeline.is_empty());
    }

    #[test]
    fn test_run_for_partial_slice() {
        let mut ctx = RunContext::new(&make_jobs());
        ctx.run_for(0, 2);
        assert_eq!(ctx.clock, 2);
        assert_eq!(ctx.states[0].remaining, 3);
        assert!(!ctx.states[0].is_finished());
        assert_eq!(ctx.timeline.len(), 1);
    }

    #[test]
    fn test_run_for_finalizes_on_zero_remaining() {
        let mut ctx = RunContext::new(&make_jobs());
        ctx.run_for(0, 5);
        let state = &ctx.states[0];
        assert!(state.is_finished());
        assert_eq!(state.completion, 5);
        assert_eq!(state.turnaround, 5);
        assert_eq!(state.waiting, 0);
    }
}
