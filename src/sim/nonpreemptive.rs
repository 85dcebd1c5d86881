//! Non-preemptive policies: FCFS and SJF.
//!
//! Both run every elected job to completion in a single segment. FCFS
//! fixes the order up front (stable sort by arrival), so it walks the
//! jobs sequentially and idle-fills any gap before each one. SJF
//! re-elects among the ready set after every completion.

use super::context::RunContext;
use crate::models::Job;

/// First-Come-First-Served.
///
/// Jobs run in arrival order; equal arrivals keep their input order
/// (stable sort). The CPU idles up to a job's arrival when it gets the
/// CPU before the job exists.
pub(crate) fn run_fcfs(jobs: &[Job]) -> RunContext {
    let mut ctx = RunContext::new(jobs);

    let mut order: Vec<usize> = (0..ctx.states.len()).collect();
    order.sort_by_key(|&i| ctx.states[i].job.arrival);

    for index in order {
        let arrival = ctx.states[index].job.arrival;
        if ctx.clock < arrival {
            ctx.timeline.push_idle(ctx.clock, arrival);
            ctx.clock = arrival;
        }
        let burst = ctx.states[index].remaining;
        ctx.run_for(index, burst);
    }

    ctx
}

/// Shortest-Job-First, non-preemptive.
///
/// Repeatedly elects the ready job with the smallest burst (ties by
/// input order) and runs it to completion. An empty ready set jumps the
/// clock to the next arrival.
pub(crate) fn run_sjf(jobs: &[Job]) -> RunContext {
    let mut ctx = RunContext::new(jobs);

    while !ctx.all_finished() {
        match ctx.select_ready(|s| s.job.burst) {
            Some(index) => {
                let burst = ctx.states[index].remaining;
                ctx.run_for(index, burst);
            }
            None => ctx.advance_to_next_arrival(),
        }
    }

    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SegmentLabel;

    fn completion(ctx: &RunContext, id: &str) -> i64 {
        ctx.states
            .iter()
            .find(|s| s.id() == id)
            .map(|s| s.completion)
            .unwrap()
    }

    #[test]
    fn test_fcfs_reference_trace() {
        // A(0,5), B(1,3), C(2,8) → completions 5, 8, 16.
        let jobs = vec![
            Job::new("A", 5),
            Job::new("B", 3).with_arrival(1),
            Job::new("C", 8).with_arrival(2),
        ];
        let ctx = run_fcfs(&jobs);

        assert_eq!(completion(&ctx, "A"), 5);
        assert_eq!(completion(&ctx, "B"), 8);
        assert_eq!(completion(&ctx, "C"), 16);
        // One whole-burst segment per job, no idle.
        assert_eq!(ctx.timeline.len(), 3);
        assert!(!ctx.timeline.has_idle());
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let jobs = vec![Job::new("A", 2), Job::new("B", 3).with_arrival(5)];
        let ctx = run_fcfs(&jobs);

        assert_eq!(ctx.timeline.segments[1].label, SegmentLabel::Idle);
        assert_eq!(ctx.timeline.segments[1].start, 2);
        assert_eq!(ctx.timeline.segments[1].end, 5);
        assert_eq!(completion(&ctx, "B"), 8);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let jobs = vec![
            Job::new("X", 4).with_arrival(3),
            Job::new("Y", 2).with_arrival(3),
        ];
        let ctx = run_fcfs(&jobs);
        assert_eq!(ctx.timeline.segments[0].label, SegmentLabel::Job("X".into()));
        assert_eq!(ctx.timeline.span(), Some((3, 9)));
        assert_eq!(completion(&ctx, "X"), 7);
        assert_eq!(completion(&ctx, "Y"), 9);
    }

    #[test]
    fn test_sjf_reference_trace() {
        // A(0,7), B(2,4), C(4,1), D(5,4). At t=7 the shortest ready job
        // is C, then B beats D on the input-order tie.
        let jobs = vec![
            Job::new("A", 7),
            Job::new("B", 4).with_arrival(2),
            Job::new("C", 1).with_arrival(4),
            Job::new("D", 4).with_arrival(5),
        ];
        let ctx = run_sjf(&jobs);

        assert_eq!(completion(&ctx, "A"), 7);
        assert_eq!(completion(&ctx, "C"), 8);
        assert_eq!(completion(&ctx, "B"), 12);
        assert_eq!(completion(&ctx, "D"), 16);
    }

    #[test]
    fn test_sjf_only_considers_arrived_jobs() {
        // B is shorter but arrives after A has the CPU; SJF is
        // non-preemptive so A runs to completion first.
        let jobs = vec![Job::new("A", 6), Job::new("B", 1).with_arrival(1)];
        let ctx = run_sjf(&jobs);
        assert_eq!(completion(&ctx, "A"), 6);
        assert_eq!(completion(&ctx, "B"), 7);
        assert_eq!(ctx.timeline.len(), 2);
    }

    #[test]
    fn test_sjf_idle_jump() {
        let jobs = vec![Job::new("A", 2), Job::new("B", 2).with_arrival(5)];
        let ctx = run_sjf(&jobs);
        assert!(ctx.timeline.has_idle());
        assert_eq!(ctx.timeline.span(), Some((0, 7)));
        assert!(ctx.timeline.is_contiguous());
    }

    #[test]
    fn test_late_first_arrival_has_no_leading_idle() {
        let jobs = vec![Job::new("A", 2).with_arrival(4)];
        let ctx = run_sjf(&jobs);
        assert!(!ctx.timeline.has_idle());
        assert_eq!(ctx.timeline.span(), Some((4, 6)));
    }
}
