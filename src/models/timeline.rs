//! Execution timeline model.
//!
//! A timeline is the append-only record of who held the CPU when: an
//! ordered sequence of half-open `[start, end)` segments, including
//! explicit idle gaps. Consecutive segments with the same label are kept
//! unmerged; the preemptive policies legitimately emit many short
//! back-to-back segments for the same job.
//!
//! # Invariant
//!
//! For a complete run the segments are contiguous, non-overlapping, and
//! cover `[first_arrival, last_completion]` exactly once. Every policy
//! engine appends through [`Timeline::push_run`] / [`Timeline::push_idle`]
//! and never reorders.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeStep;

/// Who a segment belongs to: a job, or nobody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentLabel {
    /// The CPU sat idle waiting for the next arrival.
    Idle,
    /// The named job held the CPU.
    Job(String),
}

impl SegmentLabel {
    /// The job id, if this is a job segment.
    pub fn job_id(&self) -> Option<&str> {
        match self {
            SegmentLabel::Idle => None,
            SegmentLabel::Job(id) => Some(id),
        }
    }
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentLabel::Idle => write!(f, "idle"),
            SegmentLabel::Job(id) => write!(f, "{id}"),
        }
    }
}

/// One contiguous stretch of CPU time: `[start, end)` with `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Owner of this stretch.
    pub label: SegmentLabel,
    /// Inclusive start time.
    pub start: TimeStep,
    /// Exclusive end time.
    pub end: TimeStep,
}

impl Segment {
    /// Segment length in time units.
    #[inline]
    pub fn duration(&self) -> TimeStep {
        self.end - self.start
    }
}

/// Chronological, append-only sequence of execution segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in non-decreasing start order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run segment for `job_id` over `[start, end)`.
    pub fn push_run(&mut self, job_id: impl Into<String>, start: TimeStep, end: TimeStep) {
        debug_assert!(start < end, "segment must have positive duration");
        self.segments.push(Segment {
            label: SegmentLabel::Job(job_id.into()),
            start,
            end,
        });
    }

    /// Appends an idle segment over `[start, end)`.
    pub fn push_idle(&mut self, start: TimeStep, end: TimeStep) {
        debug_assert!(start < end, "segment must have positive duration");
        self.segments.push(Segment {
            label: SegmentLabel::Idle,
            start,
            end,
        });
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment and end of the last, if any.
    pub fn span(&self) -> Option<(TimeStep, TimeStep)> {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => Some((first.start, last.end)),
            _ => None,
        }
    }

    /// Total duration of non-idle segments.
    pub fn busy_time(&self) -> TimeStep {
        self.segments
            .iter()
            .filter(|s| s.label != SegmentLabel::Idle)
            .map(Segment::duration)
            .sum()
    }

    /// Total duration covered by segments with the given label.
    pub fn time_for(&self, label: &SegmentLabel) -> TimeStep {
        self.segments
            .iter()
            .filter(|s| s.label == *label)
            .map(Segment::duration)
            .sum()
    }

    /// Whether any idle segment was recorded.
    pub fn has_idle(&self) -> bool {
        self.segments.iter().any(|s| s.label == SegmentLabel::Idle)
    }

    /// Distinct job ids in order of first appearance.
    ///
    /// This is the lane order renderers draw: one row per job, idle drawn
    /// as its own lane.
    pub fn job_lanes(&self) -> Vec<&str> {
        let mut lanes: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Some(id) = segment.label.job_id() {
                if !lanes.contains(&id) {
                    lanes.push(id);
                }
            }
        }
        lanes
    }

    /// Whether every segment starts exactly where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }
}
