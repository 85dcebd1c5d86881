//! Random job-set generation.
//!
//! Produces workloads for exercising the policy engines without manual
//! entry: `n` jobs named `T1..Tn` with arrivals, bursts, and priorities
//! drawn uniformly from caller-supplied ranges. Bursts are always ≥ 1,
//! so generated sets pass validation by construction.

use rand::Rng;

use crate::models::{Job, TimeStep};

/// Parameters for a randomly generated job set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSetSpec {
    /// Number of jobs to generate.
    pub count: usize,
    /// Arrivals drawn from `0..=max_arrival`.
    pub max_arrival: TimeStep,
    /// Bursts drawn from `1..=max_burst`.
    pub max_burst: TimeStep,
    /// Priorities drawn from `1..=max_priority` (smaller = more urgent).
    pub max_priority: i32,
}

impl JobSetSpec {
    /// Creates a spec for `count` jobs with small default ranges:
    /// arrivals up to 20, bursts up to 10, priorities up to 5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the arrival range upper bound.
    pub fn with_max_arrival(mut self, max_arrival: TimeStep) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range upper bound.
    pub fn with_max_burst(mut self, max_burst: TimeStep) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the priority range upper bound.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }
}

/// Generates a job set from the spec using the given rng.
///
/// Generic over [`Rng`] so tests can drive it with a seeded generator.
pub fn generate<R: Rng + ?Sized>(spec: &JobSetSpec, rng: &mut R) -> Vec<Job> {
    (1..=spec.count)
        .map(|i| {
            Job::new(format!("T{i}"), rng.random_range(1..=spec.max_burst))
                .with_arrival(rng.random_range(0..=spec.max_arrival))
                .with_priority(rng.random_range(1..=spec.max_priority))
        })
        .collect()
}

/// Generates a job set from the spec using the thread rng.
pub fn random_jobs(spec: &JobSetSpec) -> Vec<Job> {
    generate(spec, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_jobs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_values_in_range() {
        let spec = JobSetSpec::new(50)
            .with_max_arrival(8)
            .with_max_burst(4)
            .with_max_priority(3);
        let mut rng = StdRng::seed_from_u64(7);
        let jobs = generate(&spec, &mut rng);

        assert_eq!(jobs.len(), 50);
        for job in &jobs {
            assert!((0..=8).contains(&job.arrival));
            assert!((1..=4).contains(&job.burst));
            assert!((1..=3).contains(&job.priority));
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(7);
        let jobs = generate(&JobSetSpec::new(3), &mut rng);
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_generated_set_passes_validation() {
        let mut rng = StdRng::seed_from_u64(42);
        let jobs = generate(&JobSetSpec::new(20), &mut rng);
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_same_seed_same_jobs() {
        let spec = JobSetSpec::new(10);
        let a = generate(&spec, &mut StdRng::seed_from_u64(99));
        let b = generate(&spec, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
