//! Input validation for simulation runs.
//!
//! Checks the caller-supplied job set before any policy runs. Detects:
//! - Empty job sets (aggregate statistics would be undefined)
//! - Non-positive bursts
//! - Negative arrival times
//! - Duplicate job IDs
//!
//! Invalid input is never coerced: clamping a zero burst to 1 would
//! silently change the simulation semantics, so every violation is
//! reported and the run is refused.

use std::collections::HashSet;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The job set is empty.
    EmptyJobSet,
    /// A job needs less than one unit of CPU time.
    NonPositiveBurst,
    /// A job arrives before t=0.
    NegativeArrival,
    /// Two jobs share the same ID.
    DuplicateId,
    /// The round robin quantum is less than one unit.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job set ahead of a simulation run.
///
/// Checks:
/// 1. At least one job
/// 2. Every burst ≥ 1
/// 3. Every arrival ≥ 0
/// 4. No duplicate job IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobSet,
            "Job set is empty",
        ));
        return Err(errors);
    }

    let mut ids = HashSet::new();
    for job in jobs {
        if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Job '{}' has non-positive burst {}", job.id, job.burst),
            ));
        }

        if job.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Job '{}' has negative arrival {}", job.id, job.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
