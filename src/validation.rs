//! Input validation for simulation runs.
//!
//! Checks structural integrity of a job batch and the run parameters
//! before the tick loop starts. Detects:
//! - Duplicate arrival sequence numbers
//! - Jobs with zero duration (they could never be allocated)
//! - Jobs whose remaining work exceeds their duration, or is already zero
//! - Submitter or process names that are empty or contain whitespace
//! - An empty processing-unit pool (the loop could never make progress)

use crate::models::{Job, JobId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two jobs share the same arrival sequence number.
    DuplicateSequence,
    /// A job requires no work.
    ZeroDuration,
    /// A job's remaining work is larger than its duration.
    RemainingExceedsDuration,
    /// A job with positive duration has no remaining work.
    AlreadyComplete,
    /// A submitter or process name is empty or contains whitespace.
    InvalidName,
    /// The processing-unit pool is empty.
    NoProcessingUnits,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job batch.
///
/// Checks:
/// 1. No duplicate sequence numbers
/// 2. Every job has a positive duration
/// 3. Remaining work lies in `[1, duration]`
/// 4. Submitter and process are single non-empty tokens
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut sequences: HashSet<JobId> = HashSet::new();

    for job in jobs {
        if !sequences.insert(job.sequence) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSequence,
                format!("Duplicate sequence number: {}", job.sequence),
            ));
        }

        if job.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Job {} ('{}') has zero duration", job.sequence, job.process),
            ));
        }

        if job.remaining > job.duration {
            errors.push(ValidationError::new(
                ValidationErrorKind::RemainingExceedsDuration,
                format!(
                    "Job {} ('{}') has {} remaining of {}",
                    job.sequence, job.process, job.remaining, job.duration
                ),
            ));
        } else if job.remaining == 0 && job.duration > 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::AlreadyComplete,
                format!("Job {} ('{}') has no remaining work", job.sequence, job.process),
            ));
        }

        for (field, value) in [("submitter", &job.submitter), ("process", &job.process)] {
            if !is_token(value) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidName,
                    format!("Job {} has invalid {field} {value:?}", job.sequence),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Names are written as whitespace-separated log tokens.
fn is_token(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

/// Validates a job batch together with the run's unit count.
pub fn validate_input(jobs: &[Job], unit_count: usize) -> ValidationResult {
    let mut errors = match validate_jobs(jobs) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    if unit_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoProcessingUnits,
            "At least one processing unit is required",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
