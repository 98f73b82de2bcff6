//! Completion record model.

use serde::{Deserialize, Serialize};

use super::{Job, JobId, Ticks};

/// The fact that a job finished.
///
/// Created exactly once per job, at the tick its remaining work reached
/// zero. `completion_time` is the start of that tick; reports add one to
/// obtain the exclusive end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Submitting user.
    pub submitter: String,
    /// Process that completed.
    pub process: String,
    /// Tick during which the last unit of work was performed.
    pub completion_time: Ticks,
    /// Arrival-order key (the job's sequence number, possibly inherited
    /// from an earlier job of the same submitter after reduction).
    pub arrival_key: JobId,
    /// Arrival time of the completed job.
    pub arrival_time: Ticks,
}

impl CompletionRecord {
    /// Records the completion of `job` at tick `now`.
    pub fn for_job(job: &Job, now: Ticks) -> Self {
        debug_assert!(job.is_complete(), "job {} is not complete", job.sequence);
        Self {
            submitter: job.submitter.clone(),
            process: job.process.clone(),
            completion_time: now,
            arrival_key: job.sequence,
            arrival_time: job.arrival_time,
        }
    }

    /// Exclusive completion time (end of the completing tick).
    #[inline]
    pub fn completed_at(&self) -> Ticks {
        self.completion_time + 1
    }

    /// Ticks from arrival to exclusive completion.
    #[inline]
    pub fn turnaround(&self) -> Ticks {
        self.completed_at().saturating_sub(self.arrival_time)
    }
}
