//! Job model.
//!
//! A job is one unit of submitted work: a named process owned by a
//! submitter, arriving at a known tick and requiring a fixed number of
//! ticks of processing.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Simulated time, in ticks.
pub type Ticks = u64;

/// Identity of a job: its arrival sequence number.
///
/// Sequence numbers are assigned at ingestion, starting at 1, and are
/// unique within a batch.
pub type JobId = u64;

/// A job to be simulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Submitting user.
    pub submitter: String,
    /// Process name (shown in the execution log).
    pub process: String,
    /// Tick at which the job becomes eligible.
    pub arrival_time: Ticks,
    /// Total work required (ticks, > 0).
    pub duration: Ticks,
    /// Work still outstanding. Starts at `duration`, never increases.
    pub remaining: Ticks,
    /// Ingestion-order key. Tie-break and report order, not a time.
    pub sequence: JobId,
    /// Scheduling priority (higher = more eligible).
    pub priority: i64,
}

impl Job {
    /// Creates a job with full remaining work and priority 0.
    pub fn new(
        submitter: impl Into<String>,
        process: impl Into<String>,
        arrival_time: Ticks,
        duration: Ticks,
    ) -> Self {
        Self {
            submitter: submitter.into(),
            process: process.into(),
            arrival_time,
            duration,
            remaining: duration,
            sequence: 0,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the arrival sequence number.
    pub fn with_sequence(mut self, sequence: JobId) -> Self {
        self.sequence = sequence;
        self
    }

    /// Identity of this job.
    #[inline]
    pub fn id(&self) -> JobId {
        self.sequence
    }

    /// Whether the job has arrived by tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }

    /// Whether all work has been consumed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the job can be allocated at tick `now`.
    pub fn is_eligible(&self, now: Ticks) -> bool {
        self.has_arrived(now) && !self.is_complete()
    }

    /// Consumes one tick of work. Returns `true` if this completed the job.
    pub fn consume_tick(&mut self) -> bool {
        debug_assert!(
            self.remaining > 0,
            "job {} allocated with no remaining work",
            self.sequence
        );
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// Work already performed.
    pub fn work_done(&self) -> Ticks {
        self.duration - self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("alice", "p1", 3, 5)
            .with_priority(7)
            .with_sequence(2);

        assert_eq!(job.submitter, "alice");
        assert_eq!(job.process, "p1");
        assert_eq!(job.arrival_time, 3);
        assert_eq!(job.duration, 5);
        assert_eq!(job.remaining, 5);
        assert_eq!(job.priority, 7);
        assert_eq!(job.id(), 2);
    }

    #[test]
    fn test_job_arrival_and_eligibility() {
        let job = Job::new("alice", "p1", 3, 1);
        assert!(!job.has_arrived(2));
        assert!(job.has_arrived(3));
        assert!(job.is_eligible(4));
    }

    #[test]
    fn test_job_consume_until_complete() {
        let mut job = Job::new("bob", "p2", 0, 2);
        assert!(!job.consume_tick());
        assert_eq!(job.work_done(), 1);
        assert!(job.consume_tick());
        assert!(job.is_complete());
        assert!(!job.is_eligible(10));
    }
}
