//! Job registry.
//!
//! The registry is the sole owner of every unfinished job. It is an
//! insertion-ordered, contiguous sequence: removal closes the gap and
//! reordering happens in place, so there are never holes or duplicates.
//!
//! Units and completion records refer to jobs by [`JobId`] only.

use crate::models::{Job, JobId, Ticks};

/// Insertion-ordered collection of unfinished jobs.
#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    jobs: Vec<Job>,
}

impl JobRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `jobs` in the given order.
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        let mut registry = Self::new();
        for job in jobs {
            registry.insert(job);
        }
        registry
    }

    /// Appends a job, preserving ingestion order.
    pub fn insert(&mut self, job: Job) {
        debug_assert!(
            !self.contains(job.id()),
            "job {} inserted twice",
            job.id()
        );
        self.jobs.push(job);
    }

    /// Removes a job by identity.
    ///
    /// Returns the removed job, or `None` if it was not present. Removing
    /// an absent job is a no-op.
    pub fn remove(&mut self, id: JobId) -> Option<Job> {
        let position = self.position(id)?;
        Some(self.jobs.remove(position))
    }

    /// Number of jobs held.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Whether a job with this id is present.
    pub fn contains(&self, id: JobId) -> bool {
        self.position(id).is_some()
    }

    /// Looks up a job by id.
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id() == id)
    }

    /// Job at a position in the current order.
    pub fn at(&self, position: usize) -> Option<&Job> {
        self.jobs.get(position)
    }

    /// Mutable job at a position in the current order.
    pub fn at_mut(&mut self, position: usize) -> Option<&mut Job> {
        self.jobs.get_mut(position)
    }

    /// Jobs in current order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    /// Jobs in current order, as a slice.
    pub fn as_slice(&self) -> &[Job] {
        &self.jobs
    }

    /// Mutable access for in-place reordering.
    ///
    /// The slice length is fixed, so callers can permute jobs but never
    /// add or drop one.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Job] {
        &mut self.jobs
    }

    /// Orders jobs by arrival time, stable with respect to insertion order.
    ///
    /// Establishes the precondition the eligibility sorter relies on:
    /// absent further reordering, earlier arrivals come first.
    pub fn order_by_arrival(&mut self) {
        self.jobs.sort_by_key(|j| j.arrival_time);
    }

    /// Total outstanding work across all jobs.
    pub fn remaining_work(&self) -> Ticks {
        self.jobs.iter().map(|j| j.remaining).sum()
    }

    fn position(&self, id: JobId) -> Option<usize> {
        self.jobs.iter().position(|j| j.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(seq: JobId, arrival: Ticks) -> Job {
        Job::new(format!("u{seq}"), format!("p{seq}"), arrival, 2).with_sequence(seq)
    }

    fn ids(registry: &JobRegistry) -> Vec<JobId> {
        registry.iter().map(|j| j.id()).collect()
    }

    #[test]
    fn test_insert_preserves_order() {
        let registry = JobRegistry::from_jobs(vec![make_job(1, 0), make_job(2, 0), make_job(3, 0)]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert_eq!(ids(&registry), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_middle_closes_gap() {
        let mut registry =
            JobRegistry::from_jobs(vec![make_job(1, 0), make_job(2, 0), make_job(3, 0)]);
        let removed = registry.remove(2).unwrap();
        assert_eq!(removed.id(), 2);
        assert_eq!(ids(&registry), vec![1, 3]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = JobRegistry::from_jobs(vec![make_job(1, 0)]);
        assert!(registry.remove(1).is_some());
        assert!(registry.remove(1).is_none());
        assert!(registry.remove(99).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_order_by_arrival_is_stable() {
        let mut registry = JobRegistry::from_jobs(vec![
            make_job(1, 4),
            make_job(2, 0),
            make_job(3, 4),
            make_job(4, 0),
        ]);
        registry.order_by_arrival();
        assert_eq!(ids(&registry), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_lookup_and_remaining_work() {
        let registry = JobRegistry::from_jobs(vec![make_job(1, 0), make_job(2, 3)]);
        assert!(registry.contains(2));
        assert_eq!(registry.get(2).map(|j| j.arrival_time), Some(3));
        assert_eq!(registry.at(0).map(|j| j.id()), Some(1));
        assert!(registry.get(7).is_none());
        assert_eq!(registry.remaining_work(), 4);
    }
}
