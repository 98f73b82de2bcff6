//! Rule engine for eligibility ordering.
//!
//! Composes dispatching rules in sequence and applies them to the job
//! registry in place. Arrived jobs are ordered by the rule chain; jobs
//! that have not yet arrived are never pulled forward and keep their
//! relative order behind the arrived ones.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Job;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the current registry order (stable).
    #[default]
    Stable,
    /// Lowest arrival sequence number first.
    BySequence,
}

/// A composable rule engine for job eligibility.
///
/// # Example
/// ```
/// use tick_schedule::dispatching::{RuleEngine, SchedulingContext};
/// use tick_schedule::models::Job;
///
/// let mut jobs = vec![
///     Job::new("alice", "p1", 0, 3).with_priority(1).with_sequence(1),
///     Job::new("bob", "p2", 0, 2).with_priority(5).with_sequence(2),
///     Job::new("carol", "p3", 9, 1).with_priority(9).with_sequence(3),
/// ];
/// let engine = RuleEngine::default();
/// engine.sort_eligible(&mut jobs, &SchedulingContext::at_time(0));
///
/// let order: Vec<&str> = jobs.iter().map(|j| j.process.as_str()).collect();
/// assert_eq!(order, ["p2", "p1", "p3"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every arrived job ties, so only the arrived/not-yet
    /// arrived partition is applied.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
        }
    }

    /// Highest priority first, earliest arrival on ties.
    pub fn priority_then_arrival() -> Self {
        Self::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::Fifo)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Reorders `jobs` in place for the tick in `context`.
    ///
    /// Arrived jobs move to the front, ordered by the rule chain. Jobs not
    /// yet arrived follow in their existing relative order. Slices of
    /// length 0 or 1 are left untouched.
    pub fn sort_eligible(&self, jobs: &mut [Job], context: &SchedulingContext) {
        if jobs.len() < 2 {
            return;
        }

        let now = context.current_time;
        // Stable sort: full ties and the not-yet-arrived tail keep their order.
        jobs.sort_by(|a, b| match (a.has_arrived(now), b.has_arrived(now)) {
            (true, true) => self.compare_sequential(a, b, context),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        });
    }

    /// Evaluates a single job and returns scores from each rule.
    pub fn evaluate(&self, job: &Job, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(job, context)).collect()
    }

    fn compare_sequential(&self, a: &Job, b: &Job, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ordering = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::BySequence => a.sequence.cmp(&b.sequence),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::priority_then_arrival()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobId, Ticks};
    use proptest::prelude::*;

    fn make_job(seq: JobId, arrival: Ticks, priority: i64) -> Job {
        Job::new(format!("u{seq}"), format!("p{seq}"), arrival, 1)
            .with_priority(priority)
            .with_sequence(seq)
    }

    fn order(jobs: &[Job]) -> Vec<JobId> {
        jobs.iter().map(|j| j.sequence).collect()
    }

    #[test]
    fn test_priority_first() {
        let mut jobs = vec![make_job(1, 0, 1), make_job(2, 0, 5), make_job(3, 0, 3)];
        RuleEngine::default().sort_eligible(&mut jobs, &SchedulingContext::at_time(0));
        assert_eq!(order(&jobs), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_priority_earliest_arrival() {
        let mut jobs = vec![make_job(1, 3, 2), make_job(2, 1, 2), make_job(3, 2, 2)];
        RuleEngine::default().sort_eligible(&mut jobs, &SchedulingContext::at_time(5));
        assert_eq!(order(&jobs), vec![2, 3, 1]);
    }

    #[test]
    fn test_full_tie_keeps_current_order() {
        let mut jobs = vec![make_job(3, 0, 2), make_job(1, 0, 2), make_job(2, 0, 2)];
        RuleEngine::default().sort_eligible(&mut jobs, &SchedulingContext::at_time(0));
        assert_eq!(order(&jobs), vec![3, 1, 2]);
    }

    #[test]
    fn test_by_sequence_tie_breaker() {
        let mut jobs = vec![make_job(3, 0, 2), make_job(1, 0, 2), make_job(2, 0, 2)];
        let engine = RuleEngine::default().with_final_tie_breaker(TieBreaker::BySequence);
        engine.sort_eligible(&mut jobs, &SchedulingContext::at_time(0));
        assert_eq!(order(&jobs), vec![1, 2, 3]);
    }

    #[test]
    fn test_unarrived_jobs_trail_in_relative_order() {
        // 1 and 3 have not arrived at t=2; a high priority must not pull them forward.
        let mut jobs = vec![
            make_job(1, 5, 9),
            make_job(2, 0, 1),
            make_job(3, 4, 8),
            make_job(4, 2, 3),
        ];
        RuleEngine::default().sort_eligible(&mut jobs, &SchedulingContext::at_time(2));
        assert_eq!(order(&jobs), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_short_slices_untouched() {
        let engine = RuleEngine::default();
        let ctx = SchedulingContext::at_time(0);
        let mut empty: Vec<Job> = Vec::new();
        engine.sort_eligible(&mut empty, &ctx);
        assert!(empty.is_empty());

        let mut single = vec![make_job(1, 7, 0)];
        engine.sort_eligible(&mut single, &ctx);
        assert_eq!(order(&single), vec![1]);
    }

    #[test]
    fn test_extreme_priorities() {
        let mut jobs = vec![
            make_job(1, 0, i64::MIN),
            make_job(2, 0, i64::MIN + 1),
            make_job(3, 0, i64::MAX),
        ];
        RuleEngine::default().sort_eligible(&mut jobs, &SchedulingContext::at_time(0));
        assert_eq!(order(&jobs), vec![3, 2, 1]);
    }

    #[test]
    fn test_custom_rule_chain() {
        let mut a = make_job(1, 0, 5);
        a.remaining = 4;
        let mut b = make_job(2, 0, 1);
        b.remaining = 1;
        let mut jobs = vec![a, b];
        let engine = RuleEngine::new().with_rule(rules::Lwkr);
        engine.sort_eligible(&mut jobs, &SchedulingContext::at_time(0));
        assert_eq!(order(&jobs), vec![2, 1]);
        assert_eq!(engine.rule_names(), vec!["LWKR"]);
    }

    #[test]
    fn test_evaluate_scores() {
        let job = make_job(1, 2, 7);
        let engine = RuleEngine::default();
        assert_eq!(engine.evaluate(&job, &SchedulingContext::at_time(3)), vec![!7, 2]);
    }

    proptest! {
        #[test]
        fn prop_sort_partitions_and_orders(
            specs in prop::collection::vec((0u64..10, -3i64..4), 0..24),
            now in 0u64..10,
        ) {
            let mut jobs: Vec<Job> = specs
                .iter()
                .enumerate()
                .map(|(i, &(arrival, priority))| make_job(i as JobId + 1, arrival, priority))
                .collect();
            let unarrived_before: Vec<JobId> = jobs
                .iter()
                .filter(|j| !j.has_arrived(now))
                .map(|j| j.sequence)
                .collect();

            RuleEngine::default().sort_eligible(&mut jobs, &SchedulingContext::at_time(now));

            let arrived_count = jobs.iter().filter(|j| j.has_arrived(now)).count();
            prop_assert!(jobs[..arrived_count].iter().all(|j| j.has_arrived(now)));

            let unarrived_after: Vec<JobId> =
                jobs[arrived_count..].iter().map(|j| j.sequence).collect();
            prop_assert_eq!(unarrived_after, unarrived_before);

            for pair in jobs[..arrived_count].windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(
                    a.priority > b.priority
                        || (a.priority == b.priority && a.arrival_time <= b.arrival_time)
                );
            }
        }
    }
}
