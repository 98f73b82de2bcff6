//! Synthetic workload generation.
//!
//! Produces reproducible job batches for demos, benchmarks, and property
//! tests. Each tick of the horizon independently spawns a job with
//! probability `p_arrival`; a spawned job is short with probability
//! `p_short`.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Job, JobId, Ticks};

/// Parameters for [`bernoulli_jobs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadSpec {
    /// Ticks over which arrivals are drawn.
    pub horizon: Ticks,
    /// Per-tick arrival probability.
    pub p_arrival: f64,
    /// Probability that a spawned job is short.
    pub p_short: f64,
    /// Duration of short jobs.
    pub short_ticks: Ticks,
    /// Duration of long jobs.
    pub long_ticks: Ticks,
    /// Priorities are drawn uniformly from `0..=max_priority`.
    pub max_priority: i64,
    /// Number of distinct submitters.
    pub submitters: usize,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            horizon: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short_ticks: 2,
            long_ticks: 6,
            max_priority: 5,
            submitters: 4,
        }
    }
}

/// Generates a seeded batch of jobs in arrival order.
///
/// Sequence numbers start at 1. Submitters are named `user1..userN`.
pub fn bernoulli_jobs(spec: &WorkloadSpec, seed: u64) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();
    let submitters = spec.submitters.max(1);

    for t in 0..spec.horizon {
        if rng.random::<f64>() >= spec.p_arrival {
            continue;
        }

        let duration = if rng.random::<f64>() < spec.p_short {
            spec.short_ticks
        } else {
            spec.long_ticks
        };
        let priority = rng.random_range(0..=spec.max_priority.max(0));
        let user = rng.random_range(1..=submitters);
        let sequence = jobs.len() as JobId + 1;

        jobs.push(
            Job::new(format!("user{user}"), format!("job{sequence}"), t, duration.max(1))
                .with_priority(priority)
                .with_sequence(sequence),
        );
    }

    jobs
}
