//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Priority**: PRIORITY
//! - **Arrival**: FIFO, SEQ
//! - **Work-based**: SPT, LWKR, MWKR
//!
//! # Score Convention
//! All rules return lower scores for more eligible jobs.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::{Job, Ticks};

fn ticks_score(ticks: Ticks) -> RuleScore {
    RuleScore::try_from(ticks).unwrap_or(RuleScore::MAX)
}

// ======================== Priority rules ========================

/// Highest priority first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        // Bitwise not reverses the order of every i64 without overflow.
        !job.priority
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}

// ======================== Arrival rules ========================

/// First In, First Out: earliest arrival time first.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        ticks_score(job.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Ingestion order: lowest arrival sequence number first.
#[derive(Debug, Clone, Copy)]
pub struct Sequence;

impl DispatchingRule for Sequence {
    fn name(&self) -> &'static str {
        "SEQ"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        ticks_score(job.sequence)
    }

    fn description(&self) -> &'static str {
        "Ingestion Order"
    }
}

// ======================== Work-based rules ========================

/// Shortest Processing Time: smallest total duration first.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        ticks_score(job.duration)
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Least Work Remaining.
///
/// Favors jobs closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct Lwkr;

impl DispatchingRule for Lwkr {
    fn name(&self) -> &'static str {
        "LWKR"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        ticks_score(job.remaining)
    }

    fn description(&self) -> &'static str {
        "Least Work Remaining"
    }
}

/// Most Work Remaining.
///
/// Prevents starvation of long jobs.
#[derive(Debug, Clone, Copy)]
pub struct Mwkr;

impl DispatchingRule for Mwkr {
    fn name(&self) -> &'static str {
        "MWKR"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        ticks_score(job.remaining).saturating_neg()
    }

    fn description(&self) -> &'static str {
        "Most Work Remaining"
    }
}

/// Longest waiting first, measured from arrival to the current tick.
#[derive(Debug, Clone, Copy)]
pub struct LongestWait;

impl DispatchingRule for LongestWait {
    fn name(&self) -> &'static str {
        "LWAIT"
    }

    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore {
        ticks_score(context.waited(job.arrival_time)).saturating_neg()
    }

    fn description(&self) -> &'static str {
        "Longest Wait"
    }
}
