//! Dispatching rules and the eligibility sorter.
//!
//! Each tick the registry is reordered so that, among jobs that have
//! arrived, the most eligible job comes first. Jobs that have not yet
//! arrived trail the arrived ones in their existing relative order.
//!
//! Eligibility is expressed as a chain of dispatching rules evaluated
//! sequentially: the first rule that distinguishes two jobs decides, and
//! full ties keep the current registry order.
//!
//! # Usage
//!
//! ```
//! use tick_schedule::dispatching::{RuleEngine, SchedulingContext};
//! use tick_schedule::dispatching::rules;
//!
//! // Default policy: highest priority, then earliest arrival.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let context = SchedulingContext::at_time(0);
//! // engine.sort_eligible(&mut jobs, &context);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = more eligible (allocated first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates job eligibility.
///
/// # Score Convention
/// **Lower score = more eligible.** Rules return smaller values for jobs
/// that should be allocated first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a job given the current scheduling context.
    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
