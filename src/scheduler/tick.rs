//! Request-level entry point for tick simulations.
//!
//! # Algorithm
//!
//! 1. Validate the batch and the unit count.
//! 2. Load jobs into the registry and order them by arrival time.
//! 3. Tick until the registry empties (see [`Simulation`]).
//! 4. Reduce completion records into the per-submitter summary.
//!
//! # Complexity
//! O(T * n log n) where T = ticks simulated, n = jobs pending.

use super::{Simulation, SimulationRun};
use crate::config::SimulationConfig;
use crate::dispatching::RuleEngine;
use crate::error::Result;
use crate::models::Job;

/// Input container for a simulation.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Jobs to simulate, in ingestion order.
    pub jobs: Vec<Job>,
    /// Run parameters.
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request over `jobs` with default parameters.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the number of processing units.
    pub fn with_units(mut self, unit_count: usize) -> Self {
        self.config.unit_count = unit_count;
        self
    }

    /// Replaces the run parameters.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Priority-driven tick scheduler.
///
/// # Example
///
/// ```
/// use tick_schedule::models::Job;
/// use tick_schedule::scheduler::{SimulationRequest, TickScheduler};
///
/// let jobs = vec![
///     Job::new("alice", "p1", 0, 1).with_sequence(1),
///     Job::new("bob", "p2", 0, 1).with_sequence(2),
/// ];
/// let request = SimulationRequest::new(jobs).with_units(2);
///
/// let run = TickScheduler::new().schedule_request(&request).unwrap();
/// assert_eq!(run.log.completion_for("alice"), Some(1));
/// assert_eq!(run.log.completion_for("bob"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    rule_engine: RuleEngine,
}

impl TickScheduler {
    /// Creates a scheduler with the default policy (highest priority,
    /// then earliest arrival).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule engine used for eligibility ordering.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Simulates `jobs` on `unit_count` units to completion.
    ///
    /// # Errors
    /// Fails before the first tick if there are no units or the batch is
    /// invalid.
    pub fn schedule(&self, jobs: &[Job], unit_count: usize) -> Result<SimulationRun> {
        let simulation = Simulation::new(jobs.to_vec(), unit_count, self.rule_engine.clone())?;
        Ok(simulation.run())
    }

    /// Simulates a request.
    pub fn schedule_request(&self, request: &SimulationRequest) -> Result<SimulationRun> {
        self.schedule(&request.jobs, request.config.unit_count)
    }
}
