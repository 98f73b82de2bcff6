//! Scheduling context for dispatching rule evaluation.

use crate::models::Ticks;

/// Runtime state passed to dispatching rules.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulated tick.
    pub current_time: Ticks,
    /// Units free at the start of allocation.
    pub free_units: usize,
}

impl SchedulingContext {
    /// Creates a context at the given tick.
    pub fn at_time(current_time: Ticks) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets the number of free units.
    pub fn with_free_units(mut self, free_units: usize) -> Self {
        self.free_units = free_units;
        self
    }

    /// Ticks a job arriving at `arrival_time` has waited so far.
    pub fn waited(&self, arrival_time: Ticks) -> Ticks {
        self.current_time.saturating_sub(arrival_time)
    }
}
