//! Processing unit model.
//!
//! Units are the identical resources that consume job work, one tick of
//! one job per tick. A unit never owns a job: it holds the job's id for
//! the duration of a single tick.

use serde::{Deserialize, Serialize};

use super::{JobId, Ticks};

/// Stable unit identifier (1-based).
pub type UnitId = usize;

/// A processing unit in the fixed pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingUnit {
    /// Unit identifier, stable for the run.
    pub id: UnitId,
    /// Whether the unit has been allocated this tick.
    pub busy: bool,
    /// Job bound during the current tick.
    pub bound: Option<JobId>,
    /// Last tick at which the unit performed work.
    pub last_activity: Ticks,
    /// Total ticks of work performed.
    pub busy_ticks: Ticks,
}

impl ProcessingUnit {
    /// Creates a free unit.
    pub fn new(id: UnitId) -> Self {
        Self {
            id,
            busy: false,
            bound: None,
            last_activity: 0,
            busy_ticks: 0,
        }
    }

    /// Builds a pool of `count` units with ids `1..=count`.
    pub fn pool(count: usize) -> Vec<Self> {
        (1..=count).map(Self::new).collect()
    }

    /// Binds a job for the current tick.
    pub fn bind(&mut self, job: JobId, now: Ticks) {
        debug_assert!(!self.busy, "unit {} bound twice in one tick", self.id);
        self.busy = true;
        self.bound = Some(job);
        self.last_activity = now;
        self.busy_ticks += 1;
    }

    /// Frees the unit and returns the job it held, if any.
    pub fn release(&mut self) -> Option<JobId> {
        self.busy = false;
        self.bound.take()
    }

    /// Name used for idle markers in the execution log.
    pub fn idle_label(&self) -> String {
        format!("UNIT{}IDLE", self.id)
    }
}
