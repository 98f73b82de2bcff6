//! Run parameters.

use serde::{Deserialize, Serialize};

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of processing units (must be at least 1).
    pub unit_count: usize,
    /// Whether job input starts with a header line to discard.
    pub skip_header: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            unit_count: 1,
            skip_header: true,
        }
    }
}

impl SimulationConfig {
    /// Creates a config for `unit_count` units.
    pub fn new(unit_count: usize) -> Self {
        Self {
            unit_count,
            ..Default::default()
        }
    }

    /// Sets the number of processing units.
    pub fn with_units(mut self, unit_count: usize) -> Self {
        self.unit_count = unit_count;
        self
    }

    /// Sets whether job input carries a header line.
    pub fn with_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }
}
