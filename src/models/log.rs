//! Execution log model.
//!
//! The execution log is the time-ordered output of a run: one entry per
//! unit of work allocated, idle markers for units left free while the
//! next job in order has not arrived, closing markers for every unit, and
//! the per-submitter summary.

use serde::{Deserialize, Serialize};

use super::{Ticks, UnitId};

/// One line of the execution timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEntry {
    /// One tick of `process` ran during `[time, end)`.
    Allocation {
        /// Tick at which the work was performed.
        time: Ticks,
        /// Process name.
        process: String,
        /// Submitting user.
        submitter: String,
        /// Exclusive end (`time + 1`).
        end: Ticks,
    },
    /// Unit `unit` had nothing to run at `time`.
    Idle {
        /// Tick of the idle marker.
        time: Ticks,
        /// Idle unit.
        unit: UnitId,
    },
}

impl LogEntry {
    /// Allocation entry for one tick of work at `time`.
    pub fn allocation(
        time: Ticks,
        process: impl Into<String>,
        submitter: impl Into<String>,
    ) -> Self {
        Self::Allocation {
            time,
            process: process.into(),
            submitter: submitter.into(),
            end: time + 1,
        }
    }

    /// Idle marker for `unit` at `time`.
    pub fn idle(time: Ticks, unit: UnitId) -> Self {
        Self::Idle { time, unit }
    }

    /// Tick of this entry.
    pub fn time(&self) -> Ticks {
        match self {
            Self::Allocation { time, .. } | Self::Idle { time, .. } => *time,
        }
    }

    /// Label for the report's Job column.
    pub fn label(&self) -> String {
        match self {
            Self::Allocation { process, .. } => process.clone(),
            Self::Idle { unit, .. } => format!("UNIT{unit}IDLE"),
        }
    }

    /// Whether this is an idle marker.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }
}

/// Per-submitter completion line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// Submitting user.
    pub submitter: String,
    /// Exclusive completion time of the submitter's last job.
    pub completed_at: Ticks,
}

impl SummaryLine {
    /// Creates a summary line.
    pub fn new(submitter: impl Into<String>, completed_at: Ticks) -> Self {
        Self {
            submitter: submitter.into(),
            completed_at,
        }
    }
}

/// Complete execution log of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionLog {
    /// Allocation and idle entries, in emission order.
    pub entries: Vec<LogEntry>,
    /// Summary lines, in reduction order.
    pub summary: Vec<SummaryLine>,
}

impl ExecutionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a timeline entry.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Appends a summary line.
    pub fn push_summary(&mut self, line: SummaryLine) {
        self.summary.push(line);
    }

    /// Allocation entries for a process.
    pub fn allocations_for_process(&self, process: &str) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, LogEntry::Allocation { process: p, .. } if p == process))
            .collect()
    }

    /// Number of allocation entries (ticks of work performed).
    pub fn allocation_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_idle()).count()
    }

    /// Number of idle markers, including closing markers.
    pub fn idle_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_idle()).count()
    }

    /// Summary completion time for a submitter.
    pub fn completion_for(&self, submitter: &str) -> Option<Ticks> {
        self.summary
            .iter()
            .find(|s| s.submitter == submitter)
            .map(|s| s.completed_at)
    }

    /// Latest exclusive end over all allocations.
    pub fn makespan(&self) -> Ticks {
        self.entries
            .iter()
            .filter_map(|e| match e {
                LogEntry::Allocation { end, .. } => Some(*end),
                LogEntry::Idle { .. } => None,
            })
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> ExecutionLog {
        let mut log = ExecutionLog::new();
        log.push(LogEntry::allocation(0, "p2", "bob"));
        log.push(LogEntry::allocation(1, "p2", "bob"));
        log.push(LogEntry::idle(2, 1));
        log.push(LogEntry::allocation(3, "p1", "alice"));
        log.push_summary(SummaryLine::new("bob", 2));
        log.push_summary(SummaryLine::new("alice", 4));
        log
    }

    #[test]
    fn test_allocation_entry_end() {
        let entry = LogEntry::allocation(5, "p1", "alice");
        assert_eq!(entry.time(), 5);
        assert!(matches!(entry, LogEntry::Allocation { end: 6, .. }));
        assert_eq!(entry.label(), "p1");
    }

    #[test]
    fn test_idle_label() {
        let entry = LogEntry::idle(3, 2);
        assert!(entry.is_idle());
        assert_eq!(entry.label(), "UNIT2IDLE");
    }

    #[test]
    fn test_log_counts() {
        let log = sample_log();
        assert_eq!(log.allocation_count(), 3);
        assert_eq!(log.idle_count(), 1);
        assert_eq!(log.allocations_for_process("p2").len(), 2);
        assert_eq!(log.makespan(), 4);
    }

    #[test]
    fn test_completion_for() {
        let log = sample_log();
        assert_eq!(log.completion_for("bob"), Some(2));
        assert_eq!(log.completion_for("carol"), None);
    }

    #[test]
    fn test_empty_log() {
        let log = ExecutionLog::new();
        assert_eq!(log.makespan(), 0);
        assert_eq!(log.allocation_count(), 0);
    }

    #[test]
    fn test_log_serde_json() {
        let log = sample_log();
        let json = serde_json::to_string(&log).unwrap();
        let back: ExecutionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
