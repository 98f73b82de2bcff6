//! Summary reduction.
//!
//! Runs once, after the tick loop ends:
//!
//! 1. Deduplicate completion records by submitter. The survivor carries the
//!    latest completion time and the earliest arrival key among that
//!    submitter's jobs.
//! 2. Order survivors by arrival key.
//! 3. Close every unit's timeline with an idle marker at
//!    `last_activity + 1`.
//! 4. Emit one summary line per survivor at `completion_time + 1`.

use std::collections::HashMap;

use crate::models::{CompletionRecord, LogEntry, ProcessingUnit, SummaryLine};

/// Reduces completion records to one per submitter, in arrival-key order.
pub fn reduce_completions(records: &[CompletionRecord]) -> Vec<CompletionRecord> {
    let mut survivors: Vec<CompletionRecord> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.submitter.as_str()) {
            Some(&i) => {
                let existing = &mut survivors[i];
                let arrival_key = existing.arrival_key.min(record.arrival_key);
                // Records arrive in completion order, so ties go to the later one.
                if record.completion_time >= existing.completion_time {
                    *existing = record.clone();
                }
                existing.arrival_key = arrival_key;
            }
            None => {
                index.insert(record.submitter.as_str(), survivors.len());
                survivors.push(record.clone());
            }
        }
    }

    survivors.sort_by_key(|r| r.arrival_key);
    survivors
}

/// Closing idle marker for every unit, in pool order.
///
/// The pool is built in unit-id order and never reordered.
pub fn closing_markers(units: &[ProcessingUnit]) -> Vec<LogEntry> {
    units
        .iter()
        .map(|u| LogEntry::idle(u.last_activity + 1, u.id))
        .collect()
}

/// Summary lines with exclusive completion times.
pub fn summary_lines(reduced: &[CompletionRecord]) -> Vec<SummaryLine> {
    reduced
        .iter()
        .map(|r| SummaryLine::new(r.submitter.as_str(), r.completed_at()))
        .collect()
}
