//! Execution log persistence and the human-readable report.
//!
//! # Token Stream
//!
//! The execution log is written as whitespace-separated lines so the
//! report phase can run apart from the simulation:
//!
//! ```text
//! 0 p2 bob 1            allocation: time process submitter end
//! 3 UNIT1IDLE UNIT1IDLE 0   idle marker
//! bob 2                 summary: submitter exclusive completion
//! ```
//!
//! All timeline lines precede all summary lines.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::error::LogParseError;
use crate::models::{ExecutionLog, LogEntry, SummaryLine, Ticks, UnitId};

/// Writes the log as a token stream.
///
/// Process and submitter names must be single tokens, as enforced by
/// [`validate_jobs`](crate::validation::validate_jobs).
pub fn write_log<W: Write>(log: &ExecutionLog, mut writer: W) -> std::io::Result<()> {
    for entry in &log.entries {
        match entry {
            LogEntry::Allocation {
                time,
                process,
                submitter,
                end,
            } => writeln!(writer, "{time} {process} {submitter} {end}")?,
            LogEntry::Idle { time, .. } => {
                let label = entry.label();
                writeln!(writer, "{time} {label} {label} 0")?;
            }
        }
    }
    for line in &log.summary {
        writeln!(writer, "{} {}", line.submitter, line.completed_at)?;
    }
    writer.flush()
}

/// Reads a token stream produced by [`write_log`].
///
/// Blank lines are ignored.
pub fn read_log<R: BufRead>(reader: R) -> Result<ExecutionLog, LogParseError> {
    let mut log = ExecutionLog::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.as_slice() {
            [] => continue,
            [time, process, submitter, end] => {
                if !log.summary.is_empty() {
                    return Err(LogParseError::malformed(
                        line_number,
                        "timeline entry after summary",
                    ));
                }
                let time = parse_ticks(time, line_number)?;
                let entry = match idle_unit(process, submitter, end) {
                    Some(unit) => LogEntry::idle(time, unit),
                    None => LogEntry::Allocation {
                        time,
                        process: (*process).to_string(),
                        submitter: (*submitter).to_string(),
                        end: parse_ticks(end, line_number)?,
                    },
                };
                log.push(entry);
            }
            [submitter, completed_at] => {
                let completed_at = parse_ticks(completed_at, line_number)?;
                log.push_summary(SummaryLine::new(*submitter, completed_at));
            }
            other => {
                return Err(LogParseError::malformed(
                    line_number,
                    format!("expected 2 or 4 fields, found {}", other.len()),
                ));
            }
        }
    }

    Ok(log)
}

/// Renders the `Time / Job` table followed by the `Summary` table.
pub fn render_report(log: &ExecutionLog) -> String {
    let mut out = String::from("Time\tJob\n");
    for entry in &log.entries {
        let _ = writeln!(out, "{}\t{}", entry.time(), entry.label());
    }

    out.push_str("\nSummary\n");
    for line in &log.summary {
        let _ = writeln!(out, "{}\t{}", line.submitter, line.completed_at);
    }
    out
}

fn parse_ticks(raw: &str, line: usize) -> Result<Ticks, LogParseError> {
    raw.parse()
        .map_err(|_| LogParseError::malformed(line, format!("invalid time '{raw}'")))
}

fn idle_unit(process: &str, submitter: &str, end: &str) -> Option<UnitId> {
    if process != submitter || end != "0" {
        return None;
    }
    process
        .strip_prefix("UNIT")?
        .strip_suffix("IDLE")?
        .parse()
        .ok()
}
