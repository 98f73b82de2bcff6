//! Job batch ingestion.
//!
//! Reads one job per line, whitespace-separated:
//!
//! ```text
//! submitter process arrival duration priority
//! ```
//!
//! Ingestion stops at the first blank or malformed line; everything read
//! before it is kept. Sequence numbers start at 1 and are assigned to
//! successfully parsed jobs in read order.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::error::IngestError;
use crate::models::{Job, JobId, Ticks};

/// Why ingestion stopped before end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReason {
    /// 1-based line number of the offending line.
    pub line: usize,
    /// What was wrong with it.
    pub message: String,
}

/// Jobs read from an input stream.
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    /// Jobs in read order, sequence numbers assigned.
    pub jobs: Vec<Job>,
    /// Set if a blank or malformed line ended ingestion early.
    pub stopped: Option<StopReason>,
}

/// Line-oriented job reader.
#[derive(Debug, Clone, Default)]
pub struct JobReader {
    skip_header: bool,
}

impl JobReader {
    /// Creates a reader that treats every line as a job record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the first line before reading jobs.
    pub fn with_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    /// Reads jobs until end of input or the first blank/malformed line.
    ///
    /// # Errors
    /// Only I/O failures are errors; malformed input ends ingestion and is
    /// reported in [`IngestOutcome::stopped`].
    pub fn read<R: BufRead>(&self, reader: R) -> Result<IngestOutcome, IngestError> {
        let mut outcome = IngestOutcome::default();
        let mut next_sequence: JobId = 1;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            if self.skip_header && index == 0 {
                continue;
            }

            match parse_job(&line) {
                Ok(job) => {
                    outcome.jobs.push(job.with_sequence(next_sequence));
                    next_sequence += 1;
                }
                Err(message) => {
                    warn!(line = line_number, %message, "job ingestion stopped");
                    outcome.stopped = Some(StopReason {
                        line: line_number,
                        message,
                    });
                    break;
                }
            }
        }

        debug!(jobs = outcome.jobs.len(), "jobs ingested");
        Ok(outcome)
    }
}

/// Parses a single job record.
///
/// Extra trailing fields are ignored.
pub fn parse_job(line: &str) -> Result<Job, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return Err("blank line".to_string());
    }
    if fields.len() < 5 {
        return Err(format!("expected 5 fields, found {}", fields.len()));
    }

    let arrival: Ticks = parse_field(fields[2], "arrival")?;
    let duration: Ticks = parse_field(fields[3], "duration")?;
    let priority: i64 = parse_field(fields[4], "priority")?;
    if duration == 0 {
        return Err("duration must be positive".to_string());
    }

    Ok(Job::new(fields[0], fields[1], arrival, duration).with_priority(priority))
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid {name} '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_job() {
        let job = parse_job("alice  p1 3\t5 -2").unwrap();
        assert_eq!(job.submitter, "alice");
        assert_eq!(job.process, "p1");
        assert_eq!(job.arrival_time, 3);
        assert_eq!(job.duration, 5);
        assert_eq!(job.remaining, 5);
        assert_eq!(job.priority, -2);
    }

    #[test]
    fn test_parse_job_rejects_bad_records() {
        assert_eq!(parse_job("   ").unwrap_err(), "blank line");
        assert!(parse_job("alice p1 3 5").unwrap_err().contains("5 fields"));
        assert!(parse_job("alice p1 x 5 1").unwrap_err().contains("arrival"));
        assert!(parse_job("alice p1 -1 5 1").unwrap_err().contains("arrival"));
        assert!(parse_job("alice p1 0 0 1").unwrap_err().contains("positive"));
    }

    #[test]
    fn test_read_assigns_sequence_numbers() {
        let input = "User Process Arrival Duration Priority\n\
                     alice p1 0 3 1\n\
                     bob p2 0 2 5\n";
        let outcome = JobReader::new()
            .with_header(true)
            .read(Cursor::new(input))
            .unwrap();

        assert!(outcome.stopped.is_none());
        let seqs: Vec<JobId> = outcome.jobs.iter().map(|j| j.sequence).collect();
        assert_eq!(seqs, vec![1, 2]);
        assert_eq!(outcome.jobs[1].submitter, "bob");
    }

    #[test]
    fn test_read_stops_at_malformed_line() {
        let input = "alice p1 0 3 1\nbob p2 zero 2 5\ncarol p3 0 1 1\n";
        let outcome = JobReader::new().read(Cursor::new(input)).unwrap();

        assert_eq!(outcome.jobs.len(), 1);
        let stopped = outcome.stopped.unwrap();
        assert_eq!(stopped.line, 2);
        assert!(stopped.message.contains("arrival"));
    }

    #[test]
    fn test_read_stops_at_blank_line() {
        let input = "alice p1 0 3 1\n\ncarol p3 0 1 1\n";
        let outcome = JobReader::new().read(Cursor::new(input)).unwrap();
        assert_eq!(outcome.jobs.len(), 1);
        assert_eq!(outcome.stopped.map(|s| s.line), Some(2));
    }

    #[test]
    fn test_read_empty_input() {
        let outcome = JobReader::new()
            .with_header(true)
            .read(Cursor::new(""))
            .unwrap();
        assert!(outcome.jobs.is_empty());
        assert!(outcome.stopped.is_none());
    }
}
