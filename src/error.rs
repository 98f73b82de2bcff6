//! Error types for the engine, the text formats, and the command line.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that prevent a simulation from starting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("simulation requires at least one processing unit")]
    NoProcessingUnits,

    #[error("invalid job batch: {}", summarize(.0))]
    InvalidJobs(Vec<ValidationError>),
}

/// Errors raised while reading a job batch.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error reading jobs: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading an execution log token stream.
#[derive(Debug, Error)]
pub enum LogParseError {
    #[error("I/O error reading execution log: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    LogParse(#[from] LogParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Engine(_) => 2,
            Self::Ingest(_) | Self::LogParse(_) | Self::Io(_) => 3,
            Self::Json(_) => 1,
        }
    }
}

impl From<Vec<ValidationError>> for EngineError {
    fn from(errors: Vec<ValidationError>) -> Self {
        if errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoProcessingUnits)
        {
            Self::NoProcessingUnits
        } else {
            Self::InvalidJobs(errors)
        }
    }
}

impl LogParseError {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_messages() {
        assert_eq!(
            EngineError::NoProcessingUnits.to_string(),
            "simulation requires at least one processing unit"
        );

        let err = EngineError::InvalidJobs(vec![ValidationError::new(
            ValidationErrorKind::ZeroDuration,
            "Job 3 has zero duration",
        )]);
        assert_eq!(err.to_string(), "invalid job batch: Job 3 has zero duration");
    }

    #[test]
    fn test_unit_count_error_takes_precedence() {
        let zero = ValidationError::new(ValidationErrorKind::ZeroDuration, "Job 1 has zero duration");
        let units = ValidationError::new(ValidationErrorKind::NoProcessingUnits, "no units");

        assert_eq!(
            EngineError::from(vec![zero.clone(), units]),
            EngineError::NoProcessingUnits
        );
        assert_eq!(
            EngineError::from(vec![zero.clone()]),
            EngineError::InvalidJobs(vec![zero])
        );
    }

    #[test]
    fn test_cli_error_exit_codes() {
        let err = CliError::from(EngineError::NoProcessingUnits);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "simulation requires at least one processing unit");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(CliError::from(io).exit_code(), 3);
    }

    #[test]
    fn test_log_parse_error_message() {
        let err = LogParseError::malformed(4, "expected 2 or 4 fields");
        assert_eq!(err.to_string(), "line 4: expected 2 or 4 fields");
    }
}
