//! Simulation domain models.
//!
//! Provides the data types shared by the registry, the dispatching rules,
//! the tick engine, and the reporting layer.
//!
//! # Domain Mappings
//!
//! | tick-schedule | OS scheduling | Batch cluster | Print shop |
//! |---------------|---------------|---------------|------------|
//! | Job | Process | Batch job | Print job |
//! | ProcessingUnit | CPU core | Node slot | Printer |
//! | CompletionRecord | Exit event | Job finish | Job done |
//! | ExecutionLog | Trace | Accounting log | Spool log |

mod completion;
mod job;
mod log;
mod unit;

pub use completion::CompletionRecord;
pub use job::{Job, JobId, Ticks};
pub use log::{ExecutionLog, LogEntry, SummaryLine};
pub use unit::{ProcessingUnit, UnitId};
