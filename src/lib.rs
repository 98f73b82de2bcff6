//! Discrete-time simulation of priority scheduling on a pool of
//! identical processing units.
//!
//! A batch of jobs, each with an arrival tick, a duration, and a
//! priority, is run one tick at a time. Every tick the registry of
//! pending jobs is re-sorted so that arrived jobs come first in
//! descending priority (earlier arrival breaks ties), and free units are
//! handed out front to back. The run produces a timeline of allocations
//! and idle markers plus one completion line per submitter.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `ProcessingUnit`, `CompletionRecord`,
//!   `ExecutionLog`
//! - **`registry`**: Ordered collection of pending jobs
//! - **`dispatching`**: Rule-based ordering of the registry (Priority, FIFO, SPT, ...)
//! - **`scheduler`**: The tick engine, summary reduction, and run KPIs
//! - **`validation`**: Input integrity checks before a run starts
//! - **`ingest`** / **`report`**: Job input and execution log text formats
//! - **`workload`**: Seeded synthetic job batches
//! - **`cli`**: Command-line front end
//!
//! # Example
//!
//! ```
//! use tick_schedule::models::Job;
//! use tick_schedule::scheduler::TickScheduler;
//!
//! let jobs = vec![
//!     Job::new("alice", "p1", 0, 3).with_priority(1).with_sequence(1),
//!     Job::new("bob", "p2", 0, 2).with_priority(5).with_sequence(2),
//! ];
//! let run = TickScheduler::new().schedule(&jobs, 1).unwrap();
//! assert_eq!(run.log.completion_for("bob"), Some(2));
//! assert_eq!(run.log.completion_for("alice"), Some(5));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Silberschatz et al., "Operating System Concepts", ch. 5 (CPU scheduling)

pub mod cli;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod ingest;
pub mod models;
pub mod registry;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{EngineError, Result};
