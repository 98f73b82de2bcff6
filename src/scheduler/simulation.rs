//! Stepwise tick engine.
//!
//! `Simulation` owns the registry and the unit pool and advances one tick
//! per [`Simulation::step`]. Units refer to jobs by id only and are
//! cleared at the start of every tick, so a job is never bound to more
//! than one unit and never removed twice.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::summary;
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::error::EngineError;
use crate::models::{
    CompletionRecord, ExecutionLog, Job, JobId, LogEntry, ProcessingUnit, Ticks, UnitId,
};
use crate::registry::JobRegistry;
use crate::validation::validate_input;

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick that was simulated.
    pub time: Ticks,
    /// `(unit, job)` bindings made this tick, in allocation order.
    pub allocations: Vec<(UnitId, JobId)>,
    /// Units that logged an idle marker this tick.
    pub idle_units: Vec<UnitId>,
    /// Jobs whose remaining work reached zero this tick.
    pub completions: Vec<JobId>,
}

impl TickReport {
    fn new(time: Ticks) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }
}

/// Result of a finished simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Timeline entries, closing markers, and summary lines.
    pub log: ExecutionLog,
    /// One record per job, in completion order.
    pub completions: Vec<CompletionRecord>,
    /// One record per submitter, in arrival-key order.
    pub summary: Vec<CompletionRecord>,
    /// Final state of the unit pool.
    pub units: Vec<ProcessingUnit>,
    /// Number of ticks simulated.
    pub ticks: Ticks,
}

/// A tick-driven simulation over a fixed batch of jobs.
///
/// # Example
/// ```
/// use tick_schedule::dispatching::RuleEngine;
/// use tick_schedule::models::Job;
/// use tick_schedule::scheduler::Simulation;
///
/// let jobs = vec![
///     Job::new("alice", "p1", 0, 3).with_priority(1).with_sequence(1),
///     Job::new("bob", "p2", 0, 2).with_priority(5).with_sequence(2),
/// ];
/// let run = Simulation::new(jobs, 1, RuleEngine::default()).unwrap().run();
///
/// assert_eq!(run.log.completion_for("bob"), Some(2));
/// assert_eq!(run.log.completion_for("alice"), Some(5));
/// ```
#[derive(Debug)]
pub struct Simulation {
    registry: JobRegistry,
    units: Vec<ProcessingUnit>,
    engine: RuleEngine,
    now: Ticks,
    log: ExecutionLog,
    completions: Vec<CompletionRecord>,
    finished: bool,
}

impl Simulation {
    /// Prepares a run over `jobs` with `unit_count` processing units.
    ///
    /// Jobs are validated, loaded into the registry in the given order,
    /// and then ordered by arrival time (stable).
    ///
    /// # Errors
    /// `NoProcessingUnits` if `unit_count` is zero; `InvalidJobs` if the
    /// batch fails validation.
    pub fn new(
        jobs: Vec<Job>,
        unit_count: usize,
        engine: RuleEngine,
    ) -> crate::error::Result<Self> {
        validate_input(&jobs, unit_count).map_err(EngineError::from)?;

        let job_count = jobs.len();
        let mut registry = JobRegistry::from_jobs(jobs);
        registry.order_by_arrival();

        info!(
            units = unit_count,
            jobs = job_count,
            work = registry.remaining_work(),
            rules = ?engine.rule_names(),
            "simulation prepared"
        );

        Ok(Self {
            registry,
            units: ProcessingUnit::pool(unit_count),
            engine,
            now: 0,
            log: ExecutionLog::new(),
            completions: Vec::with_capacity(job_count),
            finished: false,
        })
    }

    /// Current simulated tick.
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Unfinished jobs in current order.
    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// The processing-unit pool.
    pub fn units(&self) -> &[ProcessingUnit] {
        &self.units
    }

    /// Timeline emitted so far.
    pub fn log(&self) -> &ExecutionLog {
        &self.log
    }

    /// Completion records emitted so far.
    pub fn completions(&self) -> &[CompletionRecord] {
        &self.completions
    }

    /// Whether the registry has emptied.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Simulates one tick.
    ///
    /// Returns `None` once every job has been reclaimed; the clock does
    /// not advance on that final call.
    pub fn step(&mut self) -> Option<TickReport> {
        if self.finished {
            return None;
        }

        self.reclaim();
        if self.registry.is_empty() {
            self.finished = true;
            return None;
        }

        if self.registry.len() > 1 {
            let context = SchedulingContext::at_time(self.now).with_free_units(self.units.len());
            self.engine
                .sort_eligible(self.registry.as_mut_slice(), &context);
        }

        let report = self.allocate();
        debug!(
            time = report.time,
            allocated = report.allocations.len(),
            idle = report.idle_units.len(),
            completed = report.completions.len(),
            pending = self.registry.len(),
            "tick"
        );

        self.now += 1;
        Some(report)
    }

    /// Runs to completion and reduces the results.
    pub fn run(mut self) -> SimulationRun {
        while self.step().is_some() {}
        self.finish()
    }

    /// Frees every unit and drops jobs that completed on the previous tick.
    fn reclaim(&mut self) {
        for unit in &mut self.units {
            let Some(id) = unit.release() else {
                continue;
            };
            if self.registry.get(id).is_some_and(Job::is_complete) {
                self.registry.remove(id);
            }
        }
    }

    /// Binds arrived jobs to free units for the current tick.
    fn allocate(&mut self) -> TickReport {
        let now = self.now;
        let mut report = TickReport::new(now);

        for position in 0..self.registry.len() {
            let Some(unit_index) = self.units.iter().position(|u| !u.busy) else {
                break;
            };
            let Some(job) = self.registry.at_mut(position) else {
                break;
            };

            // Arrived jobs were sorted ahead, so nothing behind this one can run.
            if !job.has_arrived(now) {
                for unit in self.units.iter().filter(|u| !u.busy) {
                    self.log.push(LogEntry::idle(now, unit.id));
                    report.idle_units.push(unit.id);
                }
                break;
            }

            let unit = &mut self.units[unit_index];
            unit.bind(job.id(), now);
            let completed = job.consume_tick();

            trace!(time = now, unit = unit.id, job = job.id(), process = %job.process, "allocated");
            self.log
                .push(LogEntry::allocation(now, job.process.as_str(), job.submitter.as_str()));
            report.allocations.push((unit.id, job.id()));

            if completed {
                debug!(time = now, job = job.id(), submitter = %job.submitter, "job completed");
                self.completions.push(CompletionRecord::for_job(job, now));
                report.completions.push(job.id());
            }
        }

        report
    }

    fn finish(self) -> SimulationRun {
        debug_assert!(self.registry.is_empty(), "finish() with jobs pending");

        let mut log = self.log;
        let reduced = summary::reduce_completions(&self.completions);
        for marker in summary::closing_markers(&self.units) {
            log.push(marker);
        }
        for line in summary::summary_lines(&reduced) {
            log.push_summary(line);
        }

        info!(
            ticks = self.now,
            completed = self.completions.len(),
            submitters = reduced.len(),
            "simulation finished"
        );

        SimulationRun {
            log,
            completions: self.completions,
            summary: reduced,
            units: self.units,
            ticks: self.now,
        }
    }
}
