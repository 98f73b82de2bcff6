//! Tick engine, summary reduction, and run KPIs.
//!
//! # Algorithm
//!
//! Each tick runs four phases in strict sequence:
//!
//! 1. **Reclaim**: every unit is freed; jobs whose remaining work reached
//!    zero during the previous tick are removed from the registry.
//! 2. **Terminate** if the registry is empty.
//! 3. **Sort** the registry by eligibility for the current tick.
//! 4. **Allocate**: walk the registry front to back, binding each arrived
//!    job to the lowest-numbered free unit for one tick of work, until all
//!    units are busy or a job that has not yet arrived is reached.
//!
//! Time advances by exactly one tick per iteration. After the loop,
//! completion records are reduced to one line per submitter.
//!
//! # KPI
//!
//! `RunKpi` computes makespan, utilization, and turnaround from a
//! finished run.

mod kpi;
mod simulation;
pub mod summary;
mod tick;

pub use kpi::RunKpi;
pub use simulation::{Simulation, SimulationRun, TickReport};
pub use tick::{SimulationRequest, TickScheduler};
