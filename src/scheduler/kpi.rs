//! Run quality metrics (KPIs).
//!
//! Computes standard performance indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest exclusive end of any allocation |
//! | Total Work | Ticks of work allocated |
//! | Idle Markers | Idle entries in the timeline, closing markers included |
//! | Avg Utilization | Mean of per-unit busy ticks / makespan |
//! | Avg Turnaround | Mean of (exclusive completion - arrival) per job |
//! | Max Turnaround | Largest single turnaround |

use serde::{Deserialize, Serialize};

use super::SimulationRun;
use crate::models::{Ticks, UnitId};

/// Run performance indicators. All times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Latest exclusive end of any allocation.
    pub makespan: Ticks,
    /// Ticks of work allocated across all units.
    pub total_work: Ticks,
    /// Idle markers emitted, including closing markers.
    pub idle_markers: usize,
    /// Average unit utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-unit utilization, in unit-id order.
    pub utilization_by_unit: Vec<(UnitId, f64)>,
    /// Mean turnaround over all jobs.
    pub avg_turnaround: f64,
    /// Largest turnaround of any job.
    pub max_turnaround: Ticks,
}

impl RunKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(run: &SimulationRun) -> Self {
        let makespan = run.log.makespan();
        let total_work: Ticks = run.units.iter().map(|u| u.busy_ticks).sum();

        let utilization_by_unit: Vec<(UnitId, f64)> = run
            .units
            .iter()
            .map(|u| {
                let util = if makespan == 0 {
                    0.0
                } else {
                    u.busy_ticks as f64 / makespan as f64
                };
                (u.id, util)
            })
            .collect();

        let avg_utilization = if utilization_by_unit.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_unit.iter().map(|(_, u)| u).sum();
            sum / utilization_by_unit.len() as f64
        };

        let turnarounds: Vec<Ticks> = run.completions.iter().map(|c| c.turnaround()).collect();
        let avg_turnaround = if turnarounds.is_empty() {
            0.0
        } else {
            turnarounds.iter().sum::<Ticks>() as f64 / turnarounds.len() as f64
        };

        Self {
            makespan,
            total_work,
            idle_markers: run.log.idle_count(),
            avg_utilization,
            utilization_by_unit,
            avg_turnaround,
            max_turnaround: turnarounds.into_iter().max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::RuleEngine;
    use crate::models::Job;
    use crate::scheduler::Simulation;

    fn run(jobs: Vec<Job>, units: usize) -> SimulationRun {
        Simulation::new(jobs, units, RuleEngine::default())
            .unwrap()
            .run()
    }

    #[test]
    fn test_kpi_single_unit() {
        let run = run(
            vec![
                Job::new("alice", "p1", 0, 3).with_priority(1).with_sequence(1),
                Job::new("bob", "p2", 0, 2).with_priority(5).with_sequence(2),
            ],
            1,
        );
        let kpi = RunKpi::calculate(&run);

        assert_eq!(kpi.makespan, 5);
        assert_eq!(kpi.total_work, 5);
        assert_eq!(kpi.idle_markers, 1);
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-10);
        // bob: 2 - 0, alice: 5 - 0
        assert!((kpi.avg_turnaround - 3.5).abs() < 1e-10);
        assert_eq!(kpi.max_turnaround, 5);
    }

    #[test]
    fn test_kpi_utilization_by_unit() {
        let run = run(
            vec![
                Job::new("alice", "p1", 0, 4).with_sequence(1),
                Job::new("bob", "p2", 0, 2).with_sequence(2),
            ],
            2,
        );
        let kpi = RunKpi::calculate(&run);

        assert_eq!(kpi.makespan, 4);
        assert_eq!(kpi.utilization_by_unit, vec![(1, 1.0), (2, 0.5)]);
        assert!((kpi.avg_utilization - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_turnaround_counts_from_arrival() {
        let run = run(vec![Job::new("alice", "p1", 3, 2).with_sequence(1)], 1);
        let kpi = RunKpi::calculate(&run);
        // Idle at 0..2, runs at 3 and 4, completes exclusive 5.
        assert_eq!(kpi.max_turnaround, 2);
        assert_eq!(kpi.idle_markers, 4);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = RunKpi::calculate(&run(Vec::new(), 1));
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.total_work, 0);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround - 0.0).abs() < 1e-10);
    }
}
