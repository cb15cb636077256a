/*!
 * CPU Scheduler
 * Round-robin simulation over a fixed batch of processes
 */

use crate::core::types::SimResult;
use crate::monitoring::generate_run_id;
use crate::process::ProcessRecord;
use tracing::{info, instrument};

mod operations;
pub mod stats;
pub mod types;

use operations::Run;

// Re-export public API
pub use stats::SchedulerStats;
pub use types::{ExecutionSlice, ScheduleOutcome, TimeQuantum};

/// Round-robin CPU scheduler
///
/// Each run takes ownership of the batch, simulates it to completion and hands
/// the completed records back inside a [`ScheduleOutcome`].
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: TimeQuantum,
}

impl RoundRobinScheduler {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Simulate `processes` until every one of them has completed
    #[instrument(
        name = "round_robin",
        skip(self, processes),
        fields(run_id = %generate_run_id(), processes = processes.len(), quantum = self.quantum.as_ticks())
    )]
    pub fn run(&self, processes: Vec<ProcessRecord>) -> SimResult<ScheduleOutcome> {
        let mut run = Run::new(processes, self.quantum.as_ticks())?;
        run.execute()?;
        let outcome = run.finish();

        let stats = outcome.stats();
        info!(
            makespan = stats.makespan,
            dispatches = stats.dispatches,
            preemptions = stats.preemptions,
            idle_ticks = stats.idle_ticks,
            "Simulation finished"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessState;

    fn scheduler(quantum: u64) -> RoundRobinScheduler {
        RoundRobinScheduler::new(TimeQuantum::new(quantum).unwrap())
    }

    #[test]
    fn test_empty_batch_terminates() {
        let outcome = scheduler(4).run(Vec::new()).unwrap();
        assert!(outcome.is_empty());
        assert!(outcome.timeline().is_empty());
        assert_eq!(outcome.stats().makespan, 0);
    }

    #[test]
    fn test_results_returned_to_caller() {
        let batch = vec![
            ProcessRecord::new(0, 0, 3).unwrap(),
            ProcessRecord::new(1, 1, 2).unwrap(),
        ];
        let outcome = scheduler(2).run(batch).unwrap();

        for p in outcome.processes() {
            assert_eq!(p.state(), ProcessState::Completed);
            assert!(p.waiting_time().is_some());
            assert!(p.turnaround_time().is_some());
        }
    }

    #[test]
    fn test_rerunning_completed_records_rejected() {
        let batch = vec![ProcessRecord::new(0, 0, 3).unwrap()];
        let done = scheduler(2).run(batch).unwrap().into_processes();
        assert!(scheduler(2).run(done).is_err());
    }
}
