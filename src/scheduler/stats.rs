/*!
 * Scheduler Statistics
 * Counters collected over a single simulation run
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};

/// Run-level scheduler statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    /// Number of slices handed out
    pub dispatches: u64,
    /// Slices that ended with work left
    pub preemptions: u64,
    /// Dispatches that switched to a different process than the previous slice
    pub context_switches: u64,
    /// Ticks the CPU spent with an empty ready queue
    pub idle_ticks: Tick,
    /// Sum of all executed slice lengths
    pub busy_time: Tick,
    /// Clock value when the last process completed
    pub makespan: Tick,
    pub quantum: Tick,
    #[serde(skip)]
    last_pid: Option<Pid>,
}

impl SchedulerStats {
    pub(super) fn new(quantum: Tick) -> Self {
        Self {
            quantum,
            ..Default::default()
        }
    }

    pub(super) fn record_slice(&mut self, pid: Pid, executed: Tick, preempted: bool) {
        self.dispatches += 1;
        self.busy_time += executed;
        if preempted {
            self.preemptions += 1;
        }
        if self.last_pid.is_some_and(|last| last != pid) {
            self.context_switches += 1;
        }
        self.last_pid = Some(pid);
    }

    #[inline]
    pub(super) fn record_idle(&mut self) {
        self.idle_ticks += 1;
    }

    /// Busy share of the makespan, in `[0, 1]`
    pub fn cpu_utilization(&self) -> f64 {
        if self.makespan == 0 {
            0.0
        } else {
            self.busy_time as f64 / self.makespan as f64
        }
    }
}
