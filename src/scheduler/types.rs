/*!
 * Scheduler Types
 * Domain types for round-robin scheduling runs
 */

use super::stats::SchedulerStats;
use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult, Tick};
use crate::process::ProcessRecord;
use serde::{Deserialize, Deserializer, Serialize};

/// Time quantum configuration
///
/// Maximum number of ticks a process may hold the CPU per dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum {
    pub ticks: Tick,
}

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Tick) -> SimResult<Self> {
        if ticks == 0 {
            return Err(SimError::config("time quantum must be at least 1 tick"));
        }
        Ok(Self { ticks })
    }

    #[inline(always)]
    pub const fn as_ticks(&self) -> Tick {
        self.ticks
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            ticks: Tick,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.ticks).map_err(serde::de::Error::custom)
    }
}

/// One dispatch of a process: it held the CPU over `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    pub pid: Pid,
    pub start: Tick,
    pub end: Tick,
    /// The process finished at `end`
    pub completed: bool,
}

impl ExecutionSlice {
    #[inline]
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOutcome {
    /// Completed records, in scheduling (arrival) order
    pub(super) processes: Vec<ProcessRecord>,
    pub(super) timeline: Vec<ExecutionSlice>,
    pub(super) completion_order: Vec<Pid>,
    pub(super) stats: SchedulerStats,
}

impl ScheduleOutcome {
    /// Completed records, sorted by arrival time (ties keep input order)
    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    pub fn into_processes(self) -> Vec<ProcessRecord> {
        self.processes
    }

    /// Look up a completed record by pid
    pub fn process(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.id() == pid)
    }

    /// Every dispatch in clock order
    pub fn timeline(&self) -> &[ExecutionSlice] {
        &self.timeline
    }

    /// Slices belonging to one process
    pub fn slices_for(&self, pid: Pid) -> impl Iterator<Item = &ExecutionSlice> {
        self.timeline.iter().filter(move |s| s.pid == pid)
    }

    pub fn completion_order(&self) -> &[Pid] {
        &self.completion_order
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
