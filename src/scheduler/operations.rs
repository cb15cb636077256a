/*!
 * Scheduler Core Operations
 * Admission, dispatch, preemption and completion for one run
 */

use super::stats::SchedulerStats;
use super::types::{ExecutionSlice, ScheduleOutcome};
use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult, Tick};
use crate::process::{ProcessRecord, ProcessState};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// State of a single simulation run
///
/// Records live in `arena`, sorted by arrival; the ready queue stores arena
/// indices so every holder sees the same record.
pub(super) struct Run {
    arena: Vec<ProcessRecord>,
    ready: VecDeque<usize>,
    quantum: Tick,
    clock: Tick,
    // Arena index of the next process still waiting to arrive
    next_arrival: usize,
    completed: usize,
    timeline: Vec<ExecutionSlice>,
    completion_order: Vec<Pid>,
    stats: SchedulerStats,
}

impl Run {
    /// Validate the batch and order it by arrival time
    pub(super) fn new(mut processes: Vec<ProcessRecord>, quantum: Tick) -> SimResult<Self> {
        let mut seen = HashSet::with_capacity(processes.len());
        for process in &processes {
            if !seen.insert(process.id()) {
                return Err(SimError::InvalidProcess(format!(
                    "duplicate process id {}",
                    process.id()
                )));
            }
            if !process.is_pristine() {
                return Err(SimError::InvalidProcess(format!(
                    "process {} has already been scheduled ({:?})",
                    process.id(),
                    process.state()
                )));
            }
        }

        // Stable: equal arrivals keep input order
        processes.sort_by_key(ProcessRecord::arrival_time);

        let len = processes.len();
        Ok(Self {
            arena: processes,
            ready: VecDeque::with_capacity(len),
            quantum,
            clock: 0,
            next_arrival: 0,
            completed: 0,
            timeline: Vec::new(),
            completion_order: Vec::with_capacity(len),
            stats: SchedulerStats::new(quantum),
        })
    }

    /// Drive the clock until every process has completed
    pub(super) fn execute(&mut self) -> SimResult<()> {
        let total = self.arena.len();

        while self.completed < total {
            self.admit_arrivals()?;

            let Some(idx) = self.ready.pop_front() else {
                // CPU idle until the next arrival
                self.advance(1)?;
                self.stats.record_idle();
                continue;
            };

            self.dispatch(idx)?;
        }

        self.stats.makespan = self.clock;
        Ok(())
    }

    pub(super) fn finish(self) -> ScheduleOutcome {
        ScheduleOutcome {
            processes: self.arena,
            timeline: self.timeline,
            completion_order: self.completion_order,
            stats: self.stats,
        }
    }

    /// Queue every process whose arrival time has been reached, once each
    fn admit_arrivals(&mut self) -> SimResult<()> {
        while let Some(process) = self.arena.get_mut(self.next_arrival) {
            if process.arrival_time() > self.clock {
                break;
            }
            process.transition(ProcessState::Ready)?;
            trace!(pid = process.id(), clock = self.clock, "Process admitted");
            self.ready.push_back(self.next_arrival);
            self.next_arrival += 1;
        }
        Ok(())
    }

    /// Give the process at `idx` one quantum (or less, if it finishes)
    fn dispatch(&mut self, idx: usize) -> SimResult<()> {
        let start = self.clock;
        let process = self
            .arena
            .get_mut(idx)
            .ok_or_else(|| SimError::invariant(format!("ready queue index {} out of range", idx)))?;

        process.transition(ProcessState::Running)?;
        let executed = process.run_slice(start, self.quantum)?;
        let pid = process.id();
        let end = start
            .checked_add(executed)
            .ok_or_else(|| SimError::invariant("simulation clock overflow"))?;

        let finished = process.remaining_time() == 0;
        if finished {
            process.complete(end)?;
            debug!(
                pid,
                completion = end,
                waiting = process.waiting_time(),
                turnaround = process.turnaround_time(),
                "Process completed"
            );
        } else {
            process.transition(ProcessState::Ready)?;
            trace!(pid, remaining = process.remaining_time(), "Process preempted");
        }

        self.clock = end;
        if finished {
            self.completed += 1;
            self.completion_order.push(pid);
        } else {
            self.ready.push_back(idx);
        }

        self.stats.record_slice(pid, executed, !finished);
        self.timeline.push(ExecutionSlice {
            pid,
            start,
            end,
            completed: finished,
        });
        Ok(())
    }

    fn advance(&mut self, ticks: Tick) -> SimResult<()> {
        self.clock = self
            .clock
            .checked_add(ticks)
            .ok_or_else(|| SimError::invariant("simulation clock overflow"))?;
        Ok(())
    }
}
