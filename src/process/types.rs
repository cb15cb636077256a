/*!
 * Process Types
 * Process records and their scheduling lifecycle
 */

use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult, Tick};
use serde::{Deserialize, Serialize};

/// Process scheduling state
///
/// Legal transitions: `NotArrived -> Ready -> Running -> (Ready | Completed)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not yet reached, or not yet admitted to the ready queue
    NotArrived,
    /// Sitting in the ready queue
    Ready,
    /// Holding the CPU for the current slice
    Running,
    /// Remaining time reached zero (terminal)
    Completed,
}

impl ProcessState {
    /// Whether the state machine allows moving from `self` to `to`
    #[inline]
    pub const fn can_transition_to(self, to: ProcessState) -> bool {
        matches!(
            (self, to),
            (ProcessState::NotArrived, ProcessState::Ready)
                | (ProcessState::Ready, ProcessState::Running)
                | (ProcessState::Running, ProcessState::Ready)
                | (ProcessState::Running, ProcessState::Completed)
        )
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ProcessState::Completed)
    }
}

/// A simulated process
///
/// `id`, `arrival_time` and `cpu_burst` are fixed at creation. Everything else
/// is scheduling state owned by the scheduler during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    id: Pid,
    arrival_time: Tick,
    cpu_burst: Tick,
    remaining_time: Tick,
    state: ProcessState,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    first_run_time: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    completion_time: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    waiting_time: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    turnaround_time: Option<Tick>,
}

impl ProcessRecord {
    /// Create a process that has not arrived yet
    pub fn new(id: Pid, arrival_time: Tick, cpu_burst: Tick) -> SimResult<Self> {
        if cpu_burst == 0 {
            return Err(SimError::InvalidProcess(format!(
                "process {} has a zero CPU burst",
                id
            )));
        }

        Ok(Self {
            id,
            arrival_time,
            cpu_burst,
            remaining_time: cpu_burst,
            state: ProcessState::NotArrived,
            first_run_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
        })
    }

    #[inline]
    pub fn id(&self) -> Pid {
        self.id
    }

    #[inline]
    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline]
    pub fn cpu_burst(&self) -> Tick {
        self.cpu_burst
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Clock value of the first dispatch
    pub fn first_run_time(&self) -> Option<Tick> {
        self.first_run_time
    }

    /// Clock value at which remaining time reached zero
    pub fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    /// Set once, on completion
    pub fn waiting_time(&self) -> Option<Tick> {
        self.waiting_time
    }

    /// Set once, on completion
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.turnaround_time
    }

    /// Time between arrival and first dispatch
    pub fn response_time(&self) -> Option<Tick> {
        self.first_run_time
            .and_then(|t| t.checked_sub(self.arrival_time))
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_terminal()
    }

    /// True for a record nobody has scheduled yet
    pub fn is_pristine(&self) -> bool {
        self.state == ProcessState::NotArrived
            && self.remaining_time == self.cpu_burst
            && self.first_run_time.is_none()
            && self.completion_time.is_none()
    }

    /// Move to `to`, rejecting transitions the state machine does not allow
    pub(crate) fn transition(&mut self, to: ProcessState) -> SimResult<()> {
        if !self.state.can_transition_to(to) {
            return Err(SimError::invariant(format!(
                "process {}: illegal transition {:?} -> {:?}",
                self.id, self.state, to
            )));
        }
        self.state = to;
        Ok(())
    }

    /// Run for at most `quantum` ticks starting at `now`
    ///
    /// Returns the number of ticks actually executed.
    pub(crate) fn run_slice(&mut self, now: Tick, quantum: Tick) -> SimResult<Tick> {
        if self.state != ProcessState::Running {
            return Err(SimError::invariant(format!(
                "process {} executed while {:?}",
                self.id, self.state
            )));
        }

        let executed = quantum.min(self.remaining_time);
        self.remaining_time = self
            .remaining_time
            .checked_sub(executed)
            .ok_or_else(|| {
                SimError::invariant(format!("process {}: remaining time underflow", self.id))
            })?;
        self.first_run_time.get_or_insert(now);

        Ok(executed)
    }

    /// Record completion at clock value `now`
    pub(crate) fn complete(&mut self, now: Tick) -> SimResult<()> {
        if self.remaining_time != 0 {
            return Err(SimError::invariant(format!(
                "process {} completed with {} ticks remaining",
                self.id, self.remaining_time
            )));
        }

        let turnaround = now.checked_sub(self.arrival_time).ok_or_else(|| {
            SimError::invariant(format!(
                "process {} completed at {} before arriving at {}",
                self.id, now, self.arrival_time
            ))
        })?;
        let waiting = turnaround.checked_sub(self.cpu_burst).ok_or_else(|| {
            SimError::invariant(format!(
                "process {}: turnaround {} shorter than burst {}",
                self.id, turnaround, self.cpu_burst
            ))
        })?;

        self.transition(ProcessState::Completed)?;
        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(waiting);
        Ok(())
    }
}
