/*!
 * Round-Robin Scheduling Simulator
 * Simulates a fixed batch of processes under round-robin CPU scheduling
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use config::SimulationConfig;
pub use crate::core::errors::SimError;
pub use crate::core::types::{Pid, SimResult, Tick};
pub use monitoring::init_tracing;
pub use process::{generate_processes, ProcessGenerator, ProcessRecord, ProcessState};
pub use report::{ProcessRow, Report};
pub use scheduler::{
    ExecutionSlice, RoundRobinScheduler, ScheduleOutcome, SchedulerStats, TimeQuantum,
};
pub use simulation::Simulation;
