/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulation clock unit
///
/// Arrival, burst, waiting and turnaround times are all whole ticks.
pub type Tick = u64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
