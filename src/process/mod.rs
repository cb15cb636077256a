/*!
 * Process Module
 * Process records and random batch generation
 */

pub mod generator;
pub mod types;

// Re-export for convenience
pub use generator::{generate_processes, ProcessGenerator};
pub use types::{ProcessRecord, ProcessState};
