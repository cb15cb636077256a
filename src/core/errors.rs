/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(sim::configuration_error),
        help("Check RR_SIM_* environment variables and the RR_SIM_CONFIG file.")
    )]
    Configuration(String),

    #[error("Invalid process: {0}")]
    #[diagnostic(
        code(sim::invalid_process),
        help("Processes need a CPU burst of at least 1 and must not have run yet.")
    )]
    InvalidProcess(String),

    #[error("Invariant violation: {0}")]
    #[diagnostic(
        code(sim::invariant_violation),
        help("The scheduler reached an impossible state. Please report this issue.")
    )]
    InvariantViolation(String),
}

impl SimError {
    /// Shorthand for configuration failures
    pub fn config(msg: impl Into<String>) -> Self {
        SimError::Configuration(msg.into())
    }

    /// Shorthand for broken scheduler invariants
    pub fn invariant(msg: impl Into<String>) -> Self {
        SimError::InvariantViolation(msg.into())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Configuration(format!("malformed config file: {}", err))
    }
}
