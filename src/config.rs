/*!
 * Simulation Configuration
 *
 * Defaults, optional JSON file, and environment overrides (later wins)
 */

use crate::core::errors::SimError;
use crate::core::types::{SimResult, Tick};
use crate::scheduler::TimeQuantum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Path of an optional JSON config file
pub const ENV_CONFIG_PATH: &str = "RR_SIM_CONFIG";
pub const ENV_PROCESS_COUNT: &str = "RR_SIM_PROCESS_COUNT";
pub const ENV_MAX_ARRIVAL: &str = "RR_SIM_MAX_ARRIVAL";
pub const ENV_MAX_BURST: &str = "RR_SIM_MAX_BURST";
pub const ENV_QUANTUM: &str = "RR_SIM_QUANTUM";
pub const ENV_SEED: &str = "RR_SIM_SEED";

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of processes to generate
    pub process_count: usize,
    /// Upper bound (inclusive) for generated arrival times
    pub max_arrival: Tick,
    /// Upper bound (inclusive) for generated CPU bursts
    pub max_burst: Tick,
    /// Round-robin time quantum
    pub quantum: Tick,
    /// Fixed RNG seed; `None` seeds from OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            process_count: 10,
            max_arrival: 20,
            max_burst: 10,
            quantum: 4,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Load defaults, then `RR_SIM_CONFIG` if set, then `RR_SIM_*` overrides
    ///
    /// The result is validated before it is returned.
    pub fn load() -> SimResult<Self> {
        let base = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) if !path.is_empty() => Self::from_file(path)?,
            _ => Self::default(),
        };

        let config = base.with_env_overrides()?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Read a JSON config file; missing fields fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SimError::config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Apply `RR_SIM_*` environment variables on top of `self`
    pub fn with_env_overrides(mut self) -> SimResult<Self> {
        if let Some(v) = env_override(ENV_PROCESS_COUNT)? {
            self.process_count = v;
        }
        if let Some(v) = env_override(ENV_MAX_ARRIVAL)? {
            self.max_arrival = v;
        }
        if let Some(v) = env_override(ENV_MAX_BURST)? {
            self.max_burst = v;
        }
        if let Some(v) = env_override(ENV_QUANTUM)? {
            self.quantum = v;
        }
        if let Some(v) = env_override(ENV_SEED)? {
            self.seed = Some(v);
        }
        Ok(self)
    }

    /// Reject configurations the simulation cannot run
    ///
    /// `max_arrival >= 0` holds by construction.
    pub fn validate(&self) -> SimResult<()> {
        if self.process_count < 1 {
            return Err(SimError::config("process_count must be at least 1"));
        }
        if self.max_burst < 1 {
            return Err(SimError::config("max_burst must be at least 1"));
        }
        self.time_quantum()?;
        Ok(())
    }

    pub fn time_quantum(&self) -> SimResult<TimeQuantum> {
        TimeQuantum::new(self.quantum)
    }
}

/// Parse an environment variable, treating unset or empty as absent
fn env_override<T>(key: &str) -> SimResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| SimError::config(format!("{}={:?}: {}", key, raw, e))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(SimError::config(format!("{}: {}", key, e))),
    }
}
