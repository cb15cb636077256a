/*!
 * Simulation Driver
 * Wires configuration, generation, scheduling and reporting together
 */

use crate::config::SimulationConfig;
use crate::core::types::SimResult;
use crate::process::ProcessGenerator;
use crate::report::Report;
use crate::scheduler::{RoundRobinScheduler, ScheduleOutcome};
use tracing::info;

/// One configured simulation
pub struct Simulation {
    config: SimulationConfig,
    generator: ProcessGenerator,
    scheduler: RoundRobinScheduler,
}

impl Simulation {
    /// Validate `config` and build the generator and scheduler it describes
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;

        let generator = match config.seed {
            Some(seed) => ProcessGenerator::seeded(seed, config.max_arrival, config.max_burst),
            None => ProcessGenerator::from_entropy(config.max_arrival, config.max_burst),
        };
        let scheduler = RoundRobinScheduler::new(config.time_quantum()?);

        Ok(Self {
            config,
            generator,
            scheduler,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Generate a fresh batch and schedule it
    pub fn run(&mut self) -> SimResult<ScheduleOutcome> {
        let batch = self.generator.generate(self.config.process_count)?;
        info!(
            processes = batch.len(),
            quantum = self.config.quantum,
            seed = self.config.seed,
            "Starting round-robin simulation"
        );
        self.scheduler.run(batch)
    }

    /// Run once and summarize the result
    pub fn run_report(&mut self) -> SimResult<Report> {
        let outcome = self.run()?;
        Report::from_outcome(&outcome)
    }
}
