/*!
 * rr-sim - Main Entry Point
 *
 * Generates a random batch of processes, schedules it round-robin and prints
 * the average waiting and turnaround times.
 */

use miette::Result;
use tracing::info;

use rr_sim::{init_tracing, Simulation, SimulationConfig};

fn main() -> Result<()> {
    init_tracing();

    let config = SimulationConfig::load()?;
    info!(
        process_count = config.process_count,
        max_arrival = config.max_arrival,
        max_burst = config.max_burst,
        quantum = config.quantum,
        "Configuration ready"
    );

    let report = Simulation::new(config)?.run_report()?;

    let as_json = std::env::var("RR_SIM_REPORT_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    if as_json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
