/*!
 * Monitoring Module
 * Structured tracing setup for the simulator
 */

pub mod tracer;

pub use tracer::{generate_run_id, init_tracing};
