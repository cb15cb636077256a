/*!
 * Process Generator
 * Builds random process batches from an injected RNG
 */

use super::types::ProcessRecord;
use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult, Tick};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Generate `count` processes with sequential ids
///
/// Arrival times are uniform in `[0, max_arrival]`, bursts uniform in
/// `[1, max_burst]`.
pub fn generate_processes<R: Rng>(
    count: usize,
    max_arrival: Tick,
    max_burst: Tick,
    rng: &mut R,
) -> SimResult<Vec<ProcessRecord>> {
    if max_burst == 0 {
        return Err(SimError::config("max_burst must be at least 1"));
    }

    (0..count)
        .map(|i| {
            let id = Pid::try_from(i)
                .map_err(|_| SimError::config(format!("process index {} exceeds pid range", i)))?;
            let arrival = rng.gen_range(0..=max_arrival);
            let burst = rng.gen_range(1..=max_burst);
            ProcessRecord::new(id, arrival, burst)
        })
        .collect()
}

/// Random process source that owns its RNG
///
/// Construct it once and pass it to whoever needs processes; a fixed seed
/// always yields the same batches in the same order.
pub struct ProcessGenerator<R = StdRng> {
    rng: R,
    max_arrival: Tick,
    max_burst: Tick,
}

impl ProcessGenerator<StdRng> {
    /// Deterministic generator
    pub fn seeded(seed: u64, max_arrival: Tick, max_burst: Tick) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), max_arrival, max_burst)
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy(max_arrival: Tick, max_burst: Tick) -> Self {
        Self::with_rng(StdRng::from_entropy(), max_arrival, max_burst)
    }
}

impl<R: Rng> ProcessGenerator<R> {
    /// Wrap an existing RNG
    pub fn with_rng(rng: R, max_arrival: Tick, max_burst: Tick) -> Self {
        Self {
            rng,
            max_arrival,
            max_burst,
        }
    }

    /// Produce the next batch of `count` processes
    pub fn generate(&mut self, count: usize) -> SimResult<Vec<ProcessRecord>> {
        let batch = generate_processes(count, self.max_arrival, self.max_burst, &mut self.rng)?;
        debug!(
            count,
            max_arrival = self.max_arrival,
            max_burst = self.max_burst,
            "Generated process batch"
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_respected() {
        let mut gen = ProcessGenerator::seeded(42, 20, 10);
        let batch = gen.generate(500).unwrap();

        assert_eq!(batch.len(), 500);
        for (i, p) in batch.iter().enumerate() {
            assert_eq!(p.id() as usize, i);
            assert!(p.arrival_time() <= 20);
            assert!((1..=10).contains(&p.cpu_burst()));
            assert_eq!(p.remaining_time(), p.cpu_burst());
            assert!(p.is_pristine());
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = ProcessGenerator::seeded(7, 20, 10).generate(10).unwrap();
        let b = ProcessGenerator::seeded(7, 20, 10).generate(10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = generate_processes(5, 0, 1, &mut rng).unwrap();
        assert!(batch
            .iter()
            .all(|p| p.arrival_time() == 0 && p.cpu_burst() == 1));
    }

    #[test]
    fn test_zero_max_burst_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_processes(5, 10, 0, &mut rng).is_err());
    }

    #[test]
    fn test_empty_batch() {
        let mut gen = ProcessGenerator::seeded(3, 20, 10);
        assert!(gen.generate(0).unwrap().is_empty());
    }
}
