/*!
 * Property Tests
 * Scheduler invariants over arbitrary batches
 */

use proptest::prelude::*;
use rr_sim::{Pid, ProcessRecord, ProcessState, RoundRobinScheduler, Tick, TimeQuantum};

fn arb_batch() -> impl Strategy<Value = Vec<(Tick, Tick)>> {
    prop::collection::vec((0u64..60, 1u64..25), 0..40)
}

fn build(specs: &[(Tick, Tick)]) -> Vec<ProcessRecord> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(arrival, burst))| ProcessRecord::new(i as Pid, arrival, burst).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn prop_every_process_completes(specs in arb_batch(), quantum in 1u64..12) {
        let outcome = RoundRobinScheduler::new(TimeQuantum::new(quantum).unwrap())
            .run(build(&specs))
            .unwrap();

        prop_assert_eq!(outcome.processes().len(), specs.len());
        prop_assert_eq!(outcome.completion_order().len(), specs.len());

        for p in outcome.processes() {
            prop_assert_eq!(p.state(), ProcessState::Completed);
            prop_assert_eq!(p.remaining_time(), 0);

            let turnaround = p.turnaround_time().unwrap();
            let waiting = p.waiting_time().unwrap();
            prop_assert_eq!(turnaround, waiting + p.cpu_burst());
            prop_assert!(turnaround >= p.cpu_burst());
            prop_assert_eq!(p.completion_time().unwrap(), p.arrival_time() + turnaround);
            prop_assert!(p.first_run_time().unwrap() >= p.arrival_time());
        }
    }

    #[test]
    fn prop_executed_time_equals_total_burst(specs in arb_batch(), quantum in 1u64..12) {
        let outcome = RoundRobinScheduler::new(TimeQuantum::new(quantum).unwrap())
            .run(build(&specs))
            .unwrap();

        let executed: Tick = outcome.timeline().iter().map(|s| s.len()).sum();
        let bursts: Tick = specs.iter().map(|&(_, burst)| burst).sum();
        prop_assert_eq!(executed, bursts);
        prop_assert_eq!(outcome.stats().busy_time, bursts);
        prop_assert_eq!(
            outcome.stats().makespan,
            outcome.stats().busy_time + outcome.stats().idle_ticks
        );
    }

    #[test]
    fn prop_slices_respect_quantum_and_never_overlap(specs in arb_batch(), quantum in 1u64..12) {
        let outcome = RoundRobinScheduler::new(TimeQuantum::new(quantum).unwrap())
            .run(build(&specs))
            .unwrap();

        let mut last_end = 0;
        for s in outcome.timeline() {
            prop_assert!(s.len() >= 1 && s.len() <= quantum);
            prop_assert!(s.start >= last_end);
            last_end = s.end;

            // Only the last slice of a process is a short one
            if s.len() < quantum {
                prop_assert!(s.completed);
            }
        }
    }

    #[test]
    fn prop_no_process_runs_before_arrival(specs in arb_batch(), quantum in 1u64..12) {
        let outcome = RoundRobinScheduler::new(TimeQuantum::new(quantum).unwrap())
            .run(build(&specs))
            .unwrap();

        for s in outcome.timeline() {
            let p = outcome.process(s.pid).unwrap();
            prop_assert!(s.start >= p.arrival_time());
        }
    }
}
