/*!
 * Simulation Report
 * Averages and per-process rows over a completed batch
 */

use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult, Tick};
use crate::process::ProcessRecord;
use crate::scheduler::ScheduleOutcome;
use serde::Serialize;
use std::fmt;

/// Final numbers for one completed process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRow {
    pub id: Pid,
    pub arrival_time: Tick,
    pub cpu_burst: Tick,
    pub completion_time: Tick,
    pub waiting_time: Tick,
    pub turnaround_time: Tick,
    pub response_time: Tick,
}

impl ProcessRow {
    fn from_record(record: &ProcessRecord) -> SimResult<Self> {
        let incomplete =
            || SimError::invariant(format!("process {} has not completed", record.id()));

        if !record.is_completed() {
            return Err(incomplete());
        }

        Ok(Self {
            id: record.id(),
            arrival_time: record.arrival_time(),
            cpu_burst: record.cpu_burst(),
            completion_time: record.completion_time().ok_or_else(incomplete)?,
            waiting_time: record.waiting_time().ok_or_else(incomplete)?,
            turnaround_time: record.turnaround_time().ok_or_else(incomplete)?,
            response_time: record.response_time().ok_or_else(incomplete)?,
        })
    }
}

/// Aggregate results of a simulation
///
/// `Display` renders the two summary lines printed by the binary.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub process_count: usize,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    pub max_waiting_time: Tick,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub makespan: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_utilization: Option<f64>,
    /// Rows sorted by process id
    pub processes: Vec<ProcessRow>,
}

impl Report {
    /// Build a report from completed records
    ///
    /// An empty batch yields zero averages.
    pub fn from_processes(records: &[ProcessRecord]) -> SimResult<Self> {
        let mut rows = records
            .iter()
            .map(ProcessRow::from_record)
            .collect::<SimResult<Vec<_>>>()?;
        rows.sort_by_key(|row| row.id);

        let mean = |f: fn(&ProcessRow) -> Tick| -> f64 {
            if rows.is_empty() {
                0.0
            } else {
                rows.iter().map(|r| f(r) as f64).sum::<f64>() / rows.len() as f64
            }
        };

        Ok(Self {
            process_count: rows.len(),
            average_waiting_time: mean(|r| r.waiting_time),
            average_turnaround_time: mean(|r| r.turnaround_time),
            average_response_time: mean(|r| r.response_time),
            max_waiting_time: rows.iter().map(|r| r.waiting_time).max().unwrap_or(0),
            makespan: None,
            cpu_utilization: None,
            processes: rows,
        })
    }

    /// Build a report including run-level statistics
    pub fn from_outcome(outcome: &ScheduleOutcome) -> SimResult<Self> {
        let mut report = Self::from_processes(outcome.processes())?;
        report.makespan = Some(outcome.stats().makespan);
        report.cpu_utilization = Some(outcome.stats().cpu_utilization());
        Ok(report)
    }

    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimError::invariant(format!("report serialization failed: {}", e)))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average waiting time: {}", self.average_waiting_time)?;
        write!(f, "Average turnaround time: {}", self.average_turnaround_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{RoundRobinScheduler, TimeQuantum};
    use pretty_assertions::assert_eq;

    fn outcome(specs: &[(Tick, Tick)], quantum: Tick) -> ScheduleOutcome {
        let batch = specs
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| ProcessRecord::new(i as Pid, a, b).unwrap())
            .collect();
        RoundRobinScheduler::new(TimeQuantum::new(quantum).unwrap())
            .run(batch)
            .unwrap()
    }

    #[test]
    fn test_two_process_averages() {
        // P0 tat 3 wait 0, P1 tat 5 wait 2
        let report = Report::from_outcome(&outcome(&[(0, 3), (1, 3)], 2)).unwrap();
        assert_eq!(report.average_waiting_time, 1.0);
        assert_eq!(report.average_turnaround_time, 4.0);
        assert_eq!(report.max_waiting_time, 2);
        assert_eq!(report.makespan, Some(6));
        assert_eq!(report.cpu_utilization, Some(1.0));
        assert_eq!(
            report.to_string(),
            "Average waiting time: 1\nAverage turnaround time: 4"
        );
    }

    #[test]
    fn test_fractional_average_formatting() {
        // P0 tat 1 wait 0, P1 tat 2 wait 1
        let report = Report::from_outcome(&outcome(&[(0, 1), (0, 1)], 4)).unwrap();
        assert_eq!(
            report.to_string(),
            "Average waiting time: 0.5\nAverage turnaround time: 1.5"
        );
    }

    #[test]
    fn test_rows_sorted_by_id() {
        let report = Report::from_outcome(&outcome(&[(9, 1), (0, 1), (4, 1)], 4)).unwrap();
        let ids: Vec<Pid> = report.processes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_batch_reports_zero() {
        let report = Report::from_processes(&[]).unwrap();
        assert_eq!(report.process_count, 0);
        assert_eq!(report.average_waiting_time, 0.0);
        assert_eq!(report.average_turnaround_time, 0.0);
    }

    #[test]
    fn test_incomplete_record_rejected() {
        let pending = ProcessRecord::new(0, 0, 3).unwrap();
        assert!(matches!(
            Report::from_processes(&[pending]),
            Err(SimError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_json_contains_rows() {
        let report = Report::from_outcome(&outcome(&[(0, 5)], 4)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["process_count"], 1);
        assert_eq!(json["processes"][0]["turnaround_time"], 5);
        assert_eq!(json["makespan"], 5);
    }
}
