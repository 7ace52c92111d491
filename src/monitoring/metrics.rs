/*!
 * Metrics Calculator
 * Reduce a completed run to comparable aggregate statistics
 */

use crate::core::types::Time;
use crate::process::Entry;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    /// Percentage of elapsed time spent executing bursts
    pub cpu_utilization: f64,
    /// Completed processes per time unit
    pub throughput: f64,
}

impl Metrics {
    /// Compute metrics from final process state
    ///
    /// `total_time` is the clock value when the last process completed.
    /// Sums accumulate in `entries` order so identical runs are bit-identical.
    pub fn compute(entries: &[Entry], total_time: Time) -> Self {
        if entries.is_empty() || total_time == 0 {
            return Self::default();
        }

        let n = entries.len() as f64;
        let elapsed = total_time as f64;
        let mut total_wait = 0.0;
        let mut total_turn = 0.0;
        let mut busy_time: Time = 0;

        for entry in entries {
            let completion = entry.completion_time.unwrap_or(total_time);
            let turnaround = completion - entry.process.arrival;
            total_turn += turnaround as f64;
            total_wait += turnaround.saturating_sub(entry.process.burst) as f64;
            busy_time += entry.process.burst;
        }

        Self {
            avg_waiting_time: total_wait / n,
            avg_turnaround_time: total_turn / n,
            cpu_utilization: 100.0 * busy_time as f64 / elapsed,
            throughput: n / elapsed,
        }
    }
}
