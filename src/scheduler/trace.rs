/*!
 * Simulation Trace
 * Completed run state and execution timeline
 */

use super::clock::Clock;
use super::types::Algorithm;
use crate::core::types::{Pid, Time};
use crate::monitoring::Metrics;
use crate::process::Entry;
use serde::Serialize;

/// Contiguous stretch of CPU time given to one process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
    /// Feedback queue level the slice ran at (MLFQ only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
}

impl Slice {
    pub const fn len(&self) -> Time {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Execution log built up during a run
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record execution, extending the previous slice when it is contiguous
    pub fn record(&mut self, pid: Pid, start: Time, end: Time, level: Option<usize>) {
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == start && last.level == level {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice {
            pid,
            start,
            end,
            level,
        });
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn into_slices(self) -> Vec<Slice> {
        self.slices
    }
}

/// Result of running one algorithm to completion
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    pub algorithm: Algorithm,
    /// Final process state, in the caller's order
    pub entries: Vec<Entry>,
    pub slices: Vec<Slice>,
    /// Clock value when the last process completed
    pub total_time: Time,
    pub context_switches: u32,
    pub idle_time: Time,
}

impl Trace {
    pub(crate) fn new(
        algorithm: Algorithm,
        entries: Vec<Entry>,
        timeline: Timeline,
        clock: &Clock,
    ) -> Self {
        debug_assert!(entries.iter().all(|e| e.completion_time.is_some()));
        Self {
            algorithm,
            entries,
            slices: timeline.into_slices(),
            total_time: clock.now(),
            context_switches: clock.switches(),
            idle_time: clock.idle_time(),
        }
    }

    /// Reduce the trace to aggregate statistics
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(&self.entries, self.total_time)
    }

    pub fn entry(&self, pid: Pid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.pid() == pid)
    }

    /// Pids ordered by completion time
    pub fn completion_order(&self) -> Vec<Pid> {
        let mut done: Vec<&Entry> = self.entries.iter().collect();
        done.sort_by_key(|e| e.completion_time);
        done.into_iter().map(Entry::pid).collect()
    }

    /// Pids in the order they were first dispatched
    pub fn dispatch_order(&self) -> Vec<Pid> {
        let mut order = Vec::with_capacity(self.entries.len());
        for slice in &self.slices {
            if !order.contains(&slice.pid) {
                order.push(slice.pid);
            }
        }
        order
    }

    /// Total CPU demand of the workload
    pub fn busy_time(&self) -> Time {
        self.entries.iter().map(|e| e.process.burst).sum()
    }

    /// Clock time spent on context switches
    pub fn switch_overhead(&self) -> Time {
        self.total_time - self.busy_time() - self.idle_time
    }
}
