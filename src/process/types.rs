/*!
 * Process Types
 * Process descriptors and their per-run working state
 */

use crate::core::types::{Pid, Priority, Time};
use serde::{Deserialize, Serialize};

/// Immutable description of a schedulable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    #[serde(default)]
    pub priority: Priority,
}

impl Process {
    #[inline]
    #[must_use]
    pub const fn new(pid: Pid, arrival: Time, burst: Time, priority: Priority) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }
}

/// Working copy of a process for a single simulation run
///
/// Invariant: `0 <= remaining <= burst`. `start_time` and `completion_time`
/// are written at most once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    pub process: Process,
    pub remaining: Time,
    pub start_time: Option<Time>,
    pub completion_time: Option<Time>,
}

impl Entry {
    #[must_use]
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining: process.burst,
            start_time: None,
            completion_time: None,
        }
    }

    /// Restore the pre-run state
    pub fn reset(&mut self) {
        self.remaining = self.process.burst;
        self.start_time = None;
        self.completion_time = None;
    }

    #[inline(always)]
    pub const fn pid(&self) -> Pid {
        self.process.pid
    }

    /// Eligible for the CPU at `now`
    #[inline(always)]
    pub const fn is_ready(&self, now: Time) -> bool {
        self.process.arrival <= now && self.remaining > 0
    }

    #[inline(always)]
    pub const fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Execute for up to `budget` units starting at `now`, returning the units used
    pub fn run(&mut self, now: Time, budget: Time) -> Time {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
        let used = budget.min(self.remaining);
        self.remaining -= used;
        used
    }

    /// Stamp the completion time once `remaining` has reached zero
    pub fn complete(&mut self, now: Time) {
        debug_assert!(self.is_finished());
        debug_assert!(self.completion_time.is_none());
        self.completion_time = Some(now);
    }

    /// Completion minus arrival
    pub fn turnaround(&self) -> Option<Time> {
        self.completion_time.map(|done| done - self.process.arrival)
    }

    /// Turnaround minus burst: time spent ready but not running
    pub fn waiting(&self) -> Option<Time> {
        self.turnaround().map(|t| t - self.process.burst)
    }

    /// First dispatch minus arrival
    pub fn response(&self) -> Option<Time> {
        self.start_time.map(|start| start - self.process.arrival)
    }
}

impl From<Process> for Entry {
    fn from(process: Process) -> Self {
        Self::new(process)
    }
}

/// Fresh working copies of `processes`, in the same order
pub fn working_set(processes: &[Process]) -> Vec<Entry> {
    processes.iter().copied().map(Entry::new).collect()
}
