/*!
 * Highest Response Ratio Next
 * Non-preemptive dispatch favouring processes that have waited longest
 * relative to their burst
 */

use super::clock::Clock;
use super::selection::run_to_completion;
use super::trace::Timeline;
use super::traits::Simulator;
use super::types::Algorithm;
use crate::core::types::Time;
use crate::process::Entry;
use std::cmp::Reverse;

/// HRRN simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct Hrrn {
    switch_cost: Time,
}

impl Hrrn {
    pub const fn new(switch_cost: Time) -> Self {
        Self { switch_cost }
    }
}

/// `(waited + burst) / burst` at `now`; burst is validated non-zero
pub fn response_ratio(entry: &Entry, now: Time) -> f64 {
    let process = &entry.process;
    (now - process.arrival + process.burst) as f64 / process.burst as f64
}

impl Simulator for Hrrn {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hrrn
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline) {
        // Largest ratio wins; Reverse keeps the strict first-encountered tie-break
        run_to_completion(entries, clock, timeline, |entry, now| {
            Reverse(response_ratio(entry, now))
        });
    }
}
