/*!
 * Shortest Job First
 * Non-preemptive dispatch by smallest burst
 */

use super::clock::Clock;
use super::selection::run_to_completion;
use super::trace::Timeline;
use super::traits::Simulator;
use super::types::Algorithm;
use crate::core::types::Time;
use crate::process::Entry;

/// SJF simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf {
    switch_cost: Time,
}

impl Sjf {
    pub const fn new(switch_cost: Time) -> Self {
        Self { switch_cost }
    }
}

impl Simulator for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline) {
        run_to_completion(entries, clock, timeline, |entry, _| entry.process.burst);
    }
}
