/*!
 * Priority Scheduling
 * Non-preemptive dispatch by priority value (lower wins)
 */

use super::clock::Clock;
use super::selection::run_to_completion;
use super::trace::Timeline;
use super::traits::Simulator;
use super::types::Algorithm;
use crate::core::types::Time;
use crate::process::Entry;

/// Non-preemptive priority simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler {
    switch_cost: Time,
}

impl PriorityScheduler {
    pub const fn new(switch_cost: Time) -> Self {
        Self { switch_cost }
    }
}

impl Simulator for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline) {
        run_to_completion(entries, clock, timeline, |entry, _| entry.process.priority);
    }
}
