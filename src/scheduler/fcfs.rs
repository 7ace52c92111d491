/*!
 * First-Come-First-Served
 * Non-preemptive dispatch in arrival order
 */

use super::clock::Clock;
use super::trace::Timeline;
use super::traits::Simulator;
use super::types::Algorithm;
use crate::core::types::Time;
use crate::process::Entry;
use tracing::trace;

/// FCFS simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs {
    switch_cost: Time,
}

impl Fcfs {
    pub const fn new(switch_cost: Time) -> Self {
        Self { switch_cost }
    }
}

impl Simulator for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline) {
        // Stable: equal arrivals keep caller order
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by_key(|&idx| entries[idx].process.arrival);

        for (position, idx) in order.into_iter().enumerate() {
            let entry = &mut entries[idx];
            clock.idle_until(entry.process.arrival);
            if position > 0 {
                clock.charge_switch();
            }

            let start = clock.now();
            trace!(pid = entry.pid(), at = start, "dispatch");
            let used = entry.run(start, entry.process.burst);
            clock.advance(used);
            entry.complete(clock.now());
            timeline.record(entry.pid(), start, clock.now(), None);
        }
    }
}
