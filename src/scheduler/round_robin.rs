/*!
 * Round-Robin
 * Preemptive FIFO dispatch with a fixed time quantum
 */

use super::clock::Clock;
use super::queue::Arrivals;
use super::trace::Timeline;
use super::traits::Simulator;
use super::types::{Algorithm, Quantum};
use crate::core::types::Time;
use crate::process::Entry;
use std::collections::VecDeque;
use tracing::trace;

/// Round-robin simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: Quantum,
    switch_cost: Time,
}

impl RoundRobin {
    pub const fn new(quantum: Quantum, switch_cost: Time) -> Self {
        Self {
            quantum,
            switch_cost,
        }
    }

    pub const fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl Simulator for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline) {
        let mut arrivals = Arrivals::new(entries);
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(entries.len());
        // Survives re-queueing; cleared only when a process completes
        let mut current: Option<usize> = None;

        loop {
            arrivals.admit(entries, clock.now(), |admitted| ready.push_back(admitted));

            let Some(idx) = ready.pop_front() else {
                match arrivals.peek(entries) {
                    Some(arrival) => {
                        clock.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            if current.is_some_and(|running| running != idx) {
                clock.charge_switch();
            }
            current = Some(idx);

            let start = clock.now();
            let used = entries[idx].run(start, self.quantum.get());
            clock.advance(used);
            timeline.record(entries[idx].pid(), start, clock.now(), None);

            // Arrivals during the slice queue ahead of the preempted process
            arrivals.admit(entries, clock.now(), |admitted| ready.push_back(admitted));

            let entry = &mut entries[idx];
            if entry.is_finished() {
                entry.complete(clock.now());
                current = None;
            } else {
                // Sole ready process resumes without a switch
                if !ready.is_empty() {
                    clock.charge_switch();
                }
                trace!(pid = entry.pid(), remaining = entry.remaining, "requeue");
                ready.push_back(idx);
            }
        }
    }
}
