/*!
 * Shortest Remaining Time First
 * Preemptive dispatch re-evaluated every clock tick
 */

use super::clock::Clock;
use super::selection::{next_arrival, select_min};
use super::trace::Timeline;
use super::traits::Simulator;
use super::types::Algorithm;
use crate::core::types::Time;
use crate::process::Entry;
use tracing::trace;

/// SRTF simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf {
    switch_cost: Time,
}

impl Srtf {
    pub const fn new(switch_cost: Time) -> Self {
        Self { switch_cost }
    }
}

impl Simulator for Srtf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline) {
        // Cleared on completion, so the next pick is not a hand-off
        let mut current: Option<usize> = None;

        loop {
            let now = clock.now();
            let Some(idx) = select_min(entries, now, |e| e.remaining) else {
                match next_arrival(entries) {
                    Some(arrival) => {
                        clock.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            if current.is_some_and(|running| running != idx) {
                trace!(pid = entries[idx].pid(), at = now, "preempt");
                clock.charge_switch();
            }
            current = Some(idx);

            let entry = &mut entries[idx];
            let start = clock.now();
            let used = entry.run(start, 1);
            clock.advance(used);
            timeline.record(entry.pid(), start, clock.now(), None);

            if entry.is_finished() {
                entry.complete(clock.now());
                current = None;
            }
        }
    }
}
