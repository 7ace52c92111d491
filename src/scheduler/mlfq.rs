/*!
 * Multi-Level Feedback Queue
 * Strict-priority FIFO levels with demotion on quantum expiry
 */

use super::clock::Clock;
use super::queue::Arrivals;
use super::trace::Timeline;
use super::traits::Simulator;
use super::types::{Algorithm, FeedbackLevels};
use crate::core::types::Time;
use crate::process::Entry;
use std::collections::VecDeque;
use tracing::trace;

/// MLFQ simulator
///
/// New arrivals always enter level 0. A process that uses its whole quantum
/// without finishing drops one level (saturating at the last) and is never
/// promoted back. Demotion always charges a context switch, even when the
/// demoted process is the only one left to run.
#[derive(Debug, Clone, Default)]
pub struct Mlfq {
    levels: FeedbackLevels,
    switch_cost: Time,
}

impl Mlfq {
    pub fn new(levels: FeedbackLevels, switch_cost: Time) -> Self {
        Self {
            levels,
            switch_cost,
        }
    }

    pub fn levels(&self) -> &FeedbackLevels {
        &self.levels
    }
}

impl Simulator for Mlfq {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Mlfq
    }

    fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline) {
        let mut arrivals = Arrivals::new(entries);
        let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); self.levels.len()];
        let mut current: Option<usize> = None;

        loop {
            arrivals.admit(entries, clock.now(), |admitted| queues[0].push_back(admitted));

            let Some(level) = queues.iter().position(|q| !q.is_empty()) else {
                match arrivals.peek(entries) {
                    Some(arrival) => {
                        clock.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };
            let Some(idx) = queues[level].pop_front() else {
                break;
            };

            if current.is_some_and(|running| running != idx) {
                clock.charge_switch();
            }
            current = Some(idx);

            let start = clock.now();
            let used = entries[idx].run(start, self.levels.quantum(level).get());
            clock.advance(used);
            timeline.record(entries[idx].pid(), start, clock.now(), Some(level));

            arrivals.admit(entries, clock.now(), |admitted| queues[0].push_back(admitted));

            let entry = &mut entries[idx];
            if entry.is_finished() {
                entry.complete(clock.now());
                current = None;
            } else {
                clock.charge_switch();
                let next = self.levels.demote(level);
                trace!(pid = entry.pid(), from = level, to = next, "demote");
                queues[next].push_back(idx);
            }
        }
    }
}
