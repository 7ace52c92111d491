/*!
 * Arrival Admission
 * Arrival-ordered admission for the queue-based policies
 */

use crate::core::types::Time;
use crate::process::Entry;

/// Cursor over entry indices sorted by arrival (stable on ties)
#[derive(Debug, Clone)]
pub(crate) struct Arrivals {
    order: Vec<usize>,
    next: usize,
}

impl Arrivals {
    pub fn new(entries: &[Entry]) -> Self {
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by_key(|&idx| entries[idx].process.arrival);
        Self { order, next: 0 }
    }

    /// Hand every process that has arrived by `now` to `admit`, in arrival order
    pub fn admit<F>(&mut self, entries: &[Entry], now: Time, mut admit: F)
    where
        F: FnMut(usize),
    {
        while let Some(&idx) = self.order.get(self.next) {
            if entries[idx].process.arrival > now {
                break;
            }
            admit(idx);
            self.next += 1;
        }
    }

    /// Arrival time of the next process not yet admitted
    pub fn peek(&self, entries: &[Entry]) -> Option<Time> {
        self.order
            .get(self.next)
            .map(|&idx| entries[idx].process.arrival)
    }
}
