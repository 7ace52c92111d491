/*!
 * Simulation Clock
 * Monotonic clock with context-switch and idle accounting
 */

use crate::core::types::Time;

/// Clock shared by every dispatch loop
///
/// The clock never moves backwards. Switch cost is charged only through
/// [`Clock::charge_switch`]; callers decide when a hand-off happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: Time,
    switch_cost: Time,
    switches: u32,
    idle: Time,
}

impl Clock {
    pub const fn new(switch_cost: Time) -> Self {
        Self {
            now: 0,
            switch_cost,
            switches: 0,
            idle: 0,
        }
    }

    #[inline(always)]
    pub const fn now(&self) -> Time {
        self.now
    }

    /// Advance by executed CPU time
    #[inline]
    pub fn advance(&mut self, units: Time) {
        self.now += units;
    }

    /// Jump to `target` with the CPU idle; no-op if already past it
    pub fn idle_until(&mut self, target: Time) {
        if target > self.now {
            self.idle += target - self.now;
            self.now = target;
        }
    }

    /// Charge one context switch
    #[inline]
    pub fn charge_switch(&mut self) {
        self.now += self.switch_cost;
        self.switches += 1;
    }

    pub const fn switch_cost(&self) -> Time {
        self.switch_cost
    }

    /// Number of switches charged so far
    pub const fn switches(&self) -> u32 {
        self.switches
    }

    /// Total time spent with nothing eligible to run
    pub const fn idle_time(&self) -> Time {
        self.idle
    }
}
