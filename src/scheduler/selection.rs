/*!
 * Candidate Selection
 * Linear scans and the shared non-preemptive dispatch loop
 */

use super::clock::Clock;
use super::trace::Timeline;
use crate::core::types::Time;
use crate::process::Entry;
use tracing::trace;

/// Index of the ready entry with the smallest key
///
/// Strict comparison: on equal keys the lowest index wins.
pub(crate) fn select_min<K, F>(entries: &[Entry], now: Time, key: F) -> Option<usize>
where
    K: PartialOrd,
    F: Fn(&Entry) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_ready(now) {
            continue;
        }
        let candidate = key(entry);
        let better = match &best {
            Some((_, current)) => candidate < *current,
            None => true,
        };
        if better {
            best = Some((idx, candidate));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Earliest arrival among processes that have not finished
pub(crate) fn next_arrival(entries: &[Entry]) -> Option<Time> {
    entries
        .iter()
        .filter(|e| !e.is_finished())
        .map(|e| e.process.arrival)
        .min()
}

/// Non-preemptive dispatch: pick by smallest key, run to completion, repeat
///
/// Switch cost is charged before every dispatch except the first.
pub(crate) fn run_to_completion<K, F>(
    entries: &mut [Entry],
    clock: &mut Clock,
    timeline: &mut Timeline,
    key: F,
) where
    K: PartialOrd,
    F: Fn(&Entry, Time) -> K,
{
    let mut dispatched = false;
    loop {
        let now = clock.now();
        let Some(idx) = select_min(entries, now, |e| key(e, now)) else {
            match next_arrival(entries) {
                Some(arrival) => {
                    clock.idle_until(arrival);
                    continue;
                }
                None => break,
            }
        };

        if dispatched {
            clock.charge_switch();
        }
        dispatched = true;

        let entry = &mut entries[idx];
        let start = clock.now();
        trace!(pid = entry.pid(), at = start, "dispatch");
        let used = entry.run(start, entry.remaining);
        clock.advance(used);
        entry.complete(clock.now());
        timeline.record(entry.pid(), start, clock.now(), None);
    }
}
