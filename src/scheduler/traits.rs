/*!
 * Simulator Traits
 * Interface definitions for scheduling policies
 */

use super::clock::Clock;
use super::trace::{Timeline, Trace};
use super::types::Algorithm;
use crate::core::types::{SimResult, Time};
use crate::monitoring::{Metrics, SimulationSpan};
use crate::process::{validate_workload, working_set, Entry, Process};
use tracing::warn;

/// A scheduling policy run over a fixed workload
///
/// Implementors provide the dispatch loop; [`Simulator::run`] owns
/// validation, the private working copy and the clock.
pub trait Simulator: Send + Sync {
    /// Policy implemented by this simulator
    fn algorithm(&self) -> Algorithm;

    /// Context-switch cost charged on a hand-off
    fn switch_cost(&self) -> Time;

    /// Drive `entries` until every one has completed
    fn dispatch(&self, entries: &mut [Entry], clock: &mut Clock, timeline: &mut Timeline);

    /// Run the policy to completion over a private copy of `processes`
    fn run(&self, processes: &[Process]) -> SimResult<Trace> {
        let algorithm = self.algorithm();
        if let Err(e) = validate_workload(processes) {
            warn!(algorithm = algorithm.as_str(), error = %e, "rejected workload");
            return Err(e.into());
        }

        let span = SimulationSpan::new(algorithm, processes.len());
        let _entered = span.enter();

        let mut entries = working_set(processes);
        let mut clock = Clock::new(self.switch_cost());
        let mut timeline = Timeline::new();
        self.dispatch(&mut entries, &mut clock, &mut timeline);

        let trace = Trace::new(algorithm, entries, timeline, &clock);
        span.record_trace(&trace);
        Ok(trace)
    }

    /// Run the policy and reduce the trace to metrics
    fn simulate(&self, processes: &[Process]) -> SimResult<Metrics> {
        Ok(self.run(processes)?.metrics())
    }
}
