/*!
 * Policy Comparison
 * Run a set of policies independently over one workload
 */

use super::fcfs::Fcfs;
use super::hrrn::Hrrn;
use super::mlfq::Mlfq;
use super::priority::PriorityScheduler;
use super::round_robin::RoundRobin;
use super::sjf::Sjf;
use super::srtf::Srtf;
use super::traits::Simulator;
use super::types::Algorithm;
use crate::core::config::SimConfig;
use crate::core::types::{SimResult, Time};
use crate::monitoring::Metrics;
use crate::process::{validate_workload, Process};
use serde::Serialize;
use std::thread;
use tracing::info;

/// Build the simulator for `algorithm` from `config`
pub fn simulator(algorithm: Algorithm, config: &SimConfig) -> Box<dyn Simulator> {
    let cost = config.context_switch;
    match algorithm {
        Algorithm::Fcfs => Box::new(Fcfs::new(cost)),
        Algorithm::Sjf => Box::new(Sjf::new(cost)),
        Algorithm::Srtf => Box::new(Srtf::new(cost)),
        Algorithm::RoundRobin => Box::new(RoundRobin::new(config.quantum, cost)),
        Algorithm::Priority => Box::new(PriorityScheduler::new(cost)),
        Algorithm::Hrrn => Box::new(Hrrn::new(cost)),
        Algorithm::Mlfq => Box::new(Mlfq::new(config.mlfq.clone(), cost)),
    }
}

/// Metrics of one policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Metrics of several policies over the same workload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub context_switch: Time,
    pub outcomes: Vec<Outcome>,
}

impl Comparison {
    /// Metrics for `algorithm`, if it was part of the run
    pub fn get(&self, algorithm: Algorithm) -> Option<&Metrics> {
        self.outcomes
            .iter()
            .find(|o| o.algorithm == algorithm)
            .map(|o| &o.metrics)
    }

    /// Algorithm with the lowest average waiting time (first on ties)
    pub fn best_waiting(&self) -> Option<Algorithm> {
        let mut best: Option<&Outcome> = None;
        for outcome in &self.outcomes {
            match best {
                Some(b) if outcome.metrics.avg_waiting_time >= b.metrics.avg_waiting_time => {}
                _ => best = Some(outcome),
            }
        }
        best.map(|o| o.algorithm)
    }
}

/// Run every configured policy, one after another
pub fn compare(processes: &[Process], config: &SimConfig) -> SimResult<Comparison> {
    validate_workload(processes)?;

    let outcomes = config
        .algorithms
        .iter()
        .map(|&algorithm| -> SimResult<Outcome> {
            let metrics = simulator(algorithm, config).simulate(processes)?;
            Ok(Outcome { algorithm, metrics })
        })
        .collect::<SimResult<Vec<_>>>()?;

    info!(
        processes = processes.len(),
        algorithms = outcomes.len(),
        context_switch = config.context_switch,
        "comparison complete"
    );

    Ok(Comparison {
        context_switch: config.context_switch,
        outcomes,
    })
}

/// Run every configured policy on its own scoped thread
///
/// Simulators share no mutable state, so the result equals [`compare`].
pub fn compare_parallel(processes: &[Process], config: &SimConfig) -> SimResult<Comparison> {
    validate_workload(processes)?;

    let results: Vec<SimResult<Outcome>> = thread::scope(|scope| {
        let handles: Vec<_> = config
            .algorithms
            .iter()
            .map(|&algorithm| {
                let sim = simulator(algorithm, config);
                scope.spawn(move || {
                    sim.simulate(processes)
                        .map(|metrics| Outcome { algorithm, metrics })
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    });

    let outcomes = results.into_iter().collect::<SimResult<Vec<_>>>()?;

    info!(
        processes = processes.len(),
        algorithms = outcomes.len(),
        context_switch = config.context_switch,
        "parallel comparison complete"
    );

    Ok(Comparison {
        context_switch: config.context_switch,
        outcomes,
    })
}
