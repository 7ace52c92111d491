/*!
 * Simulation Configuration
 *
 * Runtime configuration for the policy comparison, loadable from JSON and
 * overridable from the environment
 */

use super::errors::SimError;
use super::types::{SimResult, Time};
use crate::scheduler::types::{Algorithm, FeedbackLevels, Quantum};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Context-switch cost override
pub const ENV_CONTEXT_SWITCH: &str = "SCHED_SIM_CONTEXT_SWITCH";
/// Round-robin quantum override
pub const ENV_QUANTUM: &str = "SCHED_SIM_QUANTUM";
/// MLFQ quantum ladder override, comma-separated
pub const ENV_MLFQ: &str = "SCHED_SIM_MLFQ";
/// Algorithm subset override, comma-separated
pub const ENV_ALGORITHMS: &str = "SCHED_SIM_ALGORITHMS";

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Cost charged on each hand-off between different processes
    pub context_switch: Time,
    /// Round-robin time quantum
    pub quantum: Quantum,
    /// MLFQ quantum per level
    pub mlfq: FeedbackLevels,
    /// Algorithms to run, in report order
    pub algorithms: Vec<Algorithm>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            context_switch: 0,
            quantum: Quantum::default(),
            mlfq: FeedbackLevels::default(),
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl SimConfig {
    pub fn with_context_switch(mut self, cost: Time) -> Self {
        self.context_switch = cost;
        self
    }

    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_mlfq(mut self, levels: FeedbackLevels) -> Self {
        self.mlfq = levels;
        self
    }

    pub fn with_algorithms(mut self, algorithms: &[Algorithm]) -> Self {
        self.algorithms = algorithms.to_vec();
        self
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> SimResult<Self> {
        Self::default().apply_env()
    }

    /// Apply environment overrides on top of `self`
    pub fn apply_env(self) -> SimResult<Self> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_vars<F>(mut self, lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_CONTEXT_SWITCH) {
            self.context_switch = parse_time(ENV_CONTEXT_SWITCH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_QUANTUM) {
            self.quantum = Quantum::new(parse_time(ENV_QUANTUM, &raw)?)?;
        }
        if let Some(raw) = lookup(ENV_MLFQ) {
            let quantums = split_list(&raw)
                .map(|item| parse_time(ENV_MLFQ, item))
                .collect::<SimResult<Vec<_>>>()?;
            self.mlfq = FeedbackLevels::new(&quantums)?;
        }
        if let Some(raw) = lookup(ENV_ALGORITHMS) {
            self.algorithms = split_list(&raw)
                .map(str::parse::<Algorithm>)
                .collect::<SimResult<Vec<_>>>()?;
        }
        Ok(self)
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_time(name: &str, raw: &str) -> SimResult<Time> {
    raw.trim().parse().map_err(|_| SimError::InvalidSetting {
        name: name.to_string(),
        value: raw.to_string(),
    })
}
