/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Time};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, raised before any simulation state exists
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Workload contains no processes")]
    #[diagnostic(
        code(config::empty_workload),
        help("Metrics are averaged over the workload. Supply at least one process.")
    )]
    EmptyWorkload,

    #[error("Process {0} has a zero burst")]
    #[diagnostic(
        code(config::zero_burst),
        help("Every process needs a burst of at least one time unit.")
    )]
    ZeroBurst(Pid),

    #[error("Process id {0} appears more than once")]
    #[diagnostic(
        code(config::duplicate_pid),
        help("Process ids must be unique within a workload.")
    )]
    DuplicatePid(Pid),

    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("Time quantums must be positive.")
    )]
    InvalidQuantum(Time),

    #[error("Feedback queue has no levels")]
    #[diagnostic(
        code(config::no_feedback_levels),
        help("Configure at least one quantum, e.g. [4, 8, 16].")
    )]
    NoFeedbackLevels,
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(transparent)]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(sim::io), help("Check that the file exists and is readable."))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    #[diagnostic(code(sim::parse))]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {name}: '{value}'")]
    #[diagnostic(code(sim::invalid_setting))]
    InvalidSetting { name: String, value: String },

    #[error("Unknown scheduling algorithm '{0}'")]
    #[diagnostic(
        code(sim::unknown_algorithm),
        help("Valid: fcfs, sjf, srtf, round_robin, priority, hrrn, mlfq")
    )]
    UnknownAlgorithm(String),
}

impl SimError {
    /// Check if this error belongs to the invalid-configuration kind
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}
