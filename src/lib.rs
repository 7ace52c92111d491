/*!
 * CPU Scheduling Simulator Library
 * Deterministic simulation and comparison of CPU scheduling policies
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use crate::core::{ConfigError, Pid, Priority, SimConfig, SimError, SimResult, Time};
pub use monitoring::{init_tracing, Metrics};
pub use process::{Entry, Process};
pub use scheduler::{
    compare, compare_parallel, simulator, Algorithm, Comparison, FeedbackLevels, Fcfs, Hrrn, Mlfq,
    Outcome, PriorityScheduler, Quantum, RoundRobin, Simulator, Sjf, Srtf, Trace,
};
pub use workload::Workload;
