/*!
 * Scheduler Module
 * Scheduling policy simulators over a shared process and clock model
 */

pub mod clock;
pub mod comparison;
pub mod fcfs;
pub mod hrrn;
pub mod mlfq;
pub mod priority;
mod queue;
pub mod round_robin;
mod selection;
pub mod sjf;
pub mod srtf;
pub mod trace;
pub mod traits;
pub mod types;

// Re-export public API
pub use clock::Clock;
pub use comparison::{compare, compare_parallel, simulator, Comparison, Outcome};
pub use fcfs::Fcfs;
pub use hrrn::{response_ratio, Hrrn};
pub use mlfq::Mlfq;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;
pub use trace::{Slice, Timeline, Trace};
pub use traits::Simulator;
pub use types::{Algorithm, FeedbackLevels, Quantum};
