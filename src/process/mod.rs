/*!
 * Process Module
 * Process descriptors, working state, and workload validation
 */

pub mod types;
pub mod validation;

pub use types::{working_set, Entry, Process};
pub use validation::validate_workload;
