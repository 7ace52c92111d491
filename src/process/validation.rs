/*!
 * Workload Validation
 * Upfront checks that every simulator relies on for termination
 */

use super::types::Process;
use crate::core::errors::ConfigError;
use std::collections::HashSet;

/// Validate a workload before any clock state is created
pub fn validate_workload(processes: &[Process]) -> Result<(), ConfigError> {
    if processes.is_empty() {
        return Err(ConfigError::EmptyWorkload);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        // HRRN divides by burst
        if process.burst == 0 {
            return Err(ConfigError::ZeroBurst(process.pid));
        }
        if !seen.insert(process.pid) {
            return Err(ConfigError::DuplicatePid(process.pid));
        }
    }

    Ok(())
}
