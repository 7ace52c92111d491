/*!
 * Core Types
 * Common types used across the simulator
 */

use super::errors::SimError;

/// Process ID type
pub type Pid = u32;

/// Simulated time in abstract clock units
pub type Time = u64;

/// Priority level (lower value is more important)
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, SimError>;
