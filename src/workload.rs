/*!
 * Workloads
 * Named process sets: the canonical comparison sets and JSON files
 */

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::process::{validate_workload, Process};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Named process set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub name: String,
    pub processes: Vec<Process>,
}

impl Workload {
    pub fn new(name: impl Into<String>, processes: Vec<Process>) -> Self {
        Self {
            name: name.into(),
            processes,
        }
    }

    /// Ten processes, all arriving at 0 with a burst of 10
    pub fn identical_burst() -> Self {
        Self::from_table(
            "Identical Burst Times",
            &[
                (101, 10, 3),
                (102, 10, 1),
                (103, 10, 5),
                (104, 10, 2),
                (105, 10, 4),
                (106, 10, 2),
                (107, 10, 1),
                (108, 10, 3),
                (109, 10, 4),
                (110, 10, 3),
            ],
        )
    }

    /// Long jobs interleaved with very short ones
    pub fn varied_burst() -> Self {
        Self::from_table(
            "Varied Burst Times",
            &[
                (201, 100, 3),
                (202, 2, 1),
                (203, 150, 5),
                (204, 1, 2),
                (205, 120, 4),
                (206, 3, 2),
                (207, 80, 1),
                (208, 2, 3),
                (209, 90, 4),
                (210, 1, 3),
            ],
        )
    }

    /// Moderate bursts with a wide spread of priorities
    pub fn skewed_priorities() -> Self {
        Self::from_table(
            "Skewed Priorities",
            &[
                (301, 15, 1),
                (302, 12, 9),
                (303, 18, 2),
                (304, 10, 10),
                (305, 20, 1),
                (306, 8, 8),
                (307, 25, 3),
                (308, 5, 7),
                (309, 14, 1),
                (310, 22, 6),
            ],
        )
    }

    /// All canonical sets, in report order
    pub fn canonical() -> Vec<Self> {
        vec![
            Self::identical_burst(),
            Self::varied_burst(),
            Self::skewed_priorities(),
        ]
    }

    /// Load and validate a workload from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let workload: Self = serde_json::from_str(&raw)?;
        validate_workload(&workload.processes)?;
        Ok(workload)
    }

    // (pid, burst, priority), everything arriving at 0
    fn from_table(name: &str, rows: &[(u32, u64, i32)]) -> Self {
        let processes = rows
            .iter()
            .map(|&(pid, burst, priority)| Process::new(pid, 0, burst, priority))
            .collect();
        Self::new(name, processes)
    }
}
