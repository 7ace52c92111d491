/*!
 * Scheduler Types
 * Domain types for policy selection and time-slice configuration
 */

use crate::core::errors::{ConfigError, SimError};
use crate::core::types::Time;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest remaining time first, preemptive
    Srtf,
    /// Round-robin with fixed time quantum
    RoundRobin,
    /// Non-preemptive priority (lower value wins)
    Priority,
    /// Highest response ratio next, non-preemptive
    Hrrn,
    /// Multi-level feedback queue
    Mlfq,
}

impl Algorithm {
    /// Every algorithm, in report order
    pub const ALL: [Algorithm; 7] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::RoundRobin,
        Self::Priority,
        Self::Hrrn,
        Self::Mlfq,
    ];

    /// Canonical snake-case name, used for parsing and serialization
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
            Self::Hrrn => "hrrn",
            Self::Mlfq => "mlfq",
        }
    }

    /// Short display label used in reports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
            Self::Hrrn => "HRRN",
            Self::Mlfq => "MLFQ",
        }
    }

    /// Whether a running process can lose the CPU before finishing
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin | Self::Mlfq)
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srtf" | "srt" => Ok(Self::Srtf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            "hrrn" => Ok(Self::Hrrn),
            "mlfq" => Ok(Self::Mlfq),
            _ => Err(SimError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Time quantum for quantum-based policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantum(Time);

impl Quantum {
    /// Create new time quantum
    pub fn new(units: Time) -> Result<Self, ConfigError> {
        if units == 0 {
            return Err(ConfigError::InvalidQuantum(units));
        }
        Ok(Self(units))
    }

    /// Get clock units
    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(4)
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = Time::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

/// Quantum ladder for the multi-level feedback queue
///
/// Level 0 is the highest priority and normally has the shortest quantum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeedbackLevels(Vec<Quantum>);

impl FeedbackLevels {
    pub fn new(quantums: &[Time]) -> Result<Self, ConfigError> {
        if quantums.is_empty() {
            return Err(ConfigError::NoFeedbackLevels);
        }
        let levels = quantums
            .iter()
            .map(|&q| Quantum::new(q))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(levels))
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Quantum of a level; levels past the end use the last quantum
    pub fn quantum(&self, level: usize) -> Quantum {
        self.0[level.min(self.last_level())]
    }

    /// Index of the lowest-priority level
    pub fn last_level(&self) -> usize {
        self.0.len() - 1
    }

    /// Level a process drops to after exhausting its quantum
    pub fn demote(&self, level: usize) -> usize {
        (level + 1).min(self.last_level())
    }
}

impl Default for FeedbackLevels {
    fn default() -> Self {
        Self(vec![Quantum(4), Quantum(8), Quantum(16)])
    }
}

impl<'de> Deserialize<'de> for FeedbackLevels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let quantums = Vec::<Time>::deserialize(deserializer)?;
        Self::new(&quantums).map_err(serde::de::Error::custom)
    }
}
