/*!
 * Report Rendering
 * Fixed-width tables and JSON output for policy comparisons
 */

use crate::core::types::{SimResult, Time};
use crate::scheduler::Comparison;
use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 68;
const BANNER_WIDTH: usize = 63;

/// One workload's comparison, as emitted in JSON reports
#[derive(Debug, Clone, Serialize)]
pub struct Section<'a> {
    pub workload: &'a str,
    #[serde(flatten)]
    pub comparison: &'a Comparison,
}

/// Banner announcing a group of runs sharing one switch cost
pub fn render_banner(context_switch: Time) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!(
        "\n\n{rule}\n                TESTS WITH CONTEXT SWITCH TIME = {context_switch}\n{rule}\n"
    )
}

/// Fixed-width table of every outcome in a comparison
pub struct Table<'a> {
    pub workload: &'a str,
    pub comparison: &'a Comparison,
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n====== Testing {} ======", self.workload)?;
        writeln!(
            f,
            "Algorithm      AWT    ATT    CPU%   Throughput  (CS Time: {})",
            self.comparison.context_switch
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for outcome in &self.comparison.outcomes {
            let m = &outcome.metrics;
            writeln!(
                f,
                "{:>12}{:>8.2}{:>7.2}{:>7.2}{:>10.2}",
                outcome.algorithm.label(),
                m.avg_waiting_time,
                m.avg_turnaround_time,
                m.cpu_utilization,
                m.throughput
            )?;
        }
        Ok(())
    }
}

/// Render the table for one workload, two decimals per column
pub fn render_table(workload: &str, comparison: &Comparison) -> String {
    Table {
        workload,
        comparison,
    }
    .to_string()
}

/// Pretty-printed JSON array of sections
pub fn render_json(sections: &[Section<'_>]) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(sections)?)
}
