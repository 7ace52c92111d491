/*!
 * Scheduling Simulator - Main Entry Point
 *
 * Runs every configured policy over each workload, once per
 * context-switch cost, and prints the comparison tables.
 */

use cpu_sched_sim::core::config::ENV_CONTEXT_SWITCH;
use cpu_sched_sim::report::{render_banner, render_json, render_table, Section};
use cpu_sched_sim::{compare, init_tracing, Comparison, SimConfig, Workload};
use tracing::info;

/// Path to a JSON workload replacing the canonical sets
const ENV_WORKLOAD: &str = "SCHED_SIM_WORKLOAD";
/// Emit JSON instead of tables
const ENV_REPORT_JSON: &str = "SCHED_SIM_REPORT_JSON";

/// Switch costs compared when none is pinned
const DEFAULT_SWITCH_COSTS: [u64; 2] = [1, 0];

fn main() -> miette::Result<()> {
    init_tracing();

    // Optional JSON config as the first argument, environment on top
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading configuration");
            SimConfig::load(&path)?
        }
        None => SimConfig::default(),
    }
    .apply_env()?;

    let workloads = match std::env::var(ENV_WORKLOAD) {
        Ok(path) => {
            info!(path = %path, "Loading workload");
            vec![Workload::load(&path)?]
        }
        Err(_) => Workload::canonical(),
    };

    let costs: Vec<u64> = if std::env::var(ENV_CONTEXT_SWITCH).is_ok() {
        vec![config.context_switch]
    } else {
        DEFAULT_SWITCH_COSTS.to_vec()
    };

    let json = std::env::var(ENV_REPORT_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    info!(
        workloads = workloads.len(),
        algorithms = config.algorithms.len(),
        quantum = config.quantum.get(),
        "Starting comparison"
    );

    let mut results: Vec<(&str, Comparison)> = Vec::new();
    for &cost in &costs {
        let run_config = config.clone().with_context_switch(cost);
        if !json {
            print!("{}", render_banner(cost));
        }
        for workload in &workloads {
            let comparison = compare(&workload.processes, &run_config)?;
            if json {
                results.push((workload.name.as_str(), comparison));
            } else {
                print!("{}", render_table(&workload.name, &comparison));
            }
        }
    }

    if json {
        let sections: Vec<Section<'_>> = results
            .iter()
            .map(|(workload, comparison)| Section {
                workload,
                comparison,
            })
            .collect();
        println!("{}", render_json(&sections)?);
    }

    Ok(())
}
