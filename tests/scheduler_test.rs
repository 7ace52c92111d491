/*!
 * Scheduler Tests
 * Concrete scenarios for every scheduling policy
 */

use cpu_sched_sim::scheduler::Slice;
use cpu_sched_sim::{
    compare, compare_parallel, simulator, Algorithm, ConfigError, FeedbackLevels, Fcfs, Hrrn,
    Mlfq, PriorityScheduler, Process, Quantum, RoundRobin, SimConfig, SimError, Simulator, Sjf,
    Srtf, Trace, Workload,
};
use pretty_assertions::assert_eq;

fn quantum(units: u64) -> Quantum {
    Quantum::new(units).unwrap()
}

fn levels(quantums: &[u64]) -> FeedbackLevels {
    FeedbackLevels::new(quantums).unwrap()
}

fn slice(pid: u32, start: u64, end: u64) -> Slice {
    Slice {
        pid,
        start,
        end,
        level: None,
    }
}

fn level_slice(pid: u32, start: u64, end: u64, level: usize) -> Slice {
    Slice {
        pid,
        start,
        end,
        level: Some(level),
    }
}

fn completion(trace: &Trace, pid: u32) -> u64 {
    trace.entry(pid).and_then(|e| e.completion_time).unwrap()
}

fn waiting_sum(trace: &Trace) -> u64 {
    trace.entries.iter().map(|e| e.waiting().unwrap()).sum()
}

fn turnaround_sum(trace: &Trace) -> u64 {
    trace.entries.iter().map(|e| e.turnaround().unwrap()).sum()
}

fn two_at_zero() -> Vec<Process> {
    vec![Process::new(1, 0, 5, 0), Process::new(2, 0, 3, 0)]
}

fn late_short_job() -> Vec<Process> {
    vec![Process::new(1, 0, 5, 0), Process::new(2, 2, 2, 0)]
}

fn staggered() -> Vec<Process> {
    vec![
        Process::new(1, 3, 4, 2),
        Process::new(2, 0, 6, 1),
        Process::new(3, 4, 2, 3),
        Process::new(4, 20, 3, 0),
        Process::new(5, 5, 1, 1),
    ]
}

// ============================================================================
// FCFS
// ============================================================================

#[test]
fn test_fcfs_two_processes() {
    let processes = two_at_zero();
    let trace = Fcfs::new(0).run(&processes).unwrap();

    assert_eq!(trace.slices, vec![slice(1, 0, 5), slice(2, 5, 8)]);
    assert_eq!(trace.total_time, 8);

    let metrics = trace.metrics();
    assert_eq!(metrics.avg_waiting_time, 2.5);
    assert_eq!(metrics.avg_turnaround_time, 6.5);
    assert_eq!(metrics.cpu_utilization, 100.0);
    assert_eq!(metrics.throughput, 0.25);
}

#[test]
fn test_fcfs_sorts_by_arrival_and_idles() {
    let trace = Fcfs::new(0).run(&staggered()).unwrap();

    assert_eq!(trace.dispatch_order(), vec![2, 1, 3, 5, 4]);
    assert_eq!(trace.completion_order(), vec![2, 1, 3, 5, 4]);
    assert_eq!(trace.total_time, 23);
    assert_eq!(trace.idle_time, 7);
    assert_eq!(waiting_sum(&trace), 16);
    assert_eq!(turnaround_sum(&trace), 32);
}

#[test]
fn test_fcfs_charges_switch_after_idle_gap() {
    let processes = vec![Process::new(1, 5, 3, 1), Process::new(2, 12, 2, 1)];
    let trace = Fcfs::new(1).run(&processes).unwrap();

    assert_eq!(trace.slices, vec![slice(1, 5, 8), slice(2, 13, 15)]);
    assert_eq!(trace.context_switches, 1);
    assert_eq!(trace.metrics().avg_waiting_time, 0.5);
}

#[test]
fn test_fcfs_first_dispatch_is_free() {
    let processes = vec![Process::new(1, 0, 10, 1)];
    let trace = Fcfs::new(3).run(&processes).unwrap();

    assert_eq!(trace.total_time, 10);
    assert_eq!(trace.context_switches, 0);
}

// ============================================================================
// SJF
// ============================================================================

#[test]
fn test_sjf_picks_shortest_burst() {
    let trace = Sjf::new(0).run(&two_at_zero()).unwrap();

    assert_eq!(trace.slices, vec![slice(2, 0, 3), slice(1, 3, 8)]);
    assert_eq!(trace.metrics().avg_waiting_time, 1.5);
}

#[test]
fn test_sjf_is_non_preemptive() {
    let trace = Sjf::new(0).run(&staggered()).unwrap();

    // Process 2 runs alone from 0 to 6 even though shorter jobs arrive meanwhile
    assert_eq!(trace.slices[0], slice(2, 0, 6));
    assert_eq!(trace.completion_order(), vec![2, 5, 3, 1, 4]);
    assert_eq!(waiting_sum(&trace), 10);
}

#[test]
fn test_sjf_switch_cost() {
    let trace = Sjf::new(2).run(&two_at_zero()).unwrap();

    assert_eq!(trace.slices, vec![slice(2, 0, 3), slice(1, 5, 10)]);
    assert_eq!(trace.total_time, 10);
    assert_eq!(trace.metrics().cpu_utilization, 80.0);
}

// ============================================================================
// SRTF
// ============================================================================

#[test]
fn test_srtf_preemption() {
    let trace = Srtf::new(0).run(&late_short_job()).unwrap();

    assert_eq!(
        trace.slices,
        vec![slice(1, 0, 2), slice(2, 2, 4), slice(1, 4, 7)]
    );
    assert_eq!(completion(&trace, 1), 7);
    assert_eq!(completion(&trace, 2), 4);
    assert_eq!(trace.entry(1).unwrap().start_time, Some(0));
}

#[test]
fn test_srtf_switch_cost_only_on_preemption() {
    let trace = Srtf::new(1).run(&late_short_job()).unwrap();

    // Charged when process 2 preempts; resuming process 1 after a completion is free
    assert_eq!(
        trace.slices,
        vec![slice(1, 0, 2), slice(2, 3, 5), slice(1, 5, 8)]
    );
    assert_eq!(trace.context_switches, 1);
    assert_eq!(trace.total_time, 8);
}

#[test]
fn test_srtf_ties_favour_earlier_entry() {
    let trace = Srtf::new(1).run(&staggered()).unwrap();

    assert_eq!(trace.slices[0], slice(2, 0, 6));
    assert_eq!(trace.context_switches, 0);
    assert_eq!(trace.total_time, 23);
    assert_eq!(waiting_sum(&trace), 10);
}

// ============================================================================
// Round-Robin
// ============================================================================

#[test]
fn test_round_robin_rotation() {
    let trace = RoundRobin::new(quantum(4), 0).run(&two_at_zero()).unwrap();

    assert_eq!(
        trace.slices,
        vec![slice(1, 0, 4), slice(2, 4, 7), slice(1, 7, 8)]
    );
    assert_eq!(trace.metrics().avg_waiting_time, 3.5);
}

#[test]
fn test_round_robin_charges_requeue_and_handoff() {
    let trace = RoundRobin::new(quantum(2), 2).run(&two_at_zero()).unwrap();

    assert_eq!(
        trace.slices,
        vec![
            slice(1, 0, 2),
            slice(2, 6, 8),
            slice(1, 12, 14),
            slice(2, 18, 19),
            slice(1, 19, 20),
        ]
    );
    assert_eq!(trace.context_switches, 6);
    assert_eq!(trace.switch_overhead(), 12);
    assert_eq!(trace.metrics().avg_waiting_time, 15.5);
}

#[test]
fn test_round_robin_sole_process_resumes_free() {
    let processes = vec![Process::new(1, 0, 10, 1)];
    let trace = RoundRobin::new(quantum(4), 3).run(&processes).unwrap();

    assert_eq!(trace.slices, vec![slice(1, 0, 10)]);
    assert_eq!(trace.total_time, 10);
    assert_eq!(trace.context_switches, 0);
}

#[test]
fn test_round_robin_jumps_to_next_arrival() {
    let processes = vec![Process::new(1, 5, 3, 1), Process::new(2, 12, 2, 1)];
    let trace = RoundRobin::new(quantum(2), 1).run(&processes).unwrap();

    assert_eq!(trace.slices, vec![slice(1, 5, 8), slice(2, 12, 14)]);
    assert_eq!(trace.idle_time, 9);
    assert_eq!(trace.metrics().avg_waiting_time, 0.0);
}

#[test]
fn test_round_robin_admits_arrivals_before_requeue() {
    let trace = RoundRobin::new(quantum(3), 0).run(&staggered()).unwrap();

    // Process 1 arrives as the first slice ends and queues ahead of process 2
    assert_eq!(trace.dispatch_order(), vec![2, 1, 3, 5, 4]);
    assert_eq!(trace.slices[1], slice(1, 3, 6));
    assert_eq!(waiting_sum(&trace), 20);
}

// ============================================================================
// Priority
// ============================================================================

#[test]
fn test_priority_lower_value_wins() {
    let trace = PriorityScheduler::new(0).run(&staggered()).unwrap();

    assert_eq!(trace.completion_order(), vec![2, 5, 1, 3, 4]);
    assert_eq!(turnaround_sum(&trace), 28);
}

#[test]
fn test_priority_ties_follow_input_order() {
    let processes = vec![
        Process::new(7, 0, 4, 2),
        Process::new(8, 0, 1, 1),
        Process::new(9, 0, 2, 1),
    ];
    let trace = PriorityScheduler::new(0).run(&processes).unwrap();

    assert_eq!(trace.dispatch_order(), vec![8, 9, 7]);
}

// ============================================================================
// HRRN
// ============================================================================

#[test]
fn test_hrrn_favours_highest_ratio() {
    let trace = Hrrn::new(0).run(&staggered()).unwrap();

    // At t=6 processes 3 and 5 tie at ratio 2.0; the earlier entry wins
    assert_eq!(trace.dispatch_order(), vec![2, 3, 5, 1, 4]);
    assert_eq!(turnaround_sum(&trace), 27);
}

#[test]
fn test_hrrn_equal_ratios_fall_back_to_input_order() {
    let trace = Hrrn::new(0).run(&two_at_zero()).unwrap();
    assert_eq!(trace.dispatch_order(), vec![1, 2]);
}

// ============================================================================
// MLFQ
// ============================================================================

#[test]
fn test_mlfq_demotes_after_quantum() {
    let trace = Mlfq::new(levels(&[4, 8, 16]), 0)
        .run(&two_at_zero())
        .unwrap();

    assert_eq!(
        trace.slices,
        vec![
            level_slice(1, 0, 4, 0),
            level_slice(2, 4, 7, 0),
            level_slice(1, 7, 8, 1),
        ]
    );
    assert_eq!(trace.metrics().avg_turnaround_time, 7.5);
}

#[test]
fn test_mlfq_charges_demotion_even_when_alone() {
    let processes = vec![Process::new(1, 0, 10, 1)];
    let trace = Mlfq::new(levels(&[4, 8, 16]), 3).run(&processes).unwrap();

    assert_eq!(
        trace.slices,
        vec![level_slice(1, 0, 4, 0), level_slice(1, 7, 13, 1)]
    );
    assert_eq!(trace.total_time, 13);
    assert_eq!(trace.context_switches, 1);
}

#[test]
fn test_mlfq_stays_on_last_level() {
    let processes = vec![Process::new(1, 0, 7, 0)];
    let trace = Mlfq::new(levels(&[1, 2]), 0).run(&processes).unwrap();

    assert_eq!(
        trace.slices,
        vec![level_slice(1, 0, 1, 0), level_slice(1, 1, 7, 1)]
    );
}

#[test]
fn test_mlfq_new_arrivals_preempt_lower_levels() {
    let trace = Mlfq::new(levels(&[2, 4]), 1)
        .run(&late_short_job())
        .unwrap();

    assert_eq!(
        trace.slices,
        vec![
            level_slice(1, 0, 2, 0),
            level_slice(2, 4, 6, 0),
            level_slice(1, 6, 9, 1),
        ]
    );
    assert_eq!(trace.total_time, 9);
    assert_eq!(trace.context_switches, 2);
}

#[test]
fn test_mlfq_with_idle_gap() {
    let processes = vec![Process::new(1, 5, 3, 1), Process::new(2, 12, 2, 1)];
    let trace = Mlfq::new(levels(&[2, 4]), 1).run(&processes).unwrap();

    assert_eq!(completion(&trace, 1), 9);
    assert_eq!(completion(&trace, 2), 14);
    assert_eq!(trace.metrics().avg_waiting_time, 0.5);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_workload_rejected() {
    for algorithm in Algorithm::ALL {
        let err = simulator(algorithm, &SimConfig::default())
            .run(&[])
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidConfiguration(ConfigError::EmptyWorkload)
        ));
    }
}

#[test]
fn test_zero_burst_rejected() {
    let processes = vec![Process::new(1, 0, 3, 0), Process::new(2, 0, 0, 0)];
    let err = Hrrn::new(0).simulate(&processes).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidConfiguration(ConfigError::ZeroBurst(2))
    ));
}

#[test]
fn test_invalid_quantums_rejected() {
    assert_eq!(Quantum::new(0), Err(ConfigError::InvalidQuantum(0)));
    assert_eq!(FeedbackLevels::new(&[]), Err(ConfigError::NoFeedbackLevels));
}

// ============================================================================
// Canonical workloads
// ============================================================================

/// (algorithm, waiting sum, turnaround sum, total time)
type Expected = [(Algorithm, u64, u64, u64); 7];

fn check_canonical(workload: &Workload, cost: u64, expected: &Expected) {
    let config = SimConfig::default().with_context_switch(cost);
    for &(algorithm, waiting, turnaround, total) in expected {
        let trace = simulator(algorithm, &config)
            .run(&workload.processes)
            .unwrap();
        assert_eq!(
            (waiting_sum(&trace), turnaround_sum(&trace), trace.total_time),
            (waiting, turnaround, total),
            "{} on {} with switch cost {}",
            algorithm,
            workload.name,
            cost
        );
    }
}

#[test]
fn test_identical_burst_figures() {
    let workload = Workload::identical_burst();
    check_canonical(
        &workload,
        1,
        &[
            (Algorithm::Fcfs, 495, 595, 109),
            (Algorithm::Sjf, 495, 595, 109),
            (Algorithm::Srtf, 450, 550, 100),
            (Algorithm::RoundRobin, 1210, 1310, 140),
            (Algorithm::Priority, 495, 595, 109),
            (Algorithm::Hrrn, 495, 595, 109),
            (Algorithm::Mlfq, 830, 930, 120),
        ],
    );
    check_canonical(
        &workload,
        0,
        &[
            (Algorithm::Fcfs, 450, 550, 100),
            (Algorithm::Sjf, 450, 550, 100),
            (Algorithm::Srtf, 450, 550, 100),
            (Algorithm::RoundRobin, 810, 910, 100),
            (Algorithm::Priority, 450, 550, 100),
            (Algorithm::Hrrn, 450, 550, 100),
            (Algorithm::Mlfq, 630, 730, 100),
        ],
    );
}

#[test]
fn test_varied_burst_figures() {
    let workload = Workload::varied_burst();
    check_canonical(
        &workload,
        1,
        &[
            (Algorithm::Fcfs, 2963, 3512, 558),
            (Algorithm::Sjf, 1013, 1562, 558),
            (Algorithm::Srtf, 968, 1517, 549),
            (Algorithm::RoundRobin, 3106, 3655, 797),
            (Algorithm::Priority, 1569, 2118, 558),
            (Algorithm::Hrrn, 1534, 2083, 558),
            (Algorithm::Mlfq, 2343, 2892, 622),
        ],
    );
    check_canonical(
        &workload,
        0,
        &[
            (Algorithm::Fcfs, 2918, 3467, 549),
            (Algorithm::Sjf, 968, 1517, 549),
            (Algorithm::Srtf, 968, 1517, 549),
            (Algorithm::RoundRobin, 1938, 2487, 549),
            (Algorithm::Priority, 1524, 2073, 549),
            (Algorithm::Hrrn, 1489, 2038, 549),
            (Algorithm::Mlfq, 1970, 2519, 549),
        ],
    );
}

#[test]
fn test_skewed_priorities_figures() {
    let workload = Workload::skewed_priorities();
    check_canonical(
        &workload,
        1,
        &[
            (Algorithm::Fcfs, 693, 842, 158),
            (Algorithm::Sjf, 542, 691, 158),
            (Algorithm::Srtf, 497, 646, 149),
            (Algorithm::RoundRobin, 1433, 1582, 211),
            (Algorithm::Priority, 802, 951, 158),
            (Algorithm::Hrrn, 568, 717, 158),
            (Algorithm::Mlfq, 1217, 1366, 181),
        ],
    );
    check_canonical(
        &workload,
        0,
        &[
            (Algorithm::Fcfs, 648, 797, 149),
            (Algorithm::Sjf, 497, 646, 149),
            (Algorithm::Srtf, 497, 646, 149),
            (Algorithm::RoundRobin, 955, 1104, 149),
            (Algorithm::Priority, 757, 906, 149),
            (Algorithm::Hrrn, 523, 672, 149),
            (Algorithm::Mlfq, 925, 1074, 149),
        ],
    );
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_compare_runs_configured_algorithms() {
    let workload = Workload::varied_burst();
    let config = SimConfig::default()
        .with_context_switch(1)
        .with_algorithms(&[Algorithm::Fcfs, Algorithm::Srtf]);

    let comparison = compare(&workload.processes, &config).unwrap();
    assert_eq!(comparison.outcomes.len(), 2);
    assert_eq!(comparison.context_switch, 1);
    assert_eq!(comparison.best_waiting(), Some(Algorithm::Srtf));
    assert_eq!(comparison.get(Algorithm::Srtf).unwrap().avg_waiting_time, 96.8);
    assert!(comparison.get(Algorithm::Mlfq).is_none());
}

#[test]
fn test_parallel_matches_sequential() {
    for workload in Workload::canonical() {
        let config = SimConfig::default().with_context_switch(1);
        let sequential = compare(&workload.processes, &config).unwrap();
        let parallel = compare_parallel(&workload.processes, &config).unwrap();
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_compare_rejects_invalid_workload() {
    let err = compare(&[], &SimConfig::default()).unwrap_err();
    assert!(err.is_invalid_configuration());
    let err = compare_parallel(&[], &SimConfig::default()).unwrap_err();
    assert!(err.is_invalid_configuration());
}
