/*!
 * Simulation Tracing
 * Structured tracing for simulation runs using the tracing crate
 *
 * Features:
 * - Trace ID per run for correlating dispatch events
 * - JSON-formatted logs for structured parsing
 * - Run outcome (clock, switches, wall time) recorded on the span
 */

use crate::scheduler::{Algorithm, Trace};
use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// JSON output toggle
pub const ENV_TRACE_JSON: &str = "SCHED_SIM_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_SIM_TRACE_JSON: Enable JSON output (default: false)
///
/// A second call is a no-op.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::NONE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// Generate a unique trace ID for run correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one simulator invocation
pub struct SimulationSpan {
    span: tracing::Span,
    start: Instant,
    algorithm: Algorithm,
    trace_id: String,
}

impl SimulationSpan {
    pub fn new(algorithm: Algorithm, process_count: usize) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "simulation",
            trace_id = %trace_id,
            algorithm = algorithm.as_str(),
            processes = process_count,
            total_time = tracing::field::Empty,
            context_switches = tracing::field::Empty,
            idle_time = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            algorithm,
            trace_id,
        }
    }

    /// Get the trace ID for this run
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record the outcome of a finished run
    pub fn record_trace(&self, trace: &Trace) {
        self.span.record("total_time", trace.total_time);
        self.span.record("context_switches", trace.context_switches);
        self.span.record("idle_time", trace.idle_time);
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);
        debug!(
            trace_id = %self.trace_id,
            algorithm = self.algorithm.as_str(),
            duration_us = duration.as_micros() as u64,
            "simulation completed"
        );
    }
}
