/*!
 * Monitoring
 * Metrics calculation and simulation tracing
 */

mod metrics;
mod tracer;

pub use metrics::Metrics;
pub use tracer::{generate_trace_id, init_tracing, SimulationSpan, ENV_TRACE_JSON};
