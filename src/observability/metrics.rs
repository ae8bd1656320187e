//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_upstream_requests_total` (counter): upstream calls by upstream, outcome
//! - `gateway_upstream_duration_seconds` (histogram): upstream latency by upstream
//!
//! Without an installed recorder every macro below is a no-op, so tests and
//! deployments with metrics disabled pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record the outcome and latency of one upstream call.
pub fn record_upstream_call(upstream: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "gateway_upstream_requests_total",
        "upstream" => upstream,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!(
        "gateway_upstream_duration_seconds",
        "upstream" => upstream
    )
    .record(start.elapsed().as_secs_f64());
}
