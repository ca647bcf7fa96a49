//! Metrics collection and exposition.
//!
//! # Metrics
//! - `todo_requests_total` (counter): total requests by method, status
//! - `todo_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Labels for method and status code only; paths are unbounded
//!   (`/todo/<id>`) and would blow up cardinality
//! - Prometheus scrape listener is spawned only when enabled in config

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Spawn the Prometheus scrape endpoint. Failure to bind is logged, not
/// fatal; the server keeps working without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    metrics::counter!(
        "todo_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!("todo_request_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}
