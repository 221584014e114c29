//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pages_requests_total` (counter): requests by path and status
//! - `pages_render_duration_seconds` (histogram): render latency by path
//!
//! # Design Decisions
//! - Prometheus exporter on a separate address, disabled by default
//! - Recording without an installed exporter is a cheap no-op, so handlers
//!   record unconditionally

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one page request: count by path/status and render latency.
pub fn record_page_request(path: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "pages_requests_total",
        "path" => path,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("pages_render_duration_seconds", "path" => path)
        .record(start.elapsed().as_secs_f64());
}
