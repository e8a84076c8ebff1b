//! Prometheus text exposition of a snapshot.
//!
//! Output order is fixed: total counter, per-endpoint counters, uptime gauge.

use std::fmt::Write;

use crate::stats::Snapshot;

pub const CONTENT_TYPE: &str = "text/plain";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

pub fn render(snap: &Snapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# HELP http_requests_total Total number of HTTP requests");
    let _ = writeln!(out, "# TYPE http_requests_total counter");
    let _ = writeln!(out, "http_requests_total {}", snap.total());

    let _ = writeln!(
        out,
        "\n# HELP http_requests_per_endpoint_total Total number of HTTP requests per endpoint"
    );
    let _ = writeln!(out, "# TYPE http_requests_per_endpoint_total counter");
    for (endpoint, count) in snap.per_route() {
        let _ = writeln!(
            out,
            "http_requests_per_endpoint_total{{endpoint=\"{}\"}} {}",
            escape_label(endpoint),
            count
        );
    }

    let _ = writeln!(out, "\n# HELP uptime_seconds Application uptime in seconds");
    let _ = writeln!(out, "# TYPE uptime_seconds gauge");
    let _ = writeln!(out, "uptime_seconds {:.2}", snap.uptime().as_secs_f64());
    out
}
