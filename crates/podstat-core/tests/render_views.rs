//! Uptime, info and Prometheus view tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use podstat_core::render::{format_uptime, prometheus, AppInfo, AppMeta};
use podstat_core::Snapshot;

fn snap(routes: &[(&str, u64)], uptime: Duration) -> Snapshot {
    let per_route: BTreeMap<String, u64> =
        routes.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    let total = per_route.values().sum();
    Snapshot::new(total, per_route, uptime)
}

#[test]
fn uptime_format_table() {
    let cases = [
        (0, "0s"),
        (45, "45s"),
        (59, "59s"),
        (60, "1m 0s"),
        (3_600, "1h 0m 0s"),
        (3_661, "1h 1m 1s"),
        (3_725, "1h 2m 5s"),
        (86_400, "1d 0h 0m 0s"),
        (90_000, "1d 1h 0m 0s"),
    ];
    for (secs, want) in cases {
        assert_eq!(format_uptime(Duration::from_secs(secs)), want, "secs={secs}");
    }
}

#[test]
fn uptime_format_ignores_fractions() {
    assert_eq!(format_uptime(Duration::from_millis(59_999)), "59s");
}

#[test]
fn info_view_serializes_flat_keys() {
    let meta = AppMeta {
        app_name: "Tiny Test App".into(),
        version: "2.3.4".into(),
        pod_name: "web-7f9c".into(),
    };
    let s = snap(&[("/healthz", 1), ("/info", 1)], Duration::from_millis(3_725_900));
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();

    let info = AppInfo::new(&meta, &s, now);
    let v = serde_json::to_value(&info).unwrap();

    assert_eq!(v["app_name"], "Tiny Test App");
    assert_eq!(v["version"], "2.3.4");
    assert_eq!(v["pod_name"], "web-7f9c");
    assert_eq!(v["timestamp"], "2026-10-16T08:30:00Z");
    assert_eq!(v["uptime_seconds"], 3725);
    assert_eq!(v["uptime_formatted"], "1h 2m 5s");
    assert_eq!(v["total_requests"], 2);
    assert_eq!(v["requests_per_endpoint"]["/healthz"], 1);
    assert_eq!(v["requests_per_endpoint"]["/info"], 1);
    assert_eq!(v.as_object().unwrap().len(), 8);
}

#[test]
fn prometheus_layout_is_fixed() {
    let s = snap(&[("/metrics", 2), ("/", 1)], Duration::from_millis(12_346));
    let text = prometheus::render(&s);

    let want = "\
# HELP http_requests_total Total number of HTTP requests
# TYPE http_requests_total counter
http_requests_total 3

# HELP http_requests_per_endpoint_total Total number of HTTP requests per endpoint
# TYPE http_requests_per_endpoint_total counter
http_requests_per_endpoint_total{endpoint=\"/\"} 1
http_requests_per_endpoint_total{endpoint=\"/metrics\"} 2

# HELP uptime_seconds Application uptime in seconds
# TYPE uptime_seconds gauge
uptime_seconds 12.35
";
    assert_eq!(text, want);
}

#[test]
fn prometheus_escapes_label_values() {
    let s = snap(&[("/a\"b\\c", 1)], Duration::ZERO);
    let text = prometheus::render(&s);
    assert!(text.contains(r#"http_requests_per_endpoint_total{endpoint="/a\"b\\c"} 1"#));
    assert!(text.contains("uptime_seconds 0.00\n"));
}

#[test]
fn prometheus_without_routes_still_has_all_families() {
    let text = prometheus::render(&snap(&[], Duration::ZERO));
    assert!(text.contains("http_requests_total 0\n"));
    assert!(text.contains("# TYPE http_requests_per_endpoint_total counter\n"));
    assert!(!text.contains("endpoint="));
    assert!(text.contains("# TYPE uptime_seconds gauge\n"));
}
