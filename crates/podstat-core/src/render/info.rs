//! Structured info payload (`/info` and the index page).

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::uptime::format_uptime;
use crate::stats::Snapshot;

/// Static identity of the running instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMeta {
    pub app_name: String,
    pub version: String,
    pub pod_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub app_name: String,
    pub version: String,
    pub pod_name: String,
    /// RFC 3339, UTC, whole seconds.
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub uptime_formatted: String,
    pub total_requests: u64,
    pub requests_per_endpoint: BTreeMap<String, u64>,
}

impl AppInfo {
    pub fn new(meta: &AppMeta, snap: &Snapshot, now: DateTime<Utc>) -> Self {
        Self {
            app_name: meta.app_name.clone(),
            version: meta.version.clone(),
            pod_name: meta.pod_name.clone(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            uptime_seconds: snap.uptime_secs(),
            uptime_formatted: format_uptime(snap.uptime()),
            total_requests: snap.total(),
            requests_per_endpoint: snap.per_route().clone(),
        }
    }
}
