use std::collections::BTreeMap;
use std::time::Duration;

/// Immutable copy of the counters taken by [`super::CounterStore::snapshot`].
///
/// Routes are kept in a `BTreeMap`, so every view iterates them in the same
/// (sorted) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    total: u64,
    per_route: BTreeMap<String, u64>,
    uptime: Duration,
}

impl Snapshot {
    pub fn new(total: u64, per_route: BTreeMap<String, u64>, uptime: Duration) -> Self {
        Self {
            total,
            per_route,
            uptime,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_route(&self) -> &BTreeMap<String, u64> {
        &self.per_route
    }

    /// Hits recorded for `route`, 0 when it has never been seen.
    pub fn route_count(&self, route: &str) -> u64 {
        self.per_route.get(route).copied().unwrap_or(0)
    }

    pub fn uptime(&self) -> Duration {
        self.uptime
    }

    /// Whole seconds since start (floor).
    pub fn uptime_secs(&self) -> u64 {
        self.uptime.as_secs()
    }

    /// Hand the per-route map to the caller. The store is unaffected by
    /// anything done to it.
    pub fn into_per_route(self) -> BTreeMap<String, u64> {
        self.per_route
    }
}
