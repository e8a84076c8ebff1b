use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use dashmap::DashMap;

use super::snapshot::Snapshot;

/// Total and per-route hit counters plus the process start time.
///
/// Update order: `total` is bumped before the route counter, so a concurrent
/// reader may see a hit in `total` that is not yet in the per-route map, never
/// the reverse. Neither counter ever decreases.
#[derive(Debug)]
pub struct CounterStore {
    total: AtomicU64,
    per_route: DashMap<String, AtomicU64>,
    started: Instant,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterStore {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    /// Store whose uptime is measured from `started`.
    pub fn started_at(started: Instant) -> Self {
        Self {
            total: AtomicU64::new(0),
            per_route: DashMap::new(),
            started,
        }
    }

    /// Count one request against `route`.
    ///
    /// The route increment is a `Release` so a reader that observes it (with
    /// `Acquire`) also observes the earlier `total` increment.
    pub fn record_hit(&self, route: &str) {
        self.total.fetch_add(1, Ordering::Relaxed);

        // Fast path: the key already exists, only a shard read lock is taken.
        if let Some(counter) = self.per_route.get(route) {
            counter.fetch_add(1, Ordering::Release);
            return;
        }
        let counter = self
            .per_route
            .entry(route.to_string())
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Release);
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Owned point-in-time copy of the counters.
    ///
    /// Routes are copied before `total` is loaded, so the snapshot never
    /// shows `sum(per_route) > total`. Shard locks are held only while each
    /// entry is copied; no formatting happens under them.
    pub fn snapshot(&self) -> Snapshot {
        let per_route: BTreeMap<String, u64> = self
            .per_route
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Acquire)))
            .collect();
        let total = self.total.load(Ordering::Relaxed);
        Snapshot::new(total, per_route, self.started.elapsed())
    }
}
