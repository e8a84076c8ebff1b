//! Counter store concurrency and snapshot isolation tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use podstat_core::CounterStore;

#[test]
fn fresh_store_is_empty() {
    let store = CounterStore::new();
    let snap = store.snapshot();
    assert_eq!(snap.total(), 0);
    assert!(snap.per_route().is_empty());
    assert_eq!(snap.route_count("/"), 0);
}

#[test]
fn record_hit_creates_keys_lazily() {
    let store = CounterStore::new();
    store.record_hit("/healthz");
    store.record_hit("/healthz");
    store.record_hit("/info");

    let snap = store.snapshot();
    assert_eq!(snap.total(), 3);
    assert_eq!(snap.route_count("/healthz"), 2);
    assert_eq!(snap.route_count("/info"), 1);
    assert_eq!(snap.per_route().len(), 2);
}

#[test]
fn concurrent_hits_are_never_lost() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 2_000;
    let routes = ["/", "/healthz", "/info", "/metrics", "/static/"];

    let store = Arc::new(CounterStore::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    store.record_hit(routes[(t + i) % routes.len()]);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut expected: BTreeMap<String, u64> = BTreeMap::new();
    for t in 0..THREADS {
        for i in 0..PER_THREAD {
            *expected.entry(routes[(t + i) % routes.len()].to_string()).or_default() += 1;
        }
    }

    let snap = store.snapshot();
    assert_eq!(snap.total(), (THREADS * PER_THREAD) as u64);
    assert_eq!(snap.per_route(), &expected);
}

#[test]
fn quiescent_snapshot_total_matches_route_sum() {
    let store = CounterStore::new();
    for route in ["/a", "/b", "/b", "/c", "/c", "/c"] {
        store.record_hit(route);
    }
    let snap = store.snapshot();
    assert_eq!(snap.total(), snap.per_route().values().sum::<u64>());
    assert_eq!(store.total(), 6);
}

#[test]
fn mutating_a_snapshot_does_not_touch_the_store() {
    let store = CounterStore::new();
    store.record_hit("/info");

    let mut copy = store.snapshot().into_per_route();
    copy.insert("/info".into(), 999);
    copy.insert("/forged".into(), 1);

    let snap = store.snapshot();
    assert_eq!(snap.route_count("/info"), 1);
    assert_eq!(snap.route_count("/forged"), 0);
}

#[test]
fn snapshot_does_not_see_later_hits() {
    let store = CounterStore::new();
    store.record_hit("/");
    let before = store.snapshot();
    store.record_hit("/");
    assert_eq!(before.total(), 1);
    assert_eq!(before.route_count("/"), 1);
    assert_eq!(store.snapshot().total(), 2);
}

#[test]
fn uptime_is_measured_from_start() {
    let start = Instant::now()
        .checked_sub(Duration::from_secs(90))
        .expect("monotonic clock far enough from boot");
    let store = CounterStore::started_at(start);
    let snap = store.snapshot();
    assert!(snap.uptime_secs() >= 90);
    assert_eq!(store.started(), start);
}

#[test]
fn concurrent_snapshots_never_see_more_route_hits_than_total() {
    use std::sync::atomic::{AtomicBool, Ordering};

    const WRITERS: usize = 4;
    let routes = ["/", "/healthz", "/version", "/info", "/metrics", "/static/", "/a", "/b"];

    let store = Arc::new(CounterStore::new());
    let done = Arc::new(AtomicBool::new(false));
    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut i = w;
                while !done.load(Ordering::Relaxed) {
                    store.record_hit(routes[i % routes.len()]);
                    i += 1;
                }
            })
        })
        .collect();

    for _ in 0..20_000 {
        let snap = store.snapshot();
        let sum: u64 = snap.per_route().values().sum();
        assert!(sum <= snap.total(), "sum={sum} total={}", snap.total());
    }

    done.store(true, Ordering::Relaxed);
    for h in writers {
        h.join().unwrap();
    }
    let snap = store.snapshot();
    assert_eq!(snap.total(), snap.per_route().values().sum::<u64>());
}
