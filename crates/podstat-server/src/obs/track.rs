use std::sync::Arc;
use std::task::{Context, Poll};

use podstat_core::CounterStore;
use tower::{Layer, Service};

/// Tower layer that counts one hit per request against a fixed route.
#[derive(Clone)]
pub struct TrackHitsLayer {
    stats: Arc<CounterStore>,
    route: Arc<str>,
}

impl TrackHitsLayer {
    pub fn new(stats: Arc<CounterStore>, route: impl Into<Arc<str>>) -> Self {
        Self {
            stats,
            route: route.into(),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }
}

impl<S> Layer<S> for TrackHitsLayer {
    type Service = TrackHits<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TrackHits {
            inner,
            stats: Arc::clone(&self.stats),
            route: Arc::clone(&self.route),
        }
    }
}

/// Service wrapper produced by [`TrackHitsLayer`].
///
/// The hit is recorded in `call`, before the inner service runs, so requests
/// whose handler fails or panics are still counted. The inner future,
/// response and error pass through untouched.
#[derive(Clone)]
pub struct TrackHits<S> {
    inner: S,
    stats: Arc<CounterStore>,
    route: Arc<str>,
}

impl<S, Req> Service<Req> for TrackHits<S>
where
    S: Service<Req>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        self.stats.record_hit(&self.route);
        tracing::trace!(route = %self.route, "hit recorded");
        self.inner.call(req)
    }
}
