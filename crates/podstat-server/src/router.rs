//! Axum router wiring.
//!
//! Each route carries its own [`crate::obs::TrackHitsLayer`], keyed by the
//! route identifier below. Unknown paths are counted under `/`.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, ui};

pub mod routes {
    pub const ROOT: &str = "/";
    pub const HEALTHZ: &str = "/healthz";
    pub const VERSION: &str = "/version";
    pub const INFO: &str = "/info";
    pub const METRICS: &str = "/metrics";
    pub const STATIC: &str = "/static/";
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(ui::index).layer(state.track(routes::ROOT)))
        .route(routes::HEALTHZ, get(ops::healthz).layer(state.track(routes::HEALTHZ)))
        .route(routes::VERSION, get(ops::version).layer(state.track(routes::VERSION)))
        .route(routes::INFO, get(ops::info).layer(state.track(routes::INFO)))
        .route(routes::METRICS, get(ops::metrics).layer(state.track(routes::METRICS)))
        .route(routes::STATIC, get(ui::asset_listing).layer(state.track(routes::STATIC)))
        .route("/static/*path", get(ui::asset).layer(state.track(routes::STATIC)))
        .fallback(any(ui::not_found).layer(state.track(routes::ROOT)))
        .with_state(state)
}
