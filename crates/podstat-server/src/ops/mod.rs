//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/version` : configured version
//! - `/info`    : identity + request stats as JSON
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use podstat_core::render::{prometheus, AppInfo};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], "ok")
}

pub async fn version(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "version": state.meta().version }))
}

pub async fn info(State(state): State<AppState>) -> Json<AppInfo> {
    let snap = state.stats().snapshot();
    Json(AppInfo::new(state.meta(), &snap, Utc::now()))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = prometheus::render(&state.stats().snapshot());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, prometheus::CONTENT_TYPE)],
        body,
    )
        .into_response()
}
