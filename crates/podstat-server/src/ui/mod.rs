//! Index page and embedded static assets.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use podstat_core::error::PodstatError;
use podstat_core::render::{html, AppInfo};

use crate::app_state::AppState;

/// Default index page template, also served as `/static/index.html`.
pub const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");
const STYLE_CSS: &str = include_str!("../../static/style.css");

struct Asset {
    path: &'static str,
    content_type: &'static str,
    body: &'static str,
}

const ASSETS: &[Asset] = &[
    Asset {
        path: "index.html",
        content_type: html::CONTENT_TYPE,
        body: INDEX_TEMPLATE,
    },
    Asset {
        path: "style.css",
        content_type: "text/css; charset=utf-8",
        body: STYLE_CSS,
    },
];

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "404 page not found",
    )
        .into_response()
}

pub async fn index(State(state): State<AppState>) -> Response {
    let snap = state.stats().snapshot();
    let info = AppInfo::new(state.meta(), &snap, Utc::now());

    match html::render_page(state.index_template(), &info) {
        Ok(page) => (StatusCode::OK, [(header::CONTENT_TYPE, html::CONTENT_TYPE)], page).into_response(),
        Err(e) => {
            let e = PodstatError::from(e);
            tracing::error!(code = e.code(), error = %e, "index page render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "Error rendering template",
            )
                .into_response()
        }
    }
}

/// `/static/` itself: a link per embedded asset.
pub async fn asset_listing() -> Response {
    let mut body = String::from("<pre>\n");
    for a in ASSETS {
        body.push_str(&format!("<a href=\"{0}\">{0}</a>\n", a.path));
    }
    body.push_str("</pre>\n");
    (StatusCode::OK, [(header::CONTENT_TYPE, html::CONTENT_TYPE)], body).into_response()
}

/// `/static/*path`, with the `/static/` prefix already stripped by the router.
pub async fn asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    match ASSETS.iter().find(|a| a.path == path) {
        Some(a) => (StatusCode::OK, [(header::CONTENT_TYPE, a.content_type)], a.body).into_response(),
        None => not_found_response(),
    }
}

pub async fn not_found() -> Response {
    not_found_response()
}
