//! Shared application state for the podstat server.
//!
//! One `AppState` is built at startup and cloned into every handler. The
//! counter store lives here, not in a global, so tests get a fresh one each.

use std::fs;
use std::sync::Arc;

use podstat_core::error::{PodstatError, Result};
use podstat_core::render::AppMeta;
use podstat_core::CounterStore;

use crate::config::AppConfig;
use crate::obs::TrackHitsLayer;
use crate::ui;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    stats: Arc<CounterStore>,
}

struct AppStateInner {
    meta: AppMeta,
    index_template: String,
}

impl AppState {
    /// Build state with a fresh counter store.
    /// Fails when `ui.template_path` is set but cannot be read.
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let index_template = match &cfg.ui.template_path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                PodstatError::BadConfig(format!("read template {path} failed: {e}"))
            })?,
            None => ui::INDEX_TEMPLATE.to_string(),
        };
        Ok(Self::from_parts(cfg, Arc::new(CounterStore::new()), index_template))
    }

    pub fn from_parts(cfg: AppConfig, stats: Arc<CounterStore>, index_template: String) -> Self {
        let meta = cfg.meta();
        Self {
            inner: Arc::new(AppStateInner {
                meta,
                index_template,
            }),
            stats,
        }
    }

    pub fn meta(&self) -> &AppMeta {
        &self.inner.meta
    }

    pub fn index_template(&self) -> &str {
        &self.inner.index_template
    }

    pub fn stats(&self) -> Arc<CounterStore> {
        Arc::clone(&self.stats)
    }

    /// Instrumentation layer attributing hits to `route`.
    pub fn track(&self, route: &'static str) -> TrackHitsLayer {
        TrackHitsLayer::new(self.stats(), route)
    }
}
