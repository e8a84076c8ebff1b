//! Server config loader (strict YAML file + environment overrides).
//!
//! Resolution order:
//! 1. `PODSTAT_CONFIG` names a YAML file (must exist), else `podstat.yaml`
//!    in the working directory if present, else built-in defaults.
//! 2. `APP_VERSION`, `POD_NAME`, `PORT` override the file values.
//! 3. The result is validated.

pub mod schema;

use std::fs;
use std::path::Path;

use podstat_core::error::{PodstatError, Result};

pub use schema::{AppConfig, AppSection, ServerSection, UiSection};

pub const CONFIG_PATH_ENV: &str = "PODSTAT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "podstat.yaml";

pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_POD_NAME: &str = "POD_NAME";
pub const ENV_PORT: &str = "PORT";

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PodstatError::BadConfig(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| PodstatError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load config using `env` for variable lookup.
///
/// Empty variables are treated as unset.
pub fn load<F>(env: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

    let mut cfg = match lookup(CONFIG_PATH_ENV) {
        Some(path) => load_from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        None => AppConfig::default(),
    };

    if let Some(version) = lookup(ENV_APP_VERSION) {
        cfg.app.version = version;
    }
    if let Some(pod) = lookup(ENV_POD_NAME) {
        cfg.app.pod_name = pod;
    }
    if let Some(port) = lookup(ENV_PORT) {
        cfg.server.port = port
            .parse()
            .map_err(|_| PodstatError::BadConfig(format!("{ENV_PORT} must be a port number, got {port:?}")))?;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// [`load`] against the process environment.
pub fn from_env() -> Result<AppConfig> {
    load(|key| std::env::var(key).ok())
}
