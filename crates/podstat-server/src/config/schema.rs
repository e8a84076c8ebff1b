use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use podstat_core::error::{PodstatError, Result};
use podstat_core::render::AppMeta;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,

    #[serde(default)]
    pub app: AppSection,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub ui: UiSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            app: AppSection::default(),
            server: ServerSection::default(),
            ui: UiSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PodstatError::UnsupportedVersion);
        }
        self.app.validate()?;
        self.server.validate()?;
        Ok(())
    }

    pub fn meta(&self) -> AppMeta {
        AppMeta {
            app_name: self.app.name.clone(),
            version: self.app.version.clone(),
            pod_name: self.app.pod_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,

    #[serde(default = "default_pod_name")]
    pub pod_name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            pod_name: default_pod_name(),
        }
    }
}

impl AppSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PodstatError::BadConfig("app.name must not be empty".into()));
        }
        if self.version.trim().is_empty() {
            return Err(PodstatError::BadConfig("app.version must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(PodstatError::BadConfig("server.port must not be 0".into()));
        }
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            PodstatError::BadConfig(format!("server.host {:?} is not an IP address: {e}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiSection {
    /// Replaces the embedded index page template when set.
    #[serde(default)]
    pub template_path: Option<String>,
}

fn default_config_version() -> u32 {
    1
}
fn default_app_name() -> String {
    "Tiny Test App".into()
}
fn default_app_version() -> String {
    "1.0.0".into()
}
fn default_pod_name() -> String {
    "unknown".into()
}
fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}
