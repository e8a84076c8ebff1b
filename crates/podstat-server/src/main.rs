//! podstat server binary.
//!
//! Reports identity, health and request counts:
//! `/`, `/healthz`, `/version`, `/info`, `/metrics`, `/static/*`.

use tracing_subscriber::{fmt, EnvFilter};

use podstat_server::{config, server};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg = match config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "config load failed");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(cfg).await {
        tracing::error!(code = e.code(), error = %e, "podstat failed");
        std::process::exit(1);
    }
}
