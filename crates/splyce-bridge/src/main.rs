//! splyce bridge
//!
//! - UDP: `key:value|type[|@rate]` sample lines
//! - HTTP: `/metrics` in Prometheus text format
//! - Timer: histogram windows reset every `flush_interval_seconds`
//!
//! Usage: `splyce-bridge [config.yaml]` (default `splyce.yaml`).

use tracing_subscriber::{fmt, EnvFilter};

use splyce_bridge::{config, server};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, %path, "config load failed");
            std::process::exit(1);
        }
    };
    tracing::info!(?cfg, "splyce-bridge starting");

    if let Err(e) = server::run(cfg).await {
        tracing::error!(code = e.code().as_str(), error = %e, "splyce-bridge stopped");
        std::process::exit(1);
    }
}
