use std::time::Duration;

use serde::Deserialize;
use splyce_core::error::{Result, SplyceError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// UDP port the sample listener binds.
    #[serde(default = "default_listen_udp_port")]
    pub listen_udp_port: u16,

    /// TCP port serving `/metrics`.
    #[serde(default = "default_http_metrics_port")]
    pub http_metrics_port: u16,

    /// Seconds between histogram window resets.
    #[serde(default = "default_flush_interval_seconds")]
    pub flush_interval_seconds: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            listen_udp_port: default_listen_udp_port(),
            http_metrics_port: default_http_metrics_port(),
            flush_interval_seconds: default_flush_interval_seconds(),
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.listen_udp_port == 0 {
            return Err(SplyceError::Config("listen_udp_port must not be 0".into()));
        }
        if self.http_metrics_port == 0 {
            return Err(SplyceError::Config("http_metrics_port must not be 0".into()));
        }
        if !(1..=86_400).contains(&self.flush_interval_seconds) {
            return Err(SplyceError::Config(
                "flush_interval_seconds must be between 1 and 86400".into(),
            ));
        }
        Ok(())
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_seconds)
    }
}

fn default_listen_udp_port() -> u16 {
    8125
}
fn default_http_metrics_port() -> u16 {
    9100
}
fn default_flush_interval_seconds() -> u64 {
    60
}
