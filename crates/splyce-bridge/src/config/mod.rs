//! Bridge config loader (strict parsing).
//!
//! A missing or unreadable file is not an error: defaults apply and a warning
//! is logged. A file that exists but does not parse or validate is fatal.

pub mod schema;

use std::fs;
use std::path::Path;

use splyce_core::error::{Result, SplyceError};

pub use schema::BridgeConfig;

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "splyce.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<BridgeConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "could not read config, using defaults"
            );
            Ok(BridgeConfig::default())
        }
    }
}

pub fn load_from_str(s: &str) -> Result<BridgeConfig> {
    // serde_yaml rejects an empty document; an empty file means "all defaults".
    if s.trim().is_empty() {
        return Ok(BridgeConfig::default());
    }
    let cfg: BridgeConfig = serde_yaml::from_str(s)
        .map_err(|e| SplyceError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
