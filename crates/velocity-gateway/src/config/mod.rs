//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use velocity_core::error::{Result, VelocityError};

pub use schema::{CorsConfig, GatewayConfig, ServerSection};

/// Config file read when `VELOCITY_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "velocity.yaml";

/// Resolve and load the gateway config.
///
/// An explicit path must exist. Without one, `velocity.yaml` is used when
/// present and built-in defaults otherwise.
pub fn load(explicit: Option<&str>) -> Result<GatewayConfig> {
    load_or_default(explicit, DEFAULT_CONFIG_PATH)
}

/// Like [`load`], with the fallback file given explicitly.
pub fn load_or_default(explicit: Option<&str>, default_path: &str) -> Result<GatewayConfig> {
    if let Some(path) = explicit {
        return load_from_file(path);
    }
    if Path::new(default_path).exists() {
        return load_from_file(default_path);
    }
    tracing::info!(path = default_path, "config file not found, using defaults");
    let cfg = GatewayConfig::default();
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VelocityError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| VelocityError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
