//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RealIpConfig;
use crate::error::ConfigError;

/// Load configuration from a TOML file.
///
/// Only syntactic validation happens here; trusted-proxy specs and
/// header names are checked when the config is compiled into a
/// [`Resolver`](crate::Resolver).
pub fn load_config(path: &Path) -> Result<RealIpConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RealIpConfig = toml::from_str(&content)?;
    Ok(config)
}
