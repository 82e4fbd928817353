use crate::conf::error::ConfigError;
use crate::conf::types::LogpulseConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "logpulse.toml";

pub fn load_config(path: &Path) -> Result<LogpulseConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: LogpulseConfig = toml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation
    //--------------------------------------------------------------------------
    validate_config(path, &cfg)?;

    Ok(cfg)
}

/// Load an explicit config file, else `logpulse.toml` under `root` if present,
/// else the built-in defaults.
pub fn resolve_config(explicit: Option<&Path>, root: &Path) -> Result<LogpulseConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let candidate = root.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "using config file");
        return load_config(&candidate);
    }

    Ok(LogpulseConfig::default())
}
