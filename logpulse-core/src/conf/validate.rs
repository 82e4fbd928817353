use crate::analysis::Severity;
use crate::conf::error::ConfigError;
use crate::conf::types::LogpulseConfig;
use std::path::Path;

pub fn validate_config(path: &Path, cfg: &LogpulseConfig) -> Result<(), ConfigError> {
    if let Some(level) = &cfg.analysis.filter_level {
        if !level.trim().is_empty() && level.parse::<Severity>().is_err() {
            return Err(ConfigError::InvalidFilterLevel {
                path: path.to_path_buf(),
                value: level.clone(),
            });
        }
    }

    Ok(())
}
