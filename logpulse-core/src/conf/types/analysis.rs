use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "app.log";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Log file analyzed when no path is given on the command line.
    pub default_source: PathBuf,

    /// Optional default level filter, e.g. "error".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_level: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_source: PathBuf::from(DEFAULT_SOURCE),
            filter_level: None,
        }
    }
}
