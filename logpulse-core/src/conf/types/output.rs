use crate::logging::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Defaults to pretty on a terminal and JSON otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Also write the rendered summary to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<PathBuf>,

    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            summary_file: None,
            color: true,
        }
    }
}
