pub mod analysis;
pub mod output;

pub use analysis::*;
pub use output::*;

use serde::{Deserialize, Serialize};

/// Root of `logpulse.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogpulseConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}
