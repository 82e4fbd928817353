use super::AnalyzeArgs;
use crate::conf::LogpulseConfig;
use crate::logging::{OutputFormat, default_output_format};
use std::path::PathBuf;

/// Path argument that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Effective settings for one `analyze` invocation. Flags win over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzePlan {
    pub path: PathBuf,
    pub filter_level: Option<String>,
    pub format: OutputFormat,
    pub summary_file: Option<PathBuf>,
    pub color: bool,
}

impl AnalyzePlan {
    pub fn resolve(args: &AnalyzeArgs, cfg: &LogpulseConfig) -> Self {
        let format = if args.json {
            OutputFormat::Json
        } else if args.pretty {
            OutputFormat::Pretty
        } else {
            cfg.output.format.unwrap_or_else(default_output_format)
        };

        Self {
            path: args
                .path
                .clone()
                .unwrap_or_else(|| cfg.analysis.default_source.clone()),
            filter_level: args
                .level
                .clone()
                .or_else(|| cfg.analysis.filter_level.clone()),
            format,
            summary_file: args
                .out
                .clone()
                .or_else(|| cfg.output.summary_file.clone()),
            color: cfg.output.color && !args.no_color,
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }
}
