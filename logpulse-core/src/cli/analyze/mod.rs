//! `logpulse analyze`
//!
//! Resolves the source, filter and output format from flags and config,
//! runs the analysis engine and renders the result to stdout (and optionally
//! to a summary file).

mod plan;
mod render;
mod run;


pub use plan::AnalyzePlan;
pub use render::{render_json, render_summary};
pub use run::{run_analyze, write_summary};

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Log file to analyze, or "-" to read stdin. Defaults to the configured source.
    pub path: Option<PathBuf>,

    /// Only report the count for one level: INFO, WARNING, ERROR, DEBUG or CRITICAL
    #[arg(short, long)]
    pub level: Option<String>,

    /// Render the result as JSON
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    /// Render the result as a human readable report
    #[arg(long)]
    pub pretty: bool,

    /// Also write the rendered summary to this file
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Path to a logpulse.toml config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
