use super::AnalyzeArgs;
use super::plan::AnalyzePlan;
use super::render::{render_json, render_summary};
use crate::analysis::{Analysis, LogSource, analyze, parse_filter_level};
use crate::conf::resolve_config;
use crate::logging::OutputFormat;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let cfg = resolve_config(args.config.as_deref(), &cwd)?;
    let plan = AnalyzePlan::resolve(&args, &cfg);

    // Reject a bad filter before stdin is drained.
    parse_filter_level(plan.filter_level.as_deref())?;

    let source = if plan.reads_stdin() {
        LogSource::from_reader("stdin", io::stdin().lock())?
    } else {
        LogSource::file(&plan.path)
    };

    let analysis = analyze(&source, plan.filter_level.as_deref())?;

    let rendered = render(&analysis, plan.format, plan.color)?;
    println!("{rendered}");

    if let Some(path) = &plan.summary_file {
        write_summary(path, &analysis, plan.format)?;
        eprintln!("Summary written to {}", path.display());
    }

    Ok(())
}

fn render(analysis: &Analysis, format: OutputFormat, color: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Pretty => render_summary(analysis, color),
        OutputFormat::Json => render_json(analysis)?,
    })
}

/// Write the rendered result to a file, never colored.
pub fn write_summary(path: &Path, analysis: &Analysis, format: OutputFormat) -> Result<()> {
    let rendered = render(analysis, format, false)?;
    fs::write(path, rendered)
        .with_context(|| format!("failed to write summary file {}", path.display()))?;
    Ok(())
}
