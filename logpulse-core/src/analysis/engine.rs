use crate::analysis::aggregation::fold;
use crate::analysis::error::AnalysisError;
use crate::analysis::filter::{parse_filter_level, project};
use crate::analysis::health::classify_health;
use crate::analysis::parse::classify_line;
use crate::analysis::source::LogSource;
use crate::analysis::types::{Analysis, AnalysisSummary};

/// Analyze a line source.
///
/// The filter is validated before the source is opened. With a filter the
/// result is a count-only [`Analysis::Filtered`]; without one it is the full
/// summary including the health verdict.
pub fn analyze(source: &LogSource, filter_level: Option<&str>) -> Result<Analysis, AnalysisError> {
    let filter = parse_filter_level(filter_level)?;
    let source_name = source.name();

    tracing::debug!(source = %source_name, filter = ?filter, "analyzing log source");

    let lines = source.read_lines()?;
    if lines.is_empty() {
        return Err(AnalysisError::EmptySource { source_name });
    }

    let tally = fold(lines.iter().map(|line| classify_line(line)));

    if let Some(level) = filter {
        let filtered = project(&source_name, &tally, level);
        tracing::info!(
            source = %source_name,
            filter = %level,
            total_lines = filtered.total_lines,
            matched = filtered.matched_count,
            "filtered analysis complete"
        );
        return Ok(Analysis::Filtered(filtered));
    }

    let health_status = classify_health(tally.counts.error, tally.counts.warning);

    tracing::info!(
        source = %source_name,
        total_lines = tally.total_lines(),
        unknown_lines = tally.unknown_lines,
        errors = tally.counts.error,
        warnings = tally.counts.warning,
        health = %health_status,
        "analysis complete"
    );

    Ok(Analysis::Full(AnalysisSummary {
        source_name,
        total_lines: tally.total_lines(),
        unknown_lines: tally.unknown_lines,
        counts: tally.counts,
        health_status,
        recent_errors: tally.recent_errors,
        recent_warnings: tally.recent_warnings,
    }))
}
