use crate::analysis::aggregation::Tally;
use crate::analysis::error::AnalysisError;
use crate::analysis::types::{FilteredSummary, Severity};

/// Parse a caller-supplied filter value.
///
/// `None` and blank strings mean "no filter". Anything else must name one of
/// the five severities, in any case.
pub fn parse_filter_level(value: Option<&str>) -> Result<Option<Severity>, AnalysisError> {
    let Some(value) = value else {
        return Ok(None);
    };

    if value.trim().is_empty() {
        return Ok(None);
    }

    value
        .parse::<Severity>()
        .map(Some)
        .map_err(|_| AnalysisError::InvalidFilterLevel {
            value: value.to_string(),
        })
}

/// Collapse a tally to the count of a single level. Health and recency are not computed.
pub fn project(source_name: &str, tally: &Tally, level: Severity) -> FilteredSummary {
    FilteredSummary {
        source_name: source_name.to_string(),
        filter_level: level,
        total_lines: tally.total_lines(),
        matched_count: tally.counts.get(level),
    }
}
