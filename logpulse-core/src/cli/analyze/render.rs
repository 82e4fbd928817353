use crate::analysis::{Analysis, AnalysisSummary, FilteredSummary, HealthStatus, RecencyBuffer};
use owo_colors::OwoColorize;

pub fn render_summary(analysis: &Analysis, color: bool) -> String {
    match analysis {
        Analysis::Full(summary) => render_full(summary, color),
        Analysis::Filtered(filtered) => render_filtered(filtered),
    }
}

pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

fn header(out: &mut String, source_name: &str) {
    let title = format!("Log Analysis Summary: {source_name}");
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');
}

fn render_full(summary: &AnalysisSummary, color: bool) -> String {
    let mut out = String::new();

    header(&mut out, &summary.source_name);
    out.push_str(&format!(
        "Total lines: {} | unknown: {}\n\n",
        summary.total_lines, summary.unknown_lines
    ));

    for (level, count) in summary.counts.iter() {
        out.push_str(&format!("  {:<9} {:>6}\n", level.as_str(), count));
    }

    out.push_str(&format!(
        "\nHealth: {}\n",
        paint_health(summary.health_status, color)
    ));

    render_recent(&mut out, "Recent errors", &summary.recent_errors);
    render_recent(&mut out, "Recent warnings", &summary.recent_warnings);

    out
}

fn render_recent(out: &mut String, title: &str, buffer: &RecencyBuffer) {
    if buffer.is_empty() {
        out.push_str(&format!("\n{title}: <none>\n"));
        return;
    }

    out.push_str(&format!("\n{title}:\n"));
    for entry in buffer.iter() {
        out.push_str(&format!(
            "  {} {} {}\n",
            entry.timestamp, entry.level, entry.message
        ));
    }
}

fn render_filtered(filtered: &FilteredSummary) -> String {
    let mut out = String::new();

    header(&mut out, &filtered.source_name);
    out.push_str(&format!(
        "{}: {} (of {} lines)\n",
        filtered.filter_level, filtered.matched_count, filtered.total_lines
    ));

    out
}

fn paint_health(status: HealthStatus, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    match status {
        HealthStatus::Healthy => status.green().bold().to_string(),
        HealthStatus::Warning => status.yellow().bold().to_string(),
        HealthStatus::Degraded => status.magenta().bold().to_string(),
        HealthStatus::Critical => status.red().bold().to_string(),
    }
}
