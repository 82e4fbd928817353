use crate::analysis::types::{ClassifiedLine, LogEntry, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

// 2025-01-10 09:00:01 INFO Application started successfully
static LINE_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<timestamp>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2})[ \t]+(?P<level>INFO|WARNING|ERROR|DEBUG|CRITICAL)(?P<message>.*)$",
    )
    .expect("line grammar must compile")
});

/// Classify one trimmed, non-blank line.
///
/// Only a leading timestamp followed by a level token counts. A level name
/// that merely appears somewhere in the line does not.
pub fn classify_line(line: &str) -> ClassifiedLine {
    let Some(caps) = LINE_GRAMMAR.captures(line) else {
        return ClassifiedLine::Unparsed;
    };

    let Some(level) = caps
        .name("level")
        .and_then(|m| m.as_str().parse::<Severity>().ok())
    else {
        return ClassifiedLine::Unparsed;
    };

    ClassifiedLine::Entry(LogEntry {
        timestamp: caps["timestamp"].to_string(),
        level,
        message: caps
            .name("message")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}
