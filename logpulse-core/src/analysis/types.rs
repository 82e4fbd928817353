use crate::analysis::constants::RECENT_LIMIT;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The fixed log-level vocabulary of the line grammar.
///
/// Lines that do not match the grammar never get a severity; they are tracked
/// separately as unparsed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Debug,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Debug,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Debug => "DEBUG",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}'")]
pub struct UnknownSeverity(pub String);

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Severity::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

/// One line that matched the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Captured verbatim, never re-parsed into a calendar type.
    pub timestamp: String,
    pub level: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Entry(LogEntry),
    Unparsed,
}

/// Sliding window over the most recent entries of one severity, kept in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecencyBuffer {
    entries: VecDeque<LogEntry>,
}

impl RecencyBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(RECENT_LIMIT + 1),
        }
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);

        while self.entries.len() > RECENT_LIMIT {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

/// Per-level counts. Serialized in a fixed order with upper-case keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    #[serde(rename = "INFO")]
    pub info: u64,
    #[serde(rename = "WARNING")]
    pub warning: u64,
    #[serde(rename = "ERROR")]
    pub error: u64,
    #[serde(rename = "DEBUG")]
    pub debug: u64,
    #[serde(rename = "CRITICAL")]
    pub critical: u64,
}

impl LevelCounts {
    pub fn get(&self, level: Severity) -> u64 {
        match level {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Debug => self.debug,
            Severity::Critical => self.critical,
        }
    }

    pub(crate) fn increment(&mut self, level: Severity) {
        let slot = match level {
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
            Severity::Debug => &mut self.debug,
            Severity::Critical => &mut self.critical,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u64 {
        Severity::ALL.iter().map(|level| self.get(*level)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Severity, u64)> + '_ {
        Severity::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Degraded,
    Critical,
}

impl Display for HealthStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Warning => "Warning",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Critical => "Critical",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub source_name: String,
    pub total_lines: u64,
    pub unknown_lines: u64,
    pub counts: LevelCounts,
    pub health_status: HealthStatus,
    pub recent_errors: RecencyBuffer,
    pub recent_warnings: RecencyBuffer,
}

/// Count-only view produced when a single level was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredSummary {
    pub source_name: String,
    pub filter_level: Severity,
    pub total_lines: u64,
    pub matched_count: u64,
}

/// The result of one `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Full(AnalysisSummary),
    Filtered(FilteredSummary),
}

impl Analysis {
    pub fn source_name(&self) -> &str {
        match self {
            Analysis::Full(s) => &s.source_name,
            Analysis::Filtered(s) => &s.source_name,
        }
    }

    pub fn total_lines(&self) -> u64 {
        match self {
            Analysis::Full(s) => s.total_lines,
            Analysis::Filtered(s) => s.total_lines,
        }
    }
}
