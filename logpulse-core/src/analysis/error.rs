use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a single `analyze` call.
///
/// Lines that fail the grammar are not errors; they are counted as unknown.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("log source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("log source '{source_name}' has no non-blank lines")]
    EmptySource { source_name: String },

    #[error("invalid filter level '{value}' (expected one of INFO, WARNING, ERROR, DEBUG, CRITICAL)")]
    InvalidFilterLevel { value: String },

    #[error("failed to read log source '{source_name}': {source}")]
    SourceReadFailure {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    pub fn read_failure(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceReadFailure {
            source_name: source_name.into(),
            source,
        }
    }
}
