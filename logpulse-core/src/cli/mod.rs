pub mod analyze;
pub mod conf;

use crate::analysis::AnalysisError;
use crate::conf::ConfigError;

// sysexits(3)
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_DATAERR: i32 = 65;
pub const EXIT_NOINPUT: i32 = 66;
pub const EXIT_IOERR: i32 = 74;
pub const EXIT_CONFIG: i32 = 78;

/// Map the root cause of a failed command to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<AnalysisError>() {
        return match err {
            AnalysisError::InvalidFilterLevel { .. } => EXIT_USAGE,
            AnalysisError::EmptySource { .. } => EXIT_DATAERR,
            AnalysisError::SourceNotFound { .. } => EXIT_NOINPUT,
            AnalysisError::SourceReadFailure { .. } => EXIT_IOERR,
        };
    }

    if err.downcast_ref::<ConfigError>().is_some() {
        return EXIT_CONFIG;
    }

    EXIT_FAILURE
}

pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.downcast_ref::<AnalysisError>() {
        return analysis_error_hint(err);
    }

    err.downcast_ref::<ConfigError>()
        .and_then(conf::config_error_hint)
}

pub fn analysis_error_hint(err: &AnalysisError) -> Option<&'static str> {
    match err {
        AnalysisError::SourceNotFound { .. } => Some(
            "Pass a log file path, use `-` to read stdin, or set analysis.default_source in logpulse.toml.",
        ),
        AnalysisError::EmptySource { .. } => None,
        AnalysisError::InvalidFilterLevel { .. } => {
            Some("Valid levels are INFO, WARNING, ERROR, DEBUG and CRITICAL (any case).")
        }
        AnalysisError::SourceReadFailure { .. } => None,
    }
}
