//! Log Analysis Engine
//!
//! Turns a sequence of plain-text log lines into a structured summary.
//!
//! Every line is expected to look like
//!
//! ```text
//! 2025-01-10 09:00:05 ERROR Database connection failed
//! ```
//!
//! Lines that follow this shape are counted under their level. Anything else is
//! counted as an unknown line and otherwise ignored, so a few garbled lines never
//! abort an analysis. Only problems with the source itself (missing, unreadable,
//! empty) or a bad filter value fail the call.
//!
//! Besides the counts, the engine keeps the last few ERROR and WARNING entries
//! (in file order) and derives a coarse health verdict from the error and
//! warning totals. When the caller asks for a single level, all of that is
//! skipped and only that level's count is returned.
//!
//! The overall data processing architecture is:
//!
//! LogSource
//! read_lines
//! classify_line
//! LevelAggregator
//! Tally
//! classify_health / project
//! Analysis
//!

mod aggregation;
mod constants;
mod engine;
mod error;
mod filter;
mod health;
mod parse;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{LevelAggregator, Tally, fold};
pub use constants::*;
pub use engine::analyze;
pub use error::AnalysisError;
pub use filter::{parse_filter_level, project};
pub use health::classify_health;
pub use parse::classify_line;
pub use source::LogSource;
pub use types::*;
