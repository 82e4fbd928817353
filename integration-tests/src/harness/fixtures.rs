use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The four-line sample used throughout the docs: one line of each of
/// INFO, ERROR and WARNING plus one line that is not a log entry.
pub fn sample_log() -> &'static str {
    "2025-01-10 09:00:01 INFO Application started successfully\n\
     2025-01-10 09:00:05 ERROR Database connection failed\n\
     not a log line at all\n\
     2025-01-10 09:00:10 WARNING Disk space low\n"
}

/// A log file living in its own temporary directory.
pub struct LogFixture {
    dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    pub fn new(file_name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(file_name);
        fs::write(&path, contents).expect("failed to write log fixture");
        Self { dir, path }
    }

    /// `count` ERROR lines with messages `failure 1..=count`.
    pub fn with_errors(file_name: &str, count: usize) -> Self {
        let contents: String = (1..=count)
            .map(|i| format!("2025-01-10 09:{:02}:{:02} ERROR failure {i}\n", i / 60, i % 60))
            .collect();
        Self::new(file_name, &contents)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
