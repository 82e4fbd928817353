use crate::analysis::error::AnalysisError;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the lines of an analysis come from.
#[derive(Debug, Clone)]
pub enum LogSource {
    /// A file on disk. Reported under its basename.
    File(PathBuf),

    /// An uploaded or piped buffer, reported under the given name.
    Memory { name: String, data: Vec<u8> },
}

impl LogSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn memory(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Memory {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Drain a reader (e.g. stdin) into an in-memory source.
    pub fn from_reader<R: Read>(name: impl Into<String>, mut reader: R) -> Result<Self, AnalysisError> {
        let name = name.into();
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| AnalysisError::read_failure(name.clone(), e))?;
        Ok(Self::Memory { name, data })
    }

    pub fn name(&self) -> String {
        match self {
            LogSource::File(path) => file_basename(path),
            LogSource::Memory { name, .. } => name.clone(),
        }
    }

    /// Read every line, trimmed, dropping blank ones. Order is preserved.
    pub fn read_lines(&self) -> Result<Vec<String>, AnalysisError> {
        match self {
            LogSource::File(path) => {
                let file = File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => AnalysisError::SourceNotFound { path: path.clone() },
                    _ => AnalysisError::read_failure(self.name(), e),
                })?;
                collect_lines(file)
                    .map_err(|e| AnalysisError::read_failure(self.name(), e))
            }
            LogSource::Memory { name, data } => collect_lines(data.as_slice())
                .map_err(|e| AnalysisError::read_failure(name.clone(), e)),
        }
    }
}

/// Lines end at `\n`, `\r\n` or a lone `\r`.
fn collect_lines<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    Ok(text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn file_basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
