use crate::conf::types::{AnalysisConfig, OutputConfig};
use crate::conf::{ConfigError, DEFAULT_CONFIG_FILE, LogpulseConfig, load_config, resolve_config};
use crate::logging::OutputFormat;

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn load_config_reads_all_sections() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");
    fs::write(
        &path,
        r#"
[analysis]
default_source = "/var/log/app.log"
filter_level = "warning"

[output]
format = "json"
summary_file = "summary.txt"
color = false
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(
        cfg,
        LogpulseConfig {
            analysis: AnalysisConfig {
                default_source: PathBuf::from("/var/log/app.log"),
                filter_level: Some("warning".to_string()),
            },
            output: OutputConfig {
                format: Some(OutputFormat::Json),
                summary_file: Some(PathBuf::from("summary.txt")),
                color: false,
            },
        }
    );
}

#[test]
fn load_config_fills_defaults_for_missing_sections() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");
    fs::write(&path, "[output]\nformat = \"pretty\"\n").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.analysis, AnalysisConfig::default());
    assert_eq!(cfg.analysis.default_source, PathBuf::from("app.log"));
    assert_eq!(cfg.output.format, Some(OutputFormat::Pretty));
    assert!(cfg.output.color);
}

#[test]
fn load_config_rejects_unknown_filter_level() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");
    fs::write(&path, "[analysis]\nfilter_level = \"verbose\"\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ConfigError::InvalidFilterLevel { ref value, .. } if value == "verbose"
    ));
}

#[test]
fn load_config_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");
    fs::write(&path, "[analysis\n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_config_rejects_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");
    fs::write(&path, "[output]\ncolour = true\n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_config_reports_missing_file() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn resolve_config_prefers_explicit_path() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "[analysis]\ndefault_source = \"from-root.log\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "[analysis]\ndefault_source = \"explicit.log\"\n").unwrap();

    // Act
    let cfg = resolve_config(Some(&explicit), dir.path()).unwrap();

    // Assert
    assert_eq!(cfg.analysis.default_source, PathBuf::from("explicit.log"));
}

#[test]
fn resolve_config_discovers_file_in_root() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "[analysis]\ndefault_source = \"from-root.log\"\n",
    )
    .unwrap();

    let cfg = resolve_config(None, dir.path()).unwrap();

    assert_eq!(cfg.analysis.default_source, PathBuf::from("from-root.log"));
}

#[test]
fn resolve_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();

    let cfg = resolve_config(None, dir.path()).unwrap();

    assert_eq!(cfg, LogpulseConfig::default());
}
