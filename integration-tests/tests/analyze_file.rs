use integration_tests::harness::{LogFixture, sample_log};
use logpulse_core::analysis::{
    Analysis, AnalysisError, HealthStatus, LogSource, RECENT_LIMIT, Severity, analyze,
};
use pretty_assertions::assert_eq;

#[test]
fn analyzes_sample_file_end_to_end() {
    // Arrange
    let fixture = LogFixture::new("app.log", sample_log());

    // Act
    let result = analyze(&LogSource::file(fixture.path()), None).unwrap();

    // Assert
    let Analysis::Full(summary) = result else {
        panic!("expected full summary");
    };
    assert_eq!(summary.source_name, "app.log");
    assert_eq!(summary.total_lines, 4);
    assert_eq!(summary.unknown_lines, 1);
    assert_eq!(summary.counts.info, 1);
    assert_eq!(summary.counts.warning, 1);
    assert_eq!(summary.counts.error, 1);
    assert_eq!(summary.health_status, HealthStatus::Healthy);
    assert_eq!(
        summary.total_lines,
        summary.unknown_lines + summary.counts.total()
    );
}

#[test]
fn twelve_errors_are_critical_with_last_five_retained() {
    let fixture = LogFixture::with_errors("errors.log", 12);

    let result = analyze(&LogSource::file(fixture.path()), None).unwrap();

    let Analysis::Full(summary) = result else {
        panic!("expected full summary");
    };
    assert_eq!(summary.health_status, HealthStatus::Critical);
    assert_eq!(summary.recent_errors.len(), RECENT_LIMIT);
    let messages: Vec<_> = summary
        .recent_errors
        .iter()
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec!["failure 8", "failure 9", "failure 10", "failure 11", "failure 12"]
    );
}

#[test]
fn filter_returns_count_only() {
    let fixture = LogFixture::new("app.log", sample_log());

    let result = analyze(&LogSource::file(fixture.path()), Some("error")).unwrap();

    let Analysis::Filtered(filtered) = result else {
        panic!("expected filtered summary");
    };
    assert_eq!(filtered.filter_level, Severity::Error);
    assert_eq!(filtered.matched_count, 1);
    assert_eq!(filtered.total_lines, 4);
}

#[test]
fn missing_file_is_source_not_found() {
    let fixture = LogFixture::new("app.log", sample_log());
    let missing = fixture.dir().join("missing.log");

    let err = analyze(&LogSource::file(&missing), None).unwrap_err();

    assert!(matches!(err, AnalysisError::SourceNotFound { .. }));
    assert!(err.to_string().contains("missing.log"));
}

#[test]
fn whitespace_only_file_is_empty_source() {
    let fixture = LogFixture::new("blank.log", "\n   \n\t\n");

    let err = analyze(&LogSource::file(fixture.path()), None).unwrap_err();

    assert!(matches!(err, AnalysisError::EmptySource { .. }));
}

#[test]
fn invalid_filter_wins_over_missing_file() {
    let fixture = LogFixture::new("app.log", sample_log());
    let missing = fixture.dir().join("missing.log");

    let err = analyze(&LogSource::file(&missing), Some("NOTICE")).unwrap_err();

    assert!(matches!(err, AnalysisError::InvalidFilterLevel { .. }));
}

#[test]
fn repeated_calls_do_not_share_state() {
    let fixture = LogFixture::new("app.log", sample_log());
    let source = LogSource::file(fixture.path());

    let first = analyze(&source, None).unwrap();
    let second = analyze(&source, None).unwrap();

    assert_eq!(first, second);
}
