use crate::analysis::{ClassifiedLine, LogEntry, Severity, classify_line};
use pretty_assertions::assert_eq;

fn entry(timestamp: &str, level: Severity, message: &str) -> ClassifiedLine {
    ClassifiedLine::Entry(LogEntry {
        timestamp: timestamp.to_string(),
        level,
        message: message.to_string(),
    })
}

#[test]
fn classifies_well_formed_line() {
    // Act
    let result = classify_line("2025-01-10 09:00:01 INFO Application started successfully");

    // Assert
    assert_eq!(
        result,
        entry(
            "2025-01-10 09:00:01",
            Severity::Info,
            "Application started successfully"
        )
    );
}

#[test]
fn classifies_every_severity_token() {
    for level in Severity::ALL {
        let line = format!("2025-01-10 09:00:01 {} something", level.as_str());

        let result = classify_line(&line);

        assert_eq!(result, entry("2025-01-10 09:00:01", level, "something"));
    }
}

#[test]
fn trims_leading_whitespace_from_message() {
    let result = classify_line("2025-01-10 09:00:05 ERROR     Database connection failed");

    assert_eq!(
        result,
        entry(
            "2025-01-10 09:00:05",
            Severity::Error,
            "Database connection failed"
        )
    );
}

#[test]
fn accepts_several_spaces_before_level() {
    let result = classify_line("2025-01-10 09:00:05   WARNING Disk space low");

    assert_eq!(
        result,
        entry("2025-01-10 09:00:05", Severity::Warning, "Disk space low")
    );
}

#[test]
fn level_without_message_yields_empty_message() {
    let result = classify_line("2025-01-10 09:00:05 DEBUG");

    assert_eq!(result, entry("2025-01-10 09:00:05", Severity::Debug, ""));
}

#[test]
fn level_word_inside_free_text_is_unparsed() {
    assert_eq!(
        classify_line("something went wrong: ERROR in module"),
        ClassifiedLine::Unparsed
    );
    assert_eq!(classify_line("ERROR without a timestamp"), ClassifiedLine::Unparsed);
}

#[test]
fn timestamp_must_be_at_line_start() {
    let result = classify_line("prefix 2025-01-10 09:00:05 ERROR boom");

    assert_eq!(result, ClassifiedLine::Unparsed);
}

#[test]
fn malformed_timestamps_are_unparsed() {
    for line in [
        "2025-1-10 09:00:05 ERROR boom",
        "2025-01-10T09:00:05 ERROR boom",
        "2025-01-10 9:00:05 ERROR boom",
        "2025/01/10 09:00:05 ERROR boom",
    ] {
        assert_eq!(classify_line(line), ClassifiedLine::Unparsed, "{line}");
    }
}

#[test]
fn lowercase_or_unknown_level_is_unparsed() {
    assert_eq!(
        classify_line("2025-01-10 09:00:05 error boom"),
        ClassifiedLine::Unparsed
    );
    assert_eq!(
        classify_line("2025-01-10 09:00:05 TRACE boom"),
        ClassifiedLine::Unparsed
    );
}

#[test]
fn severity_parses_case_insensitively() {
    assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
    assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!(" critical ".parse::<Severity>(), Ok(Severity::Critical));
    assert!("UNKNOWN".parse::<Severity>().is_err());
    assert!("fatal".parse::<Severity>().is_err());
}

#[test]
fn non_ascii_digits_in_timestamp_are_unparsed() {
    let result = classify_line("２０２５-０１-１０ ０９:００:０１ INFO x");

    assert_eq!(result, ClassifiedLine::Unparsed);
}

#[test]
fn timestamp_date_and_time_are_separated_by_a_single_space() {
    assert_eq!(
        classify_line("2025-01-10\t09:00:05 ERROR boom"),
        ClassifiedLine::Unparsed
    );
    assert_eq!(
        classify_line("2025-01-10  09:00:05 ERROR boom"),
        ClassifiedLine::Unparsed
    );
}

#[test]
fn unknown_severity_error_names_the_value() {
    // Act
    let err = "fatal".parse::<Severity>().unwrap_err();

    // Assert
    assert_eq!(err.to_string(), "unknown severity 'fatal'");
    assert_eq!(err.0, "fatal");
}
