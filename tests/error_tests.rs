use dateselect::skeleton::DateField;
use dateselect::{PatternError, RenderError};

#[test]
fn test_pattern_error_display() {
    let err = PatternError::UnterminatedQuote { position: 7 };
    let msg = format!("{}", err);
    assert!(msg.contains("position 7"));

    let err = PatternError::MissingField {
        pattern: "d/M".to_string(),
        field: DateField::Year,
    };
    let msg = format!("{}", err);
    assert!(msg.contains("'d/M'"));
    assert!(msg.contains("year"));
}

#[test]
fn test_duplicate_field_display() {
    let err = PatternError::DuplicateField {
        pattern: "d d M y".to_string(),
        field: DateField::Day,
    };
    let msg = format!("{}", err);
    assert!(msg.contains("more than one"));
    assert!(msg.contains("day"));
}

#[test]
fn test_render_error_display() {
    let err = RenderError::InvalidElementType {
        expected: "DateSelect",
        found: "MonthYearSelect",
    };
    let msg = format!("{}", err);
    assert!(msg.contains("DateSelect"));
    assert!(msg.contains("MonthYearSelect"));

    let msg = format!("{}", RenderError::MissingName);
    assert_eq!(msg, "element has no assigned name");
}

#[test]
fn test_pattern_error_passes_through_unchanged() {
    let inner = PatternError::EmptyPattern;
    let wrapped = RenderError::from(inner.clone());
    assert_eq!(format!("{wrapped}"), format!("{inner}"));
}
