//! Tests for severity levels

use checkup::core::models::Severity;

#[test]
fn severities_are_ordered() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert_eq!(
        [Severity::Medium, Severity::High, Severity::Low].iter().max(),
        Some(&Severity::High)
    );
}

#[test]
fn parses_from_str_case_insensitive() {
    assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
    assert_eq!("Medium".parse::<Severity>().unwrap(), Severity::Medium);
    assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
}

#[test]
fn rejects_unknown_levels() {
    let err = "critical".parse::<Severity>().unwrap_err();
    assert!(err.contains("critical"));
    assert!(err.contains("low, medium, high"));
}

#[test]
fn displays_lowercase() {
    assert_eq!(Severity::High.to_string(), "high");
    assert_eq!(Severity::Medium.to_string(), "medium");
    assert_eq!(Severity::Low.to_string(), "low");
}

#[test]
fn defaults_to_medium() {
    assert_eq!(Severity::default(), Severity::Medium);
}

#[test]
fn serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
}
