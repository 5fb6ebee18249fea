//! Tests for the Rule model

use checkup::core::models::{Detector, Polarity, Rule, Severity};

mod constructors {
    use super::*;

    #[test]
    fn field_rule_defaults() {
        let rule = Rule::field("phone", "phone", Severity::Medium);
        assert!(rule.required);
        assert_eq!(rule.polarity, Polarity::Positive);
        assert!(rule.targets_records());
        assert!(!rule.targets_text());
        assert!(matches!(rule.detector, Detector::Field { numeric: false, .. }));
    }

    #[test]
    fn numeric_field_rule_sets_numeric() {
        let rule = Rule::numeric_field("hourly-rate", "hourlyRate", Severity::High);
        assert!(matches!(rule.detector, Detector::Field { numeric: true, .. }));
    }

    #[test]
    fn pattern_rule_compiles_regex() {
        let rule = Rule::pattern("no-todo", r"TODO", Severity::Low).unwrap();
        assert!(rule.targets_text());
        assert!(!rule.targets_records());
    }

    #[test]
    fn pattern_rule_rejects_invalid_regex() {
        assert!(Rule::pattern("broken", r"[unclosed", Severity::Low).is_err());
    }

    #[test]
    fn builders_set_polarity_and_required() {
        let rule = Rule::field("phone", "phone", Severity::Medium)
            .with_polarity(Polarity::Negative)
            .with_required(false);
        assert_eq!(rule.polarity, Polarity::Negative);
        assert!(!rule.required);
    }
}

mod polarity {
    use super::*;

    #[test]
    fn parses_from_str() {
        assert_eq!("positive".parse::<Polarity>().unwrap(), Polarity::Positive);
        assert_eq!("NEGATIVE".parse::<Polarity>().unwrap(), Polarity::Negative);
        assert!("sometimes".parse::<Polarity>().is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Polarity::Positive.to_string(), "positive");
        assert_eq!(Polarity::Negative.to_string(), "negative");
    }

    #[test]
    fn defaults_to_positive() {
        assert_eq!(Polarity::default(), Polarity::Positive);
    }
}
