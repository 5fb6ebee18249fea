//! Tests for report aggregation

use checkup::core::models::{Report, ReportSummary, RuleResult, Severity};

fn result(rule: &str, passed: bool, required: bool, severity: Severity) -> RuleResult {
    RuleResult {
        rule: rule.to_string(),
        passed,
        required,
        severity,
        matches: usize::from(passed),
    }
}

#[test]
fn aggregates_follow_the_results() {
    let report = Report::from_results(
        "emp-1",
        vec![
            result("hire-date", true, true, Severity::High),
            result("phone", false, false, Severity::Medium),
            result("address", false, false, Severity::Low),
        ],
    );

    assert!(report.passed);
    assert_eq!(report.missing_count, 2);
    assert_eq!(report.highest_missing, Some(Severity::Medium));
    assert_eq!(report.failing_rules(), vec!["phone", "address"]);
}

#[test]
fn required_failure_flips_passed() {
    let report = Report::from_results(
        "emp-1",
        vec![result("hire-date", false, true, Severity::High)],
    );
    assert!(!report.passed);
    assert_eq!(report.highest_missing, Some(Severity::High));
}

#[test]
fn vacuous_report_passes_with_no_results() {
    let report = Report::vacuous("emp-1");
    assert!(report.passed);
    assert!(report.results.is_empty());
    assert_eq!(report.missing_count, 0);
}

#[test]
fn summary_counts_passing_and_failing() {
    let summary = ReportSummary::from_reports(vec![
        Report::from_results("a", vec![result("r", true, true, Severity::Low)]),
        Report::from_results("b", vec![result("r", false, true, Severity::Low)]),
        Report::vacuous("c"),
    ]);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.passing, 2);
    assert_eq!(summary.failing, 1);
    assert!(!summary.all_passed());
}

#[test]
fn report_serializes_for_json_output() {
    let report = Report::from_results(
        "emp-1",
        vec![result("phone", false, false, Severity::Medium)],
    );

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"subject\":\"emp-1\""));
    assert!(json.contains("\"passed\":true"));
    assert!(json.contains("\"missing_count\":1"));
    assert!(json.contains("\"highest_missing\":\"medium\""));
}
