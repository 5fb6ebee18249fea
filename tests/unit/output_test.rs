//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use checkup::core::models::{Report, ReportSummary, RuleResult, Severity};
use checkup::output::{CheckReport, OperationResult, OutputMode, RuleInfo, RuleListResult};

fn summary_with_one_failure() -> ReportSummary {
    ReportSummary::from_reports(vec![
        Report::vacuous("a.tsx"),
        Report::from_results(
            "b.tsx",
            vec![RuleResult {
                rule: "no-inline-style".to_string(),
                passed: false,
                required: true,
                severity: Severity::Medium,
                matches: 2,
            }],
        ),
    ])
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn check_report_serialization() {
    let report = CheckReport {
        summary: summary_with_one_failure(),
    };

    let json = serde_json::to_string(&report.summary).unwrap();
    assert!(json.contains("\"total\":2"));
    assert!(json.contains("\"passing\":1"));
    assert!(json.contains("\"failing\":1"));
    assert!(json.contains("no-inline-style"));
    assert!(json.contains("\"matches\":2"));
}

#[test]
fn rule_list_serialization() {
    let result = RuleListResult {
        project: Some("staff-profiles".to_string()),
        rules: vec![RuleInfo {
            name: "hourly-rate".to_string(),
            kind: "numeric field".to_string(),
            target: "hourlyRate".to_string(),
            polarity: "positive".to_string(),
            required: false,
            severity: "high".to_string(),
        }],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("staff-profiles"));
    assert!(json.contains("hourly-rate"));
    assert!(json.contains("\"required\":false"));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created .checkup.toml".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Created .checkup.toml"));
}
