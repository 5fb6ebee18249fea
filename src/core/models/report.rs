//! Report model
//!
//! The evaluator returns data only; rendering lives in [`crate::output`].
//! Reports carry no timestamps or other ambient state, so evaluating an
//! unchanged subject against an unchanged rule set yields an identical
//! report.

use serde::Serialize;

use super::Severity;

/// Outcome of one rule against one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    /// Name of the rule that was evaluated
    pub rule: String,
    /// Whether the rule passed
    pub passed: bool,
    /// Whether a failure here fails the subject overall
    pub required: bool,
    /// The rule's severity
    pub severity: Severity,
    /// Detection count: 0 or 1 for field rules, N for pattern occurrences
    pub matches: usize,
}

/// Full evaluation result for one subject
///
/// Lists every rule exactly once, in rule-set order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Identifier of the evaluated subject
    pub subject: String,
    /// Per-rule outcomes, in rule-set order
    pub results: Vec<RuleResult>,
    /// True iff every required rule passed
    pub passed: bool,
    /// Number of failing rules, required or not
    pub missing_count: usize,
    /// Highest severity among failing rules, if any failed
    pub highest_missing: Option<Severity>,
}

impl Report {
    /// Build a report from per-rule outcomes, computing the aggregates
    #[must_use]
    pub fn from_results(subject: &str, results: Vec<RuleResult>) -> Self {
        let passed = results.iter().filter(|r| r.required).all(|r| r.passed);
        let missing_count = results.iter().filter(|r| !r.passed).count();
        let highest_missing =
            results.iter().filter(|r| !r.passed).map(|r| r.severity).max();

        Self {
            subject: subject.to_string(),
            results,
            passed,
            missing_count,
            highest_missing,
        }
    }

    /// Vacuous pass for an empty rule set
    #[must_use]
    pub fn vacuous(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            results: Vec::new(),
            passed: true,
            missing_count: 0,
            highest_missing: None,
        }
    }

    /// Names of the failing rules, in rule-set order
    #[must_use]
    pub fn failing_rules(&self) -> Vec<&str> {
        self.results.iter().filter(|r| !r.passed).map(|r| r.rule.as_str()).collect()
    }
}

/// Aggregate result for a batch of subjects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of subjects evaluated
    pub total: usize,
    /// Subjects whose report passed
    pub passing: usize,
    /// Subjects whose report failed (`total - passing`)
    pub failing: usize,
    /// Per-subject reports, in input order
    pub reports: Vec<Report>,
}

impl ReportSummary {
    /// Build a summary from per-subject reports
    #[must_use]
    pub fn from_reports(reports: Vec<Report>) -> Self {
        let total = reports.len();
        let passing = reports.iter().filter(|r| r.passed).count();

        Self {
            total,
            passing,
            failing: total - passing,
            reports,
        }
    }

    /// Whether every subject in the batch passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failing == 0
    }
}
