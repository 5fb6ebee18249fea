//! Evaluator service - evaluates subjects against rule sets
//!
//! This is pure business logic with no I/O: subjects and rules come in,
//! reports come out. Nothing is shared or mutated between calls, so
//! concurrent evaluation needs no locking.

use thiserror::Error;

use crate::core::models::{
    Detector, FieldValue, Polarity, Report, ReportSummary, Rule, RuleResult, Subject,
};

/// Errors from evaluating a subject
///
/// With typed subjects the only invalid shape left is a rule aimed at the
/// wrong subject kind. Evaluation fails atomically: a report is never
/// returned with rules silently omitted.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A field rule was applied to a text subject
    #[error("rule '{rule}' targets record fields but subject '{subject}' is text")]
    ExpectsRecord {
        /// Name of the mismatched rule
        rule: String,
        /// Identifier of the subject
        subject: String,
    },

    /// A pattern rule was applied to a record subject
    #[error("rule '{rule}' targets text patterns but subject '{subject}' is a record")]
    ExpectsText {
        /// Name of the mismatched rule
        rule: String,
        /// Identifier of the subject
        subject: String,
    },
}

/// Evaluate one subject against a rule set
///
/// Each rule is evaluated exactly once, in list order, and the report
/// preserves that order. The overall `passed` flag is the conjunction of
/// the required rules' results; optional failures are tracked in
/// `missing_count` but never flip it.
///
/// An empty rule set is a vacuous pass, not a failure.
///
/// # Errors
///
/// Returns [`EvalError`] if any rule's detector kind does not match the
/// subject kind. No partial report is produced.
pub fn evaluate(subject: &Subject, rules: &[Rule]) -> Result<Report, EvalError> {
    if rules.is_empty() {
        return Ok(Report::vacuous(subject.id()));
    }

    let mut results = Vec::with_capacity(rules.len());

    for rule in rules {
        let matches = detect(subject, rule)?;
        let passed = match rule.polarity {
            Polarity::Positive => matches > 0,
            Polarity::Negative => matches == 0,
        };

        results.push(RuleResult {
            rule: rule.name.clone(),
            passed,
            required: rule.required,
            severity: rule.severity,
            matches,
        });
    }

    Ok(Report::from_results(subject.id(), results))
}

/// Evaluate a batch of subjects against one rule set
///
/// Subjects are independent; the summary preserves input order. The first
/// subject whose evaluation errors aborts the batch.
///
/// # Errors
///
/// Returns [`EvalError`] from the first subject whose evaluation fails.
pub fn evaluate_all(subjects: &[Subject], rules: &[Rule]) -> Result<ReportSummary, EvalError> {
    let mut reports = Vec::with_capacity(subjects.len());

    for subject in subjects {
        reports.push(evaluate(subject, rules)?);
    }

    Ok(ReportSummary::from_reports(reports))
}

/// Run a rule's detector against a subject, returning the match count
fn detect(subject: &Subject, rule: &Rule) -> Result<usize, EvalError> {
    match (&rule.detector, subject) {
        (Detector::Field { key, numeric }, Subject::Record { fields, .. }) => {
            Ok(usize::from(field_present(fields.get(key.as_str()), *numeric)))
        },
        (Detector::Pattern { regex }, Subject::Text { content, .. }) => {
            Ok(regex.find_iter(content).count())
        },
        (Detector::Field { .. }, Subject::Text { id, .. }) => Err(EvalError::ExpectsRecord {
            rule: rule.name.clone(),
            subject: id.clone(),
        }),
        (Detector::Pattern { .. }, Subject::Record { id, .. }) => Err(EvalError::ExpectsText {
            rule: rule.name.clone(),
            subject: id.clone(),
        }),
    }
}

/// Presence of a record field
///
/// Non-numeric: present iff the field exists and text values are non-empty.
/// Numeric: present iff the field exists and holds a number - zero is a
/// valid present value, only absence (or a non-number) fails.
fn field_present(value: Option<&FieldValue>, numeric: bool) -> bool {
    match value {
        None => false,
        Some(v) if numeric => v.is_number(),
        Some(FieldValue::Text(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
