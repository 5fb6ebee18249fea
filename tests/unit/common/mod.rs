//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing checkup components.

use checkup::core::models::{Rule, Severity, Subject};

/// The six-field profile rule set used across evaluator tests:
/// hourlyRate (numeric, high), hireDate (high), phone (medium),
/// position (medium), address (low), emergencyContact (medium).
///
/// All rules are tracked-but-optional; tests flip `required` as needed.
pub fn profile_rules() -> Vec<Rule> {
    vec![
        Rule::numeric_field("hourly-rate", "hourlyRate", Severity::High).with_required(false),
        Rule::field("hire-date", "hireDate", Severity::High).with_required(false),
        Rule::field("phone", "phone", Severity::Medium).with_required(false),
        Rule::field("position", "position", Severity::Medium).with_required(false),
        Rule::field("address", "address", Severity::Low).with_required(false),
        Rule::field("emergency-contact", "emergencyContact", Severity::Medium)
            .with_required(false),
    ]
}

/// A profile with hireDate and position set, everything else absent
pub fn sparse_profile() -> Subject {
    Subject::record("emp-203")
        .field("hireDate", "2024-01-01")
        .field("position", "Manager")
}

/// A fully populated profile that passes every profile rule
pub fn complete_profile() -> Subject {
    Subject::record("emp-204")
        .field("hourlyRate", 17.5)
        .field("hireDate", "2023-06-12")
        .field("phone", "+1 555 0100")
        .field("position", "Chef")
        .field("address", "12 Main St")
        .field("emergencyContact", "Sam, +1 555 0101")
}
