//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. The evaluator returns
//! data only; every checkmark and color lives here.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Report, ReportSummary, Severity};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a check or records run, ready to render
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The batch summary produced by the evaluator
    pub summary: ReportSummary,
}

/// Result of a rules listing
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// Project name from the rule-set file, if declared
    pub project: Option<String>,
    /// Rules in declaration order
    pub rules: Vec<RuleInfo>,
}

/// Information about one rule, for listings
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// Rule name
    pub name: String,
    /// Detector kind: "field" or "pattern"
    pub kind: String,
    /// What the detector targets (field key or pattern source)
    pub target: String,
    /// "positive" or "negative"
    pub polarity: String,
    /// Whether a failure fails the subject overall
    pub required: bool,
    /// Severity level
    pub severity: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl CheckReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.summary.total == 0 {
            println!("No subjects to check.");
            return;
        }

        println!("Checking {} subject(s)...\n", self.summary.total);

        for report in &self.summary.reports {
            render_report_line(report);
        }

        println!();
        if self.summary.all_passed() {
            println!("{} {}/{} passing", "OK".green().bold(), self.summary.passing, self.summary.total);
        } else {
            println!(
                "{} {} of {} subject(s) missing required information",
                "FAILED".red().bold(),
                self.summary.failing,
                self.summary.total
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(&self.summary).unwrap_or_default());
    }
}

/// One line per subject, with failing rules indented under it
fn render_report_line(report: &Report) {
    if report.passed && report.missing_count == 0 {
        println!("  {} {}", "✓".green(), report.subject);
        return;
    }

    let marker = if report.passed {
        // Only optional rules failed
        "!".yellow()
    } else {
        "✗".red()
    };

    let gap = report
        .highest_missing
        .map_or_else(String::new, |s| format!(", highest: {s}"));
    println!("  {} {} ({} missing{gap})", marker, report.subject, report.missing_count);

    for result in report.results.iter().filter(|r| !r.passed) {
        let badge = severity_badge(result.severity);
        if result.matches > 0 {
            println!("      [{badge}] {} ({} occurrence(s))", result.rule, result.matches);
        } else {
            println!("      [{badge}] {}", result.rule);
        }
    }
}

/// Colored severity label for human output
fn severity_badge(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::High => "high".red(),
        Severity::Medium => "medium".yellow(),
        Severity::Low => "low".blue(),
    }
}

impl RuleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No rules defined.");
            return;
        }

        if let Some(project) = &self.project {
            println!("Rules for {project}:\n");
        } else {
            println!("Rules:\n");
        }

        for rule in &self.rules {
            let required = if rule.required { "required" } else { "optional" };
            println!("  [{}] {} ({required})", rule.severity.to_uppercase(), rule.name);
            println!("  {} {} / {}\n", rule.kind, rule.target, rule.polarity);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
