//! Starter .checkup.toml generation
//!
//! Used by `checkup init` to seed a project with a commented rule-set
//! file that parses cleanly as written.

/// Render the starter rule-set file for a new project
///
/// The emitted file is valid TOML and passes validation; the example
/// rules are commented out so a fresh project starts with a vacuous pass.
#[must_use]
pub fn starter_ruleset(project: &str) -> String {
    let created = chrono::Utc::now().to_rfc3339();
    format!(
        r#"# checkup rule set
# Created by checkup v{version} on {created}

[project]
name = "{project}"

# Field rules check record subjects (checkup records <data.json>):
# [[rule]]
# name = "hourly-rate"
# field = "hourlyRate"
# numeric = true          # zero counts as present
# severity = "high"
# required = false

# Pattern rules check text subjects (checkup check [path]):
# [[rule]]
# name = "no-inline-style"
# pattern = "style=\\{{\\{{"
# polarity = "negative"   # pass when the pattern is absent
# severity = "medium"
# files = ["src/**/*.tsx"]
"#,
        version = crate::VERSION,
    )
}
