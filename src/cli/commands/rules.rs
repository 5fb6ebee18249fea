//! List and validate the rule set

use std::path::PathBuf;

use anyhow::Context;

use crate::adapters::toml;
use crate::core::models::Detector;
use crate::output::{OutputMode, RuleInfo, RuleListResult};
use crate::paths;

/// Load the rule set (validating it) and list its rules
///
/// A malformed rule set surfaces as an error here, so this doubles as a
/// config lint.
pub fn rules(rules_path: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let rules_path = rules_path.unwrap_or_else(paths::ruleset_path);
    let ruleset = toml::load_file(&rules_path)
        .with_context(|| format!("cannot load rule set {}", rules_path.display()))?;

    let rules = ruleset
        .rules
        .iter()
        .map(|rule| {
            let (kind, target) = match &rule.detector {
                Detector::Field { key, numeric } => {
                    let kind = if *numeric { "numeric field" } else { "field" };
                    (kind.to_string(), key.clone())
                },
                Detector::Pattern { regex } => ("pattern".to_string(), regex.as_str().to_string()),
            };

            RuleInfo {
                name: rule.name.clone(),
                kind,
                target,
                polarity: rule.polarity.to_string(),
                required: rule.required,
                severity: rule.severity.to_string(),
            }
        })
        .collect();

    let result = RuleListResult {
        project: ruleset.name.clone(),
        rules,
    };
    result.render(mode);

    Ok(())
}
