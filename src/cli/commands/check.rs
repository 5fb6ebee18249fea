//! Check text files against the rule set's pattern rules

use std::path::PathBuf;

use anyhow::Context;

use crate::adapters::{file, toml};
use crate::core::services::evaluate_all;
use crate::output::{CheckReport, OutputMode};
use crate::paths;

/// Collect text subjects under a root and evaluate the pattern rules
pub fn check(
    path: Option<PathBuf>,
    rules_path: Option<PathBuf>,
    ci: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let rules_path = rules_path.unwrap_or_else(paths::ruleset_path);
    let ruleset = toml::load_file(&rules_path)
        .with_context(|| format!("cannot load rule set {}", rules_path.display()))?;

    let rules = ruleset.text_rules();
    log::debug!("{} pattern rule(s) of {} total", rules.len(), ruleset.len());

    let root = path.unwrap_or_else(|| PathBuf::from("."));
    let subjects = file::collect_text_subjects(&root, &ruleset.scopes)
        .with_context(|| format!("cannot collect files under {}", root.display()))?;

    let summary = evaluate_all(&subjects, &rules)?;
    let report = CheckReport { summary };
    report.render(mode);

    if !report.summary.all_passed() {
        if !ci {
            std::process::exit(1);
        }
        anyhow::bail!("{} subject(s) failed required rules", report.summary.failing);
    }

    Ok(())
}
