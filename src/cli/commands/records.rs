//! Check record subjects from a JSON document

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::adapters::{file, toml};
use crate::core::services::evaluate_all;
use crate::output::{CheckReport, OutputMode};
use crate::paths;

/// Load records from a JSON document and evaluate the field rules
pub fn records(
    document: &Path,
    rules_path: Option<PathBuf>,
    id_field: &str,
    ci: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let rules_path = rules_path.unwrap_or_else(paths::ruleset_path);
    let ruleset = toml::load_file(&rules_path)
        .with_context(|| format!("cannot load rule set {}", rules_path.display()))?;

    let rules = ruleset.record_rules();
    log::debug!("{} field rule(s) of {} total", rules.len(), ruleset.len());

    let subjects = file::load_record_subjects(document, id_field)
        .with_context(|| format!("cannot load records from {}", document.display()))?;

    let summary = evaluate_all(&subjects, &rules)?;
    let report = CheckReport { summary };
    report.render(mode);

    if !report.summary.all_passed() {
        if !ci {
            std::process::exit(1);
        }
        anyhow::bail!("{} record(s) failed required rules", report.summary.failing);
    }

    Ok(())
}
