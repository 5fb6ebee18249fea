//! Initialize checkup in a project

use std::fs;
use std::path::Path;

use crate::adapters::toml::starter_ruleset;
use crate::output::{OperationResult, OutputMode};
use crate::paths;

/// Write a starter .checkup.toml in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let ruleset_path = Path::new(paths::CHECKUP_TOML);

    if ruleset_path.exists() && !force {
        let result = OperationResult {
            success: false,
            message: "Already initialized (.checkup.toml exists). Use --force to reinitialize."
                .to_string(),
        };
        result.render(mode);
        return Ok(());
    }

    let project = std::env::current_dir()
        .ok()
        .and_then(|cwd| cwd.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string());

    fs::write(ruleset_path, starter_ruleset(&project))?;

    let result = OperationResult {
        success: true,
        message: format!(
            "Created .checkup.toml for '{project}'.\n\nNext steps:\n  edit .checkup.toml to declare rules\n  checkup rules     # validate and list them\n  checkup check     # evaluate text files\n  checkup records <data.json>"
        ),
    };
    result.render(mode);

    Ok(())
}
