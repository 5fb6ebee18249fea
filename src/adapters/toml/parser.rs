//! TOML parser for .checkup.toml rule sets
//!
//! Handles reading, deserializing, and validating rule-set files. Raw
//! entries are compiled into [`Rule`]s at load time; a malformed entry
//! fails the whole load with an error naming the offending rule, never a
//! silent skip.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{Detector, Polarity, Rule, Severity};

/// Errors from loading or validating a rule set
#[derive(Debug, Error)]
pub enum RulesetError {
    /// IO error reading the rule-set file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the expected shape
    #[error("invalid rule set TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A rule entry has an empty name
    #[error("rule at position {index} has an empty name")]
    UnnamedRule {
        /// Zero-based position of the entry in the file
        index: usize,
    },

    /// Two rule entries share a name
    #[error("duplicate rule name '{rule}'")]
    DuplicateName {
        /// The repeated name
        rule: String,
    },

    /// A rule entry declares neither `field` nor `pattern`
    #[error("rule '{rule}' declares neither a field nor a pattern")]
    MissingDetector {
        /// Name of the offending rule
        rule: String,
    },

    /// A rule entry declares both `field` and `pattern`
    #[error("rule '{rule}' declares both a field and a pattern")]
    AmbiguousDetector {
        /// Name of the offending rule
        rule: String,
    },

    /// A pattern entry does not compile as a regular expression
    #[error("rule '{rule}' has an invalid pattern: {source}")]
    BadPattern {
        /// Name of the offending rule
        rule: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A `files` scope entry is not a valid glob
    #[error("rule '{rule}' has an invalid file scope '{scope}': {source}")]
    BadScope {
        /// Name of the offending rule
        rule: String,
        /// The scope string as written
        scope: String,
        /// The underlying glob error
        #[source]
        source: glob::PatternError,
    },

    /// A rule entry carries an invalid or contradictory setting
    #[error("rule '{rule}': {detail}")]
    Invalid {
        /// Name of the offending rule
        rule: String,
        /// What is wrong with the entry
        detail: String,
    },
}

/// A .checkup.toml file structure
#[derive(Debug, Deserialize)]
pub struct RulesetFile {
    /// Project configuration
    #[serde(default)]
    pub project: ProjectConfig,

    /// Rule entries in this file, in declaration order
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleEntry>,
}

/// Project-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Optional project name shown in reports and listings
    pub name: Option<String>,
}

/// A raw rule entry in .checkup.toml, before validation
#[derive(Debug, Deserialize)]
pub struct RuleEntry {
    /// Rule name (unique within the file)
    pub name: String,

    /// Record field key to check (field detector)
    pub field: Option<String>,

    /// Zero counts as present for this field (field detector only)
    #[serde(default)]
    pub numeric: bool,

    /// Regular expression to count in text subjects (pattern detector)
    pub pattern: Option<String>,

    /// "positive" (pass on presence) or "negative" (pass on absence)
    #[serde(default = "default_polarity")]
    pub polarity: String,

    /// Whether failing this rule fails the subject overall
    #[serde(default = "default_required")]
    pub required: bool,

    /// Severity: low, medium, high
    #[serde(default = "default_severity")]
    pub severity: String,

    /// Glob scopes restricting which files are collected (pattern detector only)
    #[serde(default)]
    pub files: Vec<String>,
}

fn default_polarity() -> String {
    "positive".to_string()
}

const fn default_required() -> bool {
    true
}

fn default_severity() -> String {
    "medium".to_string()
}

/// A validated, ordered rule set ready for evaluation
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Project name, if the file declares one
    pub name: Option<String>,

    /// Compiled rules, in declaration order
    pub rules: Vec<Rule>,

    /// Union of the pattern rules' file scopes (empty = collect everything)
    pub scopes: Vec<glob::Pattern>,
}

impl RuleSet {
    /// Rules that target record subjects, in declaration order
    #[must_use]
    pub fn record_rules(&self) -> Vec<Rule> {
        self.rules.iter().filter(|r| r.targets_records()).cloned().collect()
    }

    /// Rules that target text subjects, in declaration order
    #[must_use]
    pub fn text_rules(&self) -> Vec<Rule> {
        self.rules.iter().filter(|r| r.targets_text()).cloned().collect()
    }

    /// Number of rules in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Load and validate a rule set from a .checkup.toml file
///
/// # Errors
///
/// Returns [`RulesetError`] if the file cannot be read or parsed, or if
/// any rule entry is malformed.
pub fn load_file(path: &Path) -> Result<RuleSet, RulesetError> {
    log::debug!("loading rule set from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_ruleset(&content)
}

/// Parse and validate a rule set from TOML text
///
/// # Errors
///
/// Returns [`RulesetError`] if the text is not valid TOML or any rule
/// entry is malformed.
pub fn parse_ruleset(content: &str) -> Result<RuleSet, RulesetError> {
    let file: RulesetFile = toml::from_str(content)?;
    compile(file)
}

/// Compile raw entries into a validated rule set
fn compile(file: RulesetFile) -> Result<RuleSet, RulesetError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut rules = Vec::with_capacity(file.rules.len());
    let mut scopes = Vec::new();

    for (index, entry) in file.rules.into_iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(RulesetError::UnnamedRule { index });
        }
        if !seen.insert(entry.name.clone()) {
            return Err(RulesetError::DuplicateName { rule: entry.name });
        }

        rules.push(compile_entry(&entry, &mut scopes)?);
    }

    Ok(RuleSet {
        name: file.project.name,
        rules,
        scopes,
    })
}

/// Compile one entry, collecting its file scopes
fn compile_entry(entry: &RuleEntry, scopes: &mut Vec<glob::Pattern>) -> Result<Rule, RulesetError> {
    let severity: Severity =
        entry.severity.parse().map_err(|message| RulesetError::Invalid {
            rule: entry.name.clone(),
            detail: message,
        })?;
    let polarity: Polarity =
        entry.polarity.parse().map_err(|message| RulesetError::Invalid {
            rule: entry.name.clone(),
            detail: message,
        })?;

    let detector = match (&entry.field, &entry.pattern) {
        (Some(_), Some(_)) => {
            return Err(RulesetError::AmbiguousDetector {
                rule: entry.name.clone(),
            });
        },
        (None, None) => {
            return Err(RulesetError::MissingDetector {
                rule: entry.name.clone(),
            });
        },
        (Some(key), None) => {
            if !entry.files.is_empty() {
                return Err(RulesetError::Invalid {
                    rule: entry.name.clone(),
                    detail: "file scopes apply to pattern rules, not field rules".to_string(),
                });
            }
            Detector::Field {
                key: key.clone(),
                numeric: entry.numeric,
            }
        },
        (None, Some(pattern)) => {
            if entry.numeric {
                return Err(RulesetError::Invalid {
                    rule: entry.name.clone(),
                    detail: "numeric applies to field rules, not pattern rules".to_string(),
                });
            }
            for scope in &entry.files {
                let compiled =
                    glob::Pattern::new(scope).map_err(|source| RulesetError::BadScope {
                        rule: entry.name.clone(),
                        scope: scope.clone(),
                        source,
                    })?;
                scopes.push(compiled);
            }
            Detector::Pattern {
                regex: regex::Regex::new(pattern).map_err(|source| RulesetError::BadPattern {
                    rule: entry.name.clone(),
                    source,
                })?,
            }
        },
    };

    Ok(Rule {
        name: entry.name.clone(),
        detector,
        polarity,
        required: entry.required,
        severity,
    })
}
