//! Rule model
//!
//! A rule declares: "this subject must (or must not) exhibit this."
//! Rules are immutable once constructed; a rule set is an ordered list of
//! them, evaluated top to bottom.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Severity;

/// Whether a rule passes on presence or absence of a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Passes when the detector finds a match (field present, pattern found)
    #[default]
    Positive,
    /// Passes when the detector finds nothing (e.g. "no inline styles")
    Negative,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

impl std::str::FromStr for Polarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            _ => Err(format!("Invalid polarity: {s}. Use: positive, negative")),
        }
    }
}

/// Detection capability of a rule
///
/// Field detectors target one named field of a record subject. Pattern
/// detectors count regex occurrences in a text subject. Both kinds flow
/// through the same evaluation algorithm.
#[derive(Debug, Clone)]
pub enum Detector {
    /// Look up a named field on a record subject
    Field {
        /// Field key to look up
        key: String,
        /// Zero is a valid present value; only absence fails.
        /// Declared per rule, never inferred from the value's type.
        numeric: bool,
    },
    /// Count occurrences of a compiled pattern in a text subject
    Pattern {
        /// The compiled regular expression
        regex: Regex,
    },
}

/// A declarative check evaluated against a subject
#[derive(Debug, Clone)]
pub struct Rule {
    /// Identifier shown in reports (unique within a rule set)
    pub name: String,

    /// How this rule detects its condition
    pub detector: Detector,

    /// Pass on presence or absence
    pub polarity: Polarity,

    /// Whether failing this rule fails the subject overall
    pub required: bool,

    /// Weight of a failure in report aggregates
    pub severity: Severity,
}

impl Rule {
    /// Create a rule that requires a named record field to be present
    #[must_use]
    pub fn field(name: &str, key: &str, severity: Severity) -> Self {
        Self {
            name: name.to_string(),
            detector: Detector::Field {
                key: key.to_string(),
                numeric: false,
            },
            polarity: Polarity::Positive,
            required: true,
            severity,
        }
    }

    /// Create a rule for a numeric record field where zero counts as present
    #[must_use]
    pub fn numeric_field(name: &str, key: &str, severity: Severity) -> Self {
        Self {
            name: name.to_string(),
            detector: Detector::Field {
                key: key.to_string(),
                numeric: true,
            },
            polarity: Polarity::Positive,
            required: true,
            severity,
        }
    }

    /// Create a rule that matches a pattern against text subjects
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn pattern(name: &str, pattern: &str, severity: Severity) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.to_string(),
            detector: Detector::Pattern {
                regex: Regex::new(pattern)?,
            },
            polarity: Polarity::Positive,
            required: true,
            severity,
        })
    }

    /// Set polarity
    #[must_use]
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Set whether failing this rule fails the subject overall
    #[must_use]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Whether this rule targets record subjects
    #[must_use]
    pub const fn targets_records(&self) -> bool {
        matches!(self.detector, Detector::Field { .. })
    }

    /// Whether this rule targets text subjects
    #[must_use]
    pub const fn targets_text(&self) -> bool {
        matches!(self.detector, Detector::Pattern { .. })
    }
}
