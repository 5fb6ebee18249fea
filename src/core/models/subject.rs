//! Subject model
//!
//! A subject is the thing a rule set is evaluated against: a structured
//! record (named fields) or a blob of text (file content). Subjects are
//! never mutated by evaluation.

use std::collections::BTreeMap;

/// A single field value on a record subject
///
/// An absent field is simply missing from the record's map; there is no
/// "null" variant. The distinction matters for numeric fields, where a
/// value of zero is present and only a missing key is absent.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text value - empty string counts as absent for non-numeric rules
    Text(String),
    /// Numeric value - zero is a valid present value
    Number(f64),
    /// Boolean flag - always counts as present
    Flag(bool),
}

impl FieldValue {
    /// Get the text content, if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) | Self::Flag(_) => None,
        }
    }

    /// Whether this value holds a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// The thing being evaluated
#[derive(Debug, Clone)]
pub enum Subject {
    /// A structured record with named fields
    Record {
        /// Identifier shown in reports (e.g. an entity id)
        id: String,
        /// Field-name to value mapping; absent fields are missing keys.
        /// BTreeMap keeps iteration deterministic.
        fields: BTreeMap<String, FieldValue>,
    },
    /// Raw text content
    Text {
        /// Identifier shown in reports (conventionally a file path)
        id: String,
        /// The content to match patterns against
        content: String,
    },
}

impl Subject {
    /// Create an empty record subject
    #[must_use]
    pub fn record(id: &str) -> Self {
        Self::Record {
            id: id.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Create a text subject
    #[must_use]
    pub fn text(id: &str, content: &str) -> Self {
        Self::Text {
            id: id.to_string(),
            content: content.to_string(),
        }
    }

    /// Add a field to a record subject (builder style)
    ///
    /// Has no effect on text subjects.
    #[must_use]
    pub fn field(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        if let Self::Record { fields, .. } = &mut self {
            fields.insert(key.to_string(), value.into());
        }
        self
    }

    /// The subject's identifier
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Record { id, .. } | Self::Text { id, .. } => id,
        }
    }

    /// Whether this is a record subject
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record { .. })
    }
}
