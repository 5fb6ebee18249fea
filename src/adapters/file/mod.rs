//! Subject collection from the filesystem
//!
//! Text subjects come from walking a directory tree; record subjects come
//! from a JSON document holding an array of objects. Both hand the
//! evaluator immutable snapshots - retry and IO semantics live here, never
//! in the core.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::{FieldValue, Subject};

/// Errors from collecting subjects
#[derive(Debug, Error)]
pub enum SubjectError {
    /// Root path for text collection does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// IO error reading a file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// The records document is not valid JSON
    #[error("invalid records document {path}: {source}")]
    Json {
        /// Path of the document
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The records document is not an array of objects
    #[error("records document {0} is not a JSON array of objects")]
    NotAnArray(PathBuf),
}

/// Collect text subjects under a root directory
///
/// Hidden entries are skipped. When `scopes` is non-empty, only files
/// whose root-relative path matches one of the globs are collected.
/// Results are sorted by path for deterministic output; content is read
/// lossily so non-UTF-8 bytes never abort a run.
///
/// # Errors
///
/// Returns [`SubjectError`] if the root does not exist or the walk fails.
pub fn collect_text_subjects(
    root: &Path,
    scopes: &[glob::Pattern],
) -> Result<Vec<Subject>, SubjectError> {
    if !root.exists() {
        return Err(SubjectError::RootNotFound(root.to_path_buf()));
    }

    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        if e.path() == root {
            return true;
        }
        !is_hidden(e)
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();

        if in_scope(&relative, scopes) {
            paths.push(relative);
        }
    }

    // Sort for deterministic output
    paths.sort();

    let mut subjects = Vec::with_capacity(paths.len());
    for relative in paths {
        let bytes = fs::read(root.join(&relative))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        log::debug!("collected text subject {} ({} bytes)", relative.display(), content.len());
        subjects.push(Subject::text(&relative.to_string_lossy(), &content));
    }

    Ok(subjects)
}

/// Load record subjects from a JSON document
///
/// The document must be an array of objects; each object becomes one
/// record subject in array order. The identifier is taken from `id_field`
/// when present and a string, falling back to the array index. JSON null
/// becomes an absent field.
///
/// # Errors
///
/// Returns [`SubjectError`] if the document cannot be read, is not valid
/// JSON, or is not an array of objects.
pub fn load_record_subjects(path: &Path, id_field: &str) -> Result<Vec<Subject>, SubjectError> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| SubjectError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let serde_json::Value::Array(items) = value else {
        return Err(SubjectError::NotAnArray(path.to_path_buf()));
    };

    let mut subjects = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let serde_json::Value::Object(object) = item else {
            return Err(SubjectError::NotAnArray(path.to_path_buf()));
        };

        let id = object
            .get(id_field)
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| format!("#{index}"), ToString::to_string);

        subjects.push(record_from_object(&id, object));
    }

    log::debug!("loaded {} record subject(s) from {}", subjects.len(), path.display());
    Ok(subjects)
}

/// Convert a JSON object into a record subject
fn record_from_object(id: &str, object: &serde_json::Map<String, serde_json::Value>) -> Subject {
    let mut subject = Subject::record(id);

    for (key, value) in object {
        let field = match value {
            serde_json::Value::Null => continue, // null is an absent field
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => FieldValue::Number(f),
                None => FieldValue::Text(n.to_string()),
            },
            serde_json::Value::Bool(b) => FieldValue::Flag(*b),
            // Nested structures are carried as their JSON text
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                FieldValue::Text(nested.to_string())
            },
        };
        subject = subject.field(key, field);
    }

    subject
}

/// Whether a relative path falls inside the collection scopes
fn in_scope(relative: &Path, scopes: &[glob::Pattern]) -> bool {
    if scopes.is_empty() {
        return true;
    }
    scopes.iter().any(|scope| scope.matches_path(relative))
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
