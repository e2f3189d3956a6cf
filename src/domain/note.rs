//! Note file type and the recognized note extensions.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// File extensions recognized as notes (matched case-insensitively).
pub const NOTE_EXTENSIONS: &[&str] = &["txt", "md"];

/// Extension appended to new notes whose name has no recognized extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// A note file found under one of the configured roots.
///
/// Notes are never mutated; a rescan produces a fresh set.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    path: PathBuf,
    name: String,
}

impl Note {
    /// Creates a note from its absolute file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Absolute path of the note file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name, used for display and ordering.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the note lives in.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Returns whether the note name contains an already-lowercased query.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Note(\"{}\")", self.path.display())
    }
}

/// Returns whether a path has one of the recognized note extensions.
pub fn has_note_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| NOTE_EXTENSIONS.iter().any(|n| e.eq_ignore_ascii_case(n)))
}

/// Returns whether a bare file name already ends with a recognized extension.
pub fn has_note_suffix(name: &str) -> bool {
    let lower = name.to_lowercase();
    NOTE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}
