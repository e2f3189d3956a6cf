//! Root resolution and note scanning.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::domain::safety::resolve;
use crate::domain::{AccessGuard, LogicalFolder, Note, has_note_extension};

// ===========================================
// Root
// ===========================================

/// A configured top-level directory searched for notes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    path: PathBuf,
}

impl Root {
    /// Resolves a configured folder string into a root.
    ///
    /// A leading `~` is expanded to the home directory and the path is
    /// canonicalized when it exists.
    pub fn resolve(raw: &Path) -> Self {
        Self {
            path: resolve(&expand_tilde(raw)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the folder containing `dir`, relative to this root.
    pub fn relative_folder(&self, dir: &Path) -> Option<LogicalFolder> {
        dir.strip_prefix(&self.path)
            .ok()
            .map(LogicalFolder::from_relative)
    }

    /// Joins a logical folder onto this root.
    pub fn join(&self, folder: &LogicalFolder) -> PathBuf {
        self.path.join(folder.to_relative_path())
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Returns the folder of `note` relative to the first root that contains it.
pub fn locate(note: &Note, roots: &[Root]) -> Option<LogicalFolder> {
    roots.iter().find_map(|root| root.relative_folder(note.dir()))
}

// ===========================================
// Scan Result
// ===========================================

/// A non-fatal problem encountered while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The root failed the access check and was skipped.
    UnsafeRoot { path: PathBuf },
    /// A directory or file could not be read and was skipped.
    Unreadable { path: PathBuf, message: String },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::UnsafeRoot { path } => {
                write!(f, "skipping unsafe folder '{}'", path.display())
            }
            ScanWarning::Unreadable { path, message } => {
                write!(f, "cannot access '{}': {}", path.display(), message)
            }
        }
    }
}

/// Result of scanning the configured roots.
#[derive(Debug, Default)]
pub struct Scan {
    /// Notes sorted by file name; ties keep traversal order.
    pub notes: Vec<Note>,
    /// Roots that passed the access check, in configured order.
    pub roots: Vec<Root>,
    pub warnings: Vec<ScanWarning>,
}

// ===========================================
// Scanning
// ===========================================

/// Scans every root for note files.
///
/// Roots rejected by `guard` and unreadable subtrees are skipped with a
/// warning; scanning always continues with the remaining entries.
pub fn scan(roots: &[Root], guard: &impl AccessGuard) -> Scan {
    let mut result = Scan::default();
    let mut seen = HashSet::new();

    for root in roots {
        if !guard.permits(root.path()) {
            tracing::warn!(root = %root, "skipping unsafe folder");
            result.warnings.push(ScanWarning::UnsafeRoot {
                path: root.path().to_path_buf(),
            });
            continue;
        }

        let before = result.notes.len();
        for entry in walk(root.path()) {
            match entry {
                Ok(entry) if is_note_file(&entry) => {
                    // Overlapping roots reach the same file more than once.
                    if seen.insert(entry.path().to_path_buf()) {
                        result.notes.push(Note::new(entry.into_path()));
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.path().to_path_buf());
                    tracing::warn!(path = %path.display(), error = %err, "cannot access folder");
                    result.warnings.push(ScanWarning::Unreadable {
                        path,
                        message: err.to_string(),
                    });
                }
            }
        }
        tracing::debug!(root = %root, notes = result.notes.len() - before, "scanned root");
        result.roots.push(root.clone());
    }

    result.notes.sort_by(|a, b| a.name().cmp(b.name()));
    result
}

/// Walks a directory tree in a deterministic order without following
/// symlinked directories.
pub(crate) fn walk(dir: &Path) -> WalkDir {
    WalkDir::new(dir).sort_by_file_name()
}

fn is_note_file(entry: &DirEntry) -> bool {
    let is_file = entry.file_type().is_file()
        || (entry.path_is_symlink() && entry.path().is_file());
    is_file && has_note_extension(entry.path())
}
