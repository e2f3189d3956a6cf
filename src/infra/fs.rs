//! Creating and deleting notes and folders under the configured roots.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::safety::{is_safe_filename, is_safe_path};
use crate::domain::{DEFAULT_EXTENSION, LogicalFolder, Note, has_note_suffix};
use crate::index::Root;

/// Phrase the user must type to confirm a deletion.
pub const DELETE_CONFIRMATION: &str = "DELETE";

/// Errors from file operations on notes and folders.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("unsafe path: {path}")]
    UnsafePath { path: String },

    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("permission denied: {path}")]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("deletion not confirmed")]
    ConfirmationMismatch,

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OpError {
    /// Creates an appropriate OpError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => OpError::NotFound { path: path.into() },
            io::ErrorKind::AlreadyExists => OpError::AlreadyExists { path: path.into() },
            io::ErrorKind::PermissionDenied => OpError::AccessDenied {
                path: path.into(),
                source: error,
            },
            _ => OpError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    fn unsafe_path(path: impl Into<String>) -> Self {
        OpError::UnsafePath { path: path.into() }
    }
}

/// Resolves a logical folder to a directory under one of the roots.
///
/// Roots are tried in order and the first one where the folder exists as a
/// directory wins.
///
/// # Errors
///
/// Returns `OpError::UnsafePath` if the folder escapes a root.
/// Returns `OpError::NotFound` if no root contains the folder.
pub fn resolve_folder(folder: &LogicalFolder, roots: &[Root]) -> Result<PathBuf, OpError> {
    for root in roots {
        if !is_safe_path(root.path(), folder.as_str()) {
            return Err(OpError::unsafe_path(folder.as_str()));
        }
        let candidate = root.join(folder);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }
    Err(OpError::NotFound {
        path: folder.to_relative_path(),
    })
}

/// Returns `filename` with the default extension appended when it has no
/// recognized note extension.
pub fn note_file_name(filename: &str) -> String {
    if has_note_suffix(filename) {
        filename.to_string()
    } else {
        format!("{filename}.{DEFAULT_EXTENSION}")
    }
}

/// Creates an empty note in `folder`.
///
/// # Errors
///
/// Returns `OpError::UnsafePath` if the name fails validation.
/// Returns `OpError::AlreadyExists` if the file already exists.
/// Returns `OpError::NotFound` if the folder no longer exists.
pub fn create_note(folder: &LogicalFolder, filename: &str, roots: &[Root]) -> Result<Note, OpError> {
    if !is_safe_filename(filename) {
        return Err(OpError::unsafe_path(filename));
    }
    let dir = resolve_folder(folder, roots)?;
    let path = dir.join(note_file_name(filename));
    if path.exists() {
        return Err(OpError::AlreadyExists { path });
    }

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| OpError::from_io(&path, e))?;

    tracing::info!(path = %path.display(), "created note");
    Ok(Note::new(path))
}

/// Creates a folder named `name` inside `parent`.
///
/// # Errors
///
/// Returns `OpError::UnsafePath` if the name fails validation.
/// Returns `OpError::AlreadyExists` if the path already exists.
/// Returns `OpError::NotFound` if the parent folder no longer exists.
pub fn create_folder(parent: &LogicalFolder, name: &str, roots: &[Root]) -> Result<PathBuf, OpError> {
    if !is_safe_filename(name) {
        return Err(OpError::unsafe_path(name));
    }
    let dir = resolve_folder(parent, roots)?;
    let path = dir.join(name);
    if path.exists() {
        return Err(OpError::AlreadyExists { path });
    }

    fs::create_dir_all(&path).map_err(|e| OpError::from_io(&path, e))?;

    tracing::info!(path = %path.display(), "created folder");
    Ok(path)
}

/// Deletes a note after checking the typed confirmation.
///
/// Fails closed: the file is left untouched on any error.
///
/// # Errors
///
/// Returns `OpError::ConfirmationMismatch` unless `confirmation` is exactly
/// [`DELETE_CONFIRMATION`].
/// Returns `OpError::NotFound` if the note no longer exists.
/// Returns `OpError::UnsafePath` if the note is not inside a root.
pub fn delete_note(note: &Note, roots: &[Root], confirmation: &str) -> Result<(), OpError> {
    if confirmation != DELETE_CONFIRMATION {
        tracing::info!(path = %note.path().display(), "deletion cancelled");
        return Err(OpError::ConfirmationMismatch);
    }
    let path = note.path();
    let location = entry_location(path)?;
    if !roots.iter().any(|root| location.starts_with(root.path())) {
        return Err(OpError::unsafe_path(path.to_string_lossy()));
    }
    if !path.is_file() {
        return Err(OpError::NotFound { path: path.into() });
    }

    // Removes the entry itself; a symlinked note leaves its target alone.
    fs::remove_file(path).map_err(|e| OpError::from_io(path, e))?;

    tracing::info!(path = %location.display(), "deleted note");
    Ok(())
}

/// Resolved parent directory joined with the entry's own file name.
fn entry_location(path: &Path) -> Result<PathBuf, OpError> {
    let name = path.file_name().ok_or_else(|| OpError::NotFound { path: path.into() })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent = parent.canonicalize().map_err(|e| OpError::from_io(path, e))?;
    Ok(parent.join(name))
}
