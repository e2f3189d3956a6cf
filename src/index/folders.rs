//! Virtual folder synthesis across multiple roots.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use super::scanner::{Root, locate, walk};
use crate::domain::{LogicalFolder, Note, has_note_extension};

/// Computes the set of logical folders shown in the tree.
///
/// The set contains every folder holding a note, every directory on disk
/// whose immediate children include no note, and all of their ancestors.
pub fn derive(notes: &[Note], roots: &[Root]) -> BTreeSet<LogicalFolder> {
    let mut folders = BTreeSet::new();

    for note in notes {
        if let Some(folder) = locate(note, roots) {
            folders.extend(folder.with_ancestors());
        }
    }

    for root in roots {
        for entry in walk(root.path()).min_depth(1).into_iter().flatten() {
            if !entry.file_type().is_dir() || holds_notes(entry.path()) != Some(false) {
                continue;
            }
            if let Some(folder) = root.relative_folder(entry.path()) {
                folders.extend(folder.with_ancestors());
            }
        }
    }

    folders
}

/// Groups notes by the logical folder they belong to.
///
/// Each note is attributed to the first root that contains it. Note order
/// within a folder follows the input order.
pub fn group_notes(notes: &[Note], roots: &[Root]) -> HashMap<LogicalFolder, Vec<Note>> {
    let mut groups: HashMap<LogicalFolder, Vec<Note>> = HashMap::new();
    for note in notes {
        if let Some(folder) = locate(note, roots) {
            groups.entry(folder).or_default().push(note.clone());
        }
    }
    groups
}

/// Synthesized folders together with the notes each one holds.
///
/// This is the in-memory input of the tree builder; building rows from it
/// never touches the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderTree {
    folders: BTreeSet<LogicalFolder>,
    notes: HashMap<LogicalFolder, Vec<Note>>,
}

impl FolderTree {
    /// Synthesizes the tree for scanned notes under `roots`.
    pub fn synthesize(notes: &[Note], roots: &[Root]) -> Self {
        Self {
            folders: derive(notes, roots),
            notes: group_notes(notes, roots),
        }
    }

    /// Builds a tree from folder paths, closing over their ancestors.
    pub fn from_folders<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folders = paths
            .into_iter()
            .flat_map(|p| LogicalFolder::new(p.as_ref()).with_ancestors())
            .collect();
        Self {
            folders,
            notes: HashMap::new(),
        }
    }

    /// Adds a note to `folder`, inserting the folder and its ancestors.
    pub fn with_note(mut self, folder: &str, note: Note) -> Self {
        let folder = LogicalFolder::new(folder);
        self.folders.extend(folder.with_ancestors());
        self.notes.entry(folder).or_default().push(note);
        self
    }

    /// Folders in lexicographic path order.
    pub fn folders(&self) -> &BTreeSet<LogicalFolder> {
        &self.folders
    }

    /// Notes directly inside `folder`.
    pub fn notes_in(&self, folder: &LogicalFolder) -> &[Note] {
        self.notes.get(folder).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, folder: &LogicalFolder) -> bool {
        self.folders.contains(folder)
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

/// Whether `dir` directly contains a note, or `None` when it cannot be read.
///
/// Unreadable directories are left out of the tree; the scan already
/// reported them.
fn holds_notes(dir: &Path) -> Option<bool> {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "unreadable folder left out");
        return None;
    };
    Some(
        entries
            .filter_map(Result::ok)
            .any(|e| e.path().is_file() && has_note_extension(&e.path())),
    )
}
