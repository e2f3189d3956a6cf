//! Immutable snapshot of the scanned roots.

use std::path::Path;

use super::folders::FolderTree;
use super::scanner::{Root, ScanWarning, scan};
use crate::domain::{AccessGuard, Note};

/// Everything the tree needs from disk, computed in one pass.
///
/// A catalog is never patched: every structural change loads a new one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    roots: Vec<Root>,
    notes: Vec<Note>,
    tree: FolderTree,
    warnings: Vec<ScanWarning>,
}

impl Catalog {
    /// Scans `folders` and synthesizes the folder tree.
    pub fn load<P: AsRef<Path>>(folders: &[P], guard: &impl AccessGuard) -> Self {
        let roots: Vec<Root> = folders.iter().map(|f| Root::resolve(f.as_ref())).collect();
        let scanned = scan(&roots, guard);
        let tree = FolderTree::synthesize(&scanned.notes, &scanned.roots);
        tracing::info!(
            roots = scanned.roots.len(),
            notes = scanned.notes.len(),
            folders = tree.folders().len(),
            "catalog loaded"
        );
        Self {
            roots: scanned.roots,
            notes: scanned.notes,
            tree,
            warnings: scanned.warnings,
        }
    }

    /// Builds a catalog around an in-memory tree (no roots, no disk access).
    pub fn from_tree(tree: FolderTree) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    /// Roots that passed the access check.
    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    /// All notes, sorted by file name.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }
}
