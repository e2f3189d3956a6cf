//! Selection index and folder expansion state.

use std::collections::HashSet;

use crate::domain::{LogicalFolder, TreeRow};

/// Folders the user has expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet(HashSet<LogicalFolder>);

impl ExpandedSet {
    pub fn contains(&self, folder: &LogicalFolder) -> bool {
        self.0.contains(folder)
    }

    /// Returns `true` if the folder was not expanded before.
    pub fn insert(&mut self, folder: LogicalFolder) -> bool {
        self.0.insert(folder)
    }

    /// Returns `true` if the folder was expanded before.
    pub fn remove(&mut self, folder: &LogicalFolder) -> bool {
        self.0.remove(folder)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LogicalFolder> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = LogicalFolder>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Current row index plus the expansion state it operates over.
///
/// The index is only meaningful while rows are non-empty; callers pass the
/// current row count to every navigation method.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    index: usize,
    expanded: ExpandedSet,
}

impl Selection {
    pub fn new(expanded: ExpandedSet) -> Self {
        Self { index: 0, expanded }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Consumes the selection, keeping only the expansion state.
    pub fn into_expanded(self) -> ExpandedSet {
        self.expanded
    }

    /// Moves forward, wrapping to the first row.
    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Moves back, wrapping to the last row.
    pub fn move_up(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Flips the expansion of a folder row. Returns whether anything changed.
    pub fn toggle(&mut self, row: &TreeRow) -> bool {
        let Some(folder) = row.as_folder() else {
            return false;
        };
        if !self.expanded.remove(folder) {
            self.expanded.insert(folder.clone());
        }
        true
    }

    /// Expands a folder row. Returns whether anything changed.
    pub fn expand(&mut self, row: &TreeRow) -> bool {
        row.as_folder()
            .is_some_and(|f| self.expanded.insert(f.clone()))
    }

    /// Collapses a folder row. Returns whether anything changed.
    pub fn collapse(&mut self, row: &TreeRow) -> bool {
        row.as_folder().is_some_and(|f| self.expanded.remove(f))
    }

    /// Returns to the first row.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Pulls the index back inside `0..len`.
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }
}
