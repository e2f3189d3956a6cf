//! Flattening the folder tree into display rows.

use super::selection::ExpandedSet;
use crate::domain::TreeRow;
use crate::index::FolderTree;

/// Builds the ordered display rows for a tree, expansion state and query.
///
/// With an empty query a folder is visible only when all of its ancestors
/// are expanded, and its notes are listed only when it is expanded itself.
/// A non-empty query ignores expansion: every folder whose path contains
/// the query is shown along with its notes whose names contain the query.
/// Matching is case-insensitive substring matching.
pub fn build_rows(tree: &FolderTree, expanded: &ExpandedSet, query: &str) -> Vec<TreeRow> {
    let query = query.to_lowercase();
    let searching = !query.is_empty();
    let mut rows = Vec::new();

    for folder in tree.folders() {
        let visible = if searching {
            folder.matches(&query)
        } else {
            folder.ancestors().iter().all(|a| expanded.contains(a))
        };
        if !visible {
            continue;
        }

        let indent = folder.indent();
        rows.push(TreeRow::Folder {
            folder: folder.clone(),
            indent,
        });

        if searching || expanded.contains(folder) {
            let mut notes: Vec<_> = tree
                .notes_in(folder)
                .iter()
                .filter(|n| !searching || n.matches(&query))
                .collect();
            notes.sort_by(|a, b| a.name().cmp(b.name()));
            rows.extend(notes.into_iter().map(|note| TreeRow::Note {
                note: note.clone(),
                indent: indent + 2,
            }));
        }
    }

    rows
}
