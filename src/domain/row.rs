//! Display rows of the folder/note tree.

use serde::Serialize;

use super::{LogicalFolder, Note};

/// One renderable line of the tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeRow {
    Folder { folder: LogicalFolder, indent: usize },
    Note { note: Note, indent: usize },
}

impl TreeRow {
    pub fn indent(&self) -> usize {
        match self {
            TreeRow::Folder { indent, .. } | TreeRow::Note { indent, .. } => *indent,
        }
    }

    /// Returns the folder if this is a folder row.
    pub fn as_folder(&self) -> Option<&LogicalFolder> {
        match self {
            TreeRow::Folder { folder, .. } => Some(folder),
            TreeRow::Note { .. } => None,
        }
    }

    /// Returns the note if this is a note row.
    pub fn as_note(&self) -> Option<&Note> {
        match self {
            TreeRow::Note { note, .. } => Some(note),
            TreeRow::Folder { .. } => None,
        }
    }

    /// Name shown for the row: the last folder segment or the file name.
    pub fn label(&self) -> &str {
        match self {
            TreeRow::Folder { folder, .. } => folder.name(),
            TreeRow::Note { note, .. } => note.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_variant() {
        let folder = TreeRow::Folder {
            folder: LogicalFolder::new("a/b"),
            indent: 2,
        };
        let note = TreeRow::Note {
            note: Note::new("/r/a/b/x.md"),
            indent: 4,
        };

        assert_eq!(folder.as_folder(), Some(&LogicalFolder::new("a/b")));
        assert!(folder.as_note().is_none());
        assert_eq!(folder.label(), "b");
        assert_eq!(note.label(), "x.md");
        assert_eq!(note.indent(), 4);
        assert!(note.as_folder().is_none());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let row = TreeRow::Folder {
            folder: LogicalFolder::new("a"),
            indent: 0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["kind"], "folder");
        assert_eq!(json["folder"], "a");
        assert_eq!(json["indent"], 0);
    }
}
