//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

use crate::domain::TreeRow;
use crate::tree::ExpandedSet;

pub const FOLDER_ICON: &str = "📁";
pub const NOTE_ICON: &str = "📄";
pub const EXPANDED_MARKER: &str = "▼";
pub const COLLAPSED_MARKER: &str = "▶";
pub const EMPTY_TREE_MESSAGE: &str = "No folders or notes found.";

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tree (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A configured folder in listing output.
#[derive(Debug, Serialize)]
pub struct FolderListing {
    pub number: usize,
    pub path: PathBuf,
}

/// Leading whitespace for a row: `indent` two-space units.
pub fn indentation(indent: usize) -> String {
    "  ".repeat(indent)
}

/// Text of one tree row as shown to the user.
pub fn row_text(row: &TreeRow, expanded: &ExpandedSet) -> String {
    let pad = indentation(row.indent());
    match row {
        TreeRow::Folder { folder, .. } => {
            let marker = if expanded.contains(folder) {
                EXPANDED_MARKER
            } else {
                COLLAPSED_MARKER
            };
            format!("{pad}{marker} {FOLDER_ICON} {}", folder.name())
        }
        TreeRow::Note { note, .. } => format!("{pad}  {NOTE_ICON} {}", note.name()),
    }
}

/// Renders rows in the requested format.
pub fn render_rows(rows: &[TreeRow], expanded: &ExpandedSet, format: OutputFormat) -> serde_json::Result<String> {
    let text = match format {
        OutputFormat::Human => {
            if rows.is_empty() {
                EMPTY_TREE_MESSAGE.to_string()
            } else {
                rows.iter()
                    .map(|r| row_text(r, expanded))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        OutputFormat::Json => serde_json::to_string_pretty(&Output::new(rows))?,
        OutputFormat::Paths => rows
            .iter()
            .filter_map(TreeRow::as_note)
            .map(|n| n.path().display().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LogicalFolder, Note};
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<TreeRow> {
        vec![
            TreeRow::Folder {
                folder: LogicalFolder::new("work"),
                indent: 0,
            },
            TreeRow::Note {
                note: Note::new("/n/work/plan.md"),
                indent: 2,
            },
            TreeRow::Folder {
                folder: LogicalFolder::new("work/2024"),
                indent: 2,
            },
        ]
    }

    fn expanded() -> ExpandedSet {
        [LogicalFolder::new("work")].into_iter().collect()
    }

    #[test]
    fn human_output_shows_markers_icons_and_indent() {
        let text = render_rows(&rows(), &expanded(), OutputFormat::Human).unwrap();
        assert_eq!(
            text,
            "▼ 📁 work\n      📄 plan.md\n    ▶ 📁 2024"
        );
    }

    #[test]
    fn human_output_for_empty_rows() {
        let text = render_rows(&[], &ExpandedSet::default(), OutputFormat::Human).unwrap();
        assert_eq!(text, EMPTY_TREE_MESSAGE);
    }

    #[test]
    fn paths_output_lists_notes_only() {
        let text = render_rows(&rows(), &expanded(), OutputFormat::Paths).unwrap();
        assert_eq!(text, "/n/work/plan.md");
    }

    #[test]
    fn json_output_tags_row_kind() {
        let text = render_rows(&rows(), &expanded(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["kind"], "folder");
        assert_eq!(data[0]["folder"], "work");
        assert_eq!(data[1]["kind"], "note");
        assert_eq!(data[1]["note"]["name"], "plan.md");
        assert_eq!(data[2]["indent"], 2);
    }
}
