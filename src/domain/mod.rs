//! Core types: Note, LogicalFolder, TreeRow, and path-safety predicates

mod folder;
mod note;
mod row;
pub mod safety;

pub use folder::LogicalFolder;
pub use note::{DEFAULT_EXTENSION, NOTE_EXTENSIONS, Note, has_note_extension, has_note_suffix};
pub use row::TreeRow;
pub use safety::{AccessGuard, FolderGuard};
