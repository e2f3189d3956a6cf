//! Interactive session state: catalog, query, rows and selection.

use super::builder::build_rows;
use super::selection::{ExpandedSet, Selection};
use crate::domain::{LogicalFolder, Note, TreeRow};
use crate::index::Catalog;

/// A user command addressed to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveDown,
    MoveUp,
    Expand,
    Collapse,
    /// Toggle the selected folder, or open the selected note.
    Activate,
    Open,
    NewNote,
    NewFolder,
    Delete,
    ManageFolders,
    Help,
    Quit,
    InsertChar(char),
    Backspace,
    ClearQuery,
}

/// Work the session cannot do itself; the shell performs it outside the
/// render loop and then refreshes the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    OpenNote(Note),
    CreateNote(LogicalFolder),
    CreateFolder(LogicalFolder),
    DeleteNote(Note),
    ManageFolders,
    Help,
    Quit,
}

/// Explicit context for one run of the tree view.
///
/// Rows are always a pure function of the catalog, the expansion state and
/// the query. Structural changes replace the whole session through
/// [`Session::refresh`].
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    query: String,
    selection: Selection,
    rows: Vec<TreeRow>,
}

impl Session {
    pub fn new(catalog: Catalog, expanded: ExpandedSet) -> Self {
        let mut session = Self {
            catalog,
            query: String::new(),
            selection: Selection::new(expanded),
            rows: Vec::new(),
        };
        session.rebuild();
        session
    }

    /// Starts over on a new catalog, keeping only the expansion state.
    pub fn refresh(&mut self, catalog: Catalog) {
        let expanded = std::mem::take(&mut self.selection).into_expanded();
        *self = Self::new(catalog, expanded);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn selected(&self) -> Option<&TreeRow> {
        self.rows.get(self.selection.index())
    }

    pub fn expanded(&self) -> &ExpandedSet {
        self.selection.expanded()
    }

    pub fn is_expanded(&self, folder: &LogicalFolder) -> bool {
        self.selection.expanded().contains(folder)
    }

    /// Replaces the query, rebuilding rows and resetting the selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.rebuild();
        self.selection.reset();
    }

    /// Applies a command, returning an intent when outside work is needed.
    pub fn handle(&mut self, command: Command) -> Option<Intent> {
        let len = self.rows.len();
        match command {
            Command::MoveDown => self.selection.move_down(len),
            Command::MoveUp => self.selection.move_up(len),
            Command::Expand => self.update_expansion(Selection::expand),
            Command::Collapse => self.update_expansion(Selection::collapse),
            Command::Activate => match self.selected()? {
                TreeRow::Note { note, .. } => return Some(Intent::OpenNote(note.clone())),
                TreeRow::Folder { .. } => self.update_expansion(Selection::toggle),
            },
            Command::Open => {
                let note = self.selected()?.as_note()?;
                return Some(Intent::OpenNote(note.clone()));
            }
            Command::NewNote => {
                let folder = self.selected()?.as_folder()?;
                return Some(Intent::CreateNote(folder.clone()));
            }
            Command::NewFolder => {
                let folder = self.selected()?.as_folder()?;
                return Some(Intent::CreateFolder(folder.clone()));
            }
            Command::Delete => {
                let note = self.selected()?.as_note()?;
                return Some(Intent::DeleteNote(note.clone()));
            }
            Command::ManageFolders => return Some(Intent::ManageFolders),
            Command::Help => return Some(Intent::Help),
            Command::Quit => return Some(Intent::Quit),
            Command::InsertChar(c) => {
                let mut query = std::mem::take(&mut self.query);
                query.push(c);
                self.set_query(query);
            }
            Command::Backspace => {
                let mut query = std::mem::take(&mut self.query);
                query.pop();
                self.set_query(query);
            }
            Command::ClearQuery => self.set_query(String::new()),
        }
        None
    }

    fn update_expansion(&mut self, apply: fn(&mut Selection, &TreeRow) -> bool) {
        let Some(row) = self.selected().cloned() else {
            return;
        };
        if apply(&mut self.selection, &row) {
            self.rebuild();
            self.selection.clamp(self.rows.len());
        }
    }

    fn rebuild(&mut self) {
        self.rows = build_rows(self.catalog.tree(), self.selection.expanded(), &self.query);
    }
}
