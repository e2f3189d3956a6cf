//! Line prompts shown while the terminal UI is suspended.
//!
//! Every prompt reads from a `BufRead` and writes to a `Write`, so the same
//! code drives stdin/stdout and in-memory buffers in tests.

use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::path::{Path, PathBuf};

use crate::cli::config::{AddOutcome, Config};
use crate::domain::{AccessGuard, LogicalFolder, Note};
use crate::index::Root;
use crate::infra::fs::{DELETE_CONFIRMATION, OpError, create_folder, create_note, delete_note};

pub const HELP_TEXT: &str = "\
NAVIGATION
  Up/Down          Move through folders and notes
  Right            Expand selected folder
  Left             Collapse selected folder
  Enter            Toggle folder or open note

FILE OPERATIONS
  Ctrl-O           Open selected note in editor
  Ctrl-N           Create new note in selected folder
  Ctrl-F           Create new folder in selected folder
  Ctrl-D           Delete selected note

FOLDER MANAGEMENT
  Ctrl-S           Manage search folders

SEARCH
  Type to filter folders and notes by name
  Backspace        Delete last character
  Ctrl-U           Clear search

OTHER
  Tab / F1         Show this help
  Ctrl-C / Ctrl-Q  Quit
  Esc              Quit";

/// Interactive line-based dialogs.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `question` and reads one trimmed line. Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prints a line of text.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Waits for Enter.
    pub fn pause(&mut self) -> io::Result<()> {
        self.ask("Press Enter to return..").map(|_| ())
    }

    /// Asks for a note name and creates the note in `folder`.
    ///
    /// Returns `Ok(None)` when the user enters an empty name.
    pub fn create_note(&mut self, folder: &LogicalFolder, roots: &[Root]) -> Result<Option<Note>> {
        self.say("Empty name will not create a file and go back to the main menu".yellow())?;
        let name = self.ask(&format!("Enter filename for new note in '{folder}': "))?;
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            self.say("No filename provided. Going back to the main menu.".yellow())?;
            return Ok(None);
        };

        let note = create_note(folder, &name, roots)?;
        self.say(format!("✓ Created new note: {}", note.name()).green())?;
        Ok(Some(note))
    }

    /// Asks for a folder name and creates it inside `parent`.
    ///
    /// Returns `Ok(None)` when the user enters an empty name.
    pub fn create_folder(&mut self, parent: &LogicalFolder, roots: &[Root]) -> Result<Option<PathBuf>> {
        self.say("Empty name will not create a folder and go back to the main menu".yellow())?;
        let name = self.ask(&format!("Enter name for new folder in '{parent}': "))?;
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            self.say("No folder name provided. Going back to the main menu.".yellow())?;
            return Ok(None);
        };

        let path = create_folder(parent, &name, roots)?;
        self.say(format!("✓ Created new folder: {}", path.display()).green())?;
        Ok(Some(path))
    }

    /// Asks the user to type the confirmation phrase, then deletes the note.
    ///
    /// Returns `Ok(false)` when the deletion was cancelled.
    pub fn delete_note(&mut self, note: &Note, roots: &[Root]) -> Result<bool> {
        self.say("⚠ You are about to delete the file:".yellow())?;
        self.say(format!("   {}", note.path().display()).red())?;
        self.say("This action cannot be undone!\n".yellow())?;

        let answer = self
            .ask(&format!("Type '{DELETE_CONFIRMATION}' to confirm deletion: "))?
            .unwrap_or_default();
        match delete_note(note, roots, &answer) {
            Ok(()) => {
                self.say(format!("✓ File deleted successfully: {}", note.name()).green())?;
                Ok(true)
            }
            Err(OpError::ConfirmationMismatch) => {
                self.say("Deletion cancelled.".yellow())?;
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Shows the key reference and waits for Enter.
    pub fn help(&mut self) -> io::Result<()> {
        self.say("Note CLI".bold().cyan())?;
        self.say("Browse and manage plain-text notes as a folder tree.\n")?;
        self.say(HELP_TEXT)?;
        self.say("")?;
        self.ask("Press Enter to continue...").map(|_| ())
    }

    /// Runs the folder management menu until the user goes back.
    ///
    /// Every change is saved to `config_path` immediately.
    pub fn manage_folders(
        &mut self,
        config: &mut Config,
        config_path: &Path,
        guard: &impl AccessGuard,
    ) -> Result<()> {
        loop {
            self.print_folder_menu(config)?;
            let Some(choice) = self.ask("\nEnter your choice: ")? else {
                return Ok(());
            };

            match choice.to_lowercase().as_str() {
                "a" => {
                    let raw = self
                        .ask("Enter the absolute path of the folder to add: ")?
                        .unwrap_or_default();
                    match config.add_folder(&raw, guard) {
                        Ok(AddOutcome::Added(path)) => {
                            config.save_to(config_path)?;
                            self.say(format!("✓ Folder '{}' added successfully.", path.display()).green())?;
                        }
                        Ok(AddOutcome::AlreadyPresent(_)) => {
                            self.say("⚠ Folder already in the list.".yellow())?;
                        }
                        Err(err) => self.say(format!("✗ Error: {err}").red())?,
                    }
                }
                "r" => {
                    if config.folders.is_empty() {
                        self.say("⚠ No folders to remove.".yellow())?;
                        continue;
                    }
                    let raw = self
                        .ask("Enter the number of the folder to remove: ")?
                        .unwrap_or_default();
                    let Ok(number) = raw.parse::<usize>() else {
                        self.say("✗ Invalid input. Please enter a number.".red())?;
                        continue;
                    };
                    match config.remove_folder(number) {
                        Ok(removed) => {
                            config.save_to(config_path)?;
                            self.say(format!("✓ Folder '{}' removed successfully.", removed.display()).green())?;
                        }
                        Err(err) => self.say(format!("✗ {err}").red())?,
                    }
                }
                "b" => return Ok(()),
                _ => self.say("✗ Invalid choice. Please try again.".red())?,
            }
        }
    }

    fn print_folder_menu(&mut self, config: &Config) -> io::Result<()> {
        let rule = "─".repeat(50);
        self.say(format!("\n{rule}"))?;
        self.say("                    MANAGE FOLDERS")?;
        self.say(&rule)?;
        self.say("Current search folders:")?;
        if config.folders.is_empty() {
            self.say("  (None)")?;
        }
        for (i, folder) in config.folders.iter().enumerate() {
            self.say(format!("  {}: {}", i + 1, folder.display()))?;
        }
        self.say("\nOptions:")?;
        self.say("  (a) Add a folder")?;
        self.say("  (r) Remove a folder")?;
        self.say("  (b) Back to main menu")
    }
}
