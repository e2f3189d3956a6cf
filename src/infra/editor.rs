//! Launching the user's editor on a note.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

use crate::domain::safety::is_allowed_editor;

/// Editor used when neither `$EDITOR` nor `$VISUAL` is set.
pub const DEFAULT_EDITOR: &str = "vim";

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor '{editor}' is not in the allowed list")]
    NotAllowed { editor: String },

    #[error("note not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to launch editor '{editor}': {message}")]
    Failed { editor: String, message: String },
}

/// Opens a file in an editor and waits for it to exit.
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<(), EditorError>;
}

/// Resolves the editor command from the environment.
///
/// Precedence order:
/// 1. `$EDITOR`
/// 2. `$VISUAL`
/// 3. `vim`
pub fn editor_command() -> String {
    pick_editor(std::env::var("EDITOR").ok(), std::env::var("VISUAL").ok())
}

fn pick_editor(editor: Option<String>, visual: Option<String>) -> String {
    editor
        .filter(|e| !e.trim().is_empty())
        .or(visual.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
        .trim()
        .to_string()
}

/// Returns the program name an editor command runs, without its directory.
fn program_name(editor: &str) -> &str {
    Path::new(editor)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(editor)
}

/// Launches a whitelisted editor as a child process.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Editor taken from the environment.
    pub fn from_env() -> Self {
        Self::new(editor_command())
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Checks the whitelist without launching anything.
    pub fn check(&self) -> Result<(), EditorError> {
        if is_allowed_editor(program_name(&self.command)) {
            Ok(())
        } else {
            Err(EditorError::NotAllowed {
                editor: self.command.clone(),
            })
        }
    }
}

impl EditorLauncher for SystemEditor {
    fn open(&self, path: &Path) -> Result<(), EditorError> {
        self.check()?;
        if !path.is_file() {
            return Err(EditorError::NotFound { path: path.into() });
        }

        tracing::info!(editor = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(&self.command)
            .arg(path)
            .status()
            .map_err(|e| EditorError::Failed {
                editor: self.command.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(EditorError::Failed {
                editor: self.command.clone(),
                message: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}
