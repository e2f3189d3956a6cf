//! Handlers for `new`, `mkdir`, `rm` and `open`.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::permitted_roots;
use crate::cli::config::Config;
use crate::cli::{MkdirArgs, NewArgs, OpenArgs, RmArgs};
use crate::domain::{AccessGuard, LogicalFolder, Note, has_note_extension};
use crate::infra::{EditorLauncher, SystemEditor, create_folder, create_note};
use crate::tui::prompts::Prompter;

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_new_impl<E: EditorLauncher>(
    args: &NewArgs,
    config: &Config,
    guard: &impl AccessGuard,
    editor: &E,
) -> Result<Note> {
    let roots = permitted_roots(config, guard);
    if roots.is_empty() {
        bail!("no usable folders configured; add one with `notecli folders add <PATH>`");
    }

    let folder = LogicalFolder::new(&args.folder);
    let note = create_note(&folder, &args.name, &roots)
        .with_context(|| format!("failed to create note in '{folder}'"))?;

    println!("Created: {}", note.path().display());

    if args.edit {
        editor.open(note.path())?;
    }
    Ok(note)
}

pub fn handle_new(args: &NewArgs, config: &Config, guard: &impl AccessGuard) -> Result<()> {
    handle_new_impl(args, config, guard, &SystemEditor::from_env()).map(|_| ())
}

pub fn handle_mkdir(args: &MkdirArgs, config: &Config, guard: &impl AccessGuard) -> Result<()> {
    let roots = permitted_roots(config, guard);
    let parent = LogicalFolder::new(&args.parent);
    let path = create_folder(&parent, &args.name, &roots)
        .with_context(|| format!("failed to create folder in '{parent}'"))?;

    println!("Created: {}", path.display());
    Ok(())
}

/// Handle the rm command - asks for the confirmation phrase on stdin.
pub fn handle_rm(args: &RmArgs, config: &Config, guard: &impl AccessGuard) -> Result<()> {
    let roots = permitted_roots(config, guard);
    let note = Note::new(&args.path);

    if !Prompter::stdio().delete_note(&note, &roots)? {
        bail!("note not deleted: {}", args.path.display());
    }
    Ok(())
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_open_impl<E: EditorLauncher>(path: &Path, editor: &E) -> Result<()> {
    if !has_note_extension(path) {
        bail!("not a note file: {}", path.display());
    }
    editor.open(path)?;
    Ok(())
}

pub fn handle_open(args: &OpenArgs) -> Result<()> {
    handle_open_impl(&args.path, &SystemEditor::from_env())
}
