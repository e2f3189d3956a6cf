//! Handler for the `folders` command.

use anyhow::Result;
use std::path::Path;

use crate::cli::FoldersCommand;
use crate::cli::config::{AddOutcome, Config};
use crate::cli::output::FolderListing;
use crate::domain::AccessGuard;

/// Numbered listing of the configured folders.
pub(crate) fn folder_listing(config: &Config) -> Vec<FolderListing> {
    config
        .folders
        .iter()
        .enumerate()
        .map(|(i, path)| FolderListing {
            number: i + 1,
            path: path.clone(),
        })
        .collect()
}

/// Handle the folders command - list, add or remove search folders.
pub fn handle_folders(
    command: &FoldersCommand,
    config: &mut Config,
    config_path: &Path,
    guard: &impl AccessGuard,
) -> Result<()> {
    match command {
        FoldersCommand::List => {
            let listing = folder_listing(config);
            if listing.is_empty() {
                println!("No folders configured.");
                println!();
                println!("Add one with: notecli folders add <PATH>");
            }
            for entry in listing {
                println!("{}: {}", entry.number, entry.path.display());
            }
        }
        FoldersCommand::Add(args) => match config.add_folder(&args.path, guard)? {
            AddOutcome::Added(path) => {
                config.save_to(config_path)?;
                println!("Added: {}", path.display());
            }
            AddOutcome::AlreadyPresent(path) => {
                println!("Already configured: {}", path.display());
            }
        },
        FoldersCommand::Remove(args) => {
            let removed = config.remove_folder(args.number)?;
            config.save_to(config_path)?;
            println!("Removed: {}", removed.display());
        }
    }
    Ok(())
}
