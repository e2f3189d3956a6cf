//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notecli - browse and manage plain-text notes as a folder tree
#[derive(Parser, Debug)]
#[command(name = "notecli", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/notecli/config.json)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse notes interactively (the default)
    Browse,

    /// Print the folder tree once
    Tree(TreeArgs),

    /// List, add or remove search folders
    #[command(subcommand)]
    Folders(FoldersCommand),

    /// Create a new note in a folder
    New(NewArgs),

    /// Create a folder inside another folder
    Mkdir(MkdirArgs),

    /// Delete a note (asks for confirmation)
    Rm(RmArgs),

    /// Open a note in your editor
    Open(OpenArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `tree` command
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Filter folders and notes by substring (case-insensitive)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Show every folder expanded
    #[arg(short = 'a', long)]
    pub expand_all: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum FoldersCommand {
    /// List configured folders
    #[command(name = "list", alias = "ls")]
    List,

    /// Add a folder to search
    Add(FolderAddArgs),

    /// Remove a folder by its number in `folders list`
    #[command(alias = "rm")]
    Remove(FolderRemoveArgs),
}

/// Arguments for `folders add`
#[derive(Parser, Debug)]
pub struct FolderAddArgs {
    /// Directory to add (`~` is expanded)
    pub path: String,
}

/// Arguments for `folders remove`
#[derive(Parser, Debug)]
pub struct FolderRemoveArgs {
    /// 1-based folder number
    pub number: usize,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Folder relative to a root ("." for the root itself)
    pub folder: String,

    /// Note name (".md" is added unless it ends in .md or .txt)
    pub name: String,

    /// Open the note in your editor after creating it
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `mkdir` command
#[derive(Parser, Debug)]
pub struct MkdirArgs {
    /// Parent folder relative to a root ("." for the root itself)
    pub parent: String,

    /// Name of the new folder
    pub name: String,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Path to the note file
    pub path: PathBuf,
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Path to the note file
    pub path: PathBuf,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
