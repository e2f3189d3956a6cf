//! notecli - browse and manage plain-text notes as a folder tree

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;
pub mod tree;
pub mod tui;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_folders, handle_mkdir, handle_new, handle_open, handle_rm, handle_tree},
};
use domain::FolderGuard;
use infra::logging::{self, LogConfig};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let browsing = matches!(cli.command, None | Some(Command::Browse));
    logging::init(LogConfig {
        verbose: cli.verbose > 0,
        tui_mode: browsing,
    });

    let config_path = Config::config_path(cli.config.as_deref());
    let mut config = Config::load_from(&config_path)?;
    let guard = FolderGuard::system();
    tracing::debug!(config = %config_path.display(), folders = config.folders.len(), "loaded config");

    match &cli.command {
        None | Some(Command::Browse) => tui::App::new(config, config_path).run(),
        Some(Command::Tree(args)) => handle_tree(args, &config, &guard),
        Some(Command::Folders(command)) => {
            handle_folders(command, &mut config, &config_path, &guard)
        }
        Some(Command::New(args)) => handle_new(args, &config, &guard),
        Some(Command::Mkdir(args)) => handle_mkdir(args, &config, &guard),
        Some(Command::Rm(args)) => handle_rm(args, &config, &guard),
        Some(Command::Open(args)) => handle_open(args),
        Some(Command::Completions(args)) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "notecli", &mut std::io::stdout());
            Ok(())
        }
    }
}
