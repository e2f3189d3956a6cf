//! Interactive tree browser.

pub mod keys;
pub mod prompts;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use std::io::{self, Stdout};
use std::path::PathBuf;

use crate::cli::config::Config;
use crate::domain::FolderGuard;
use crate::index::Catalog;
use crate::infra::{EditorLauncher, SystemEditor};
use crate::tree::{ExpandedSet, Intent, Session};
use prompts::Prompter;
use ui::Status;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// The tree browser and everything it needs between frames.
pub struct App<E: EditorLauncher> {
    config: Config,
    config_path: PathBuf,
    guard: FolderGuard,
    editor: E,
    session: Session,
    status: Option<Status>,
    list_state: ListState,
}

impl App<SystemEditor> {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self::with_parts(config, config_path, SystemEditor::from_env(), FolderGuard::system())
    }
}

impl<E: EditorLauncher> App<E> {
    pub fn with_parts(config: Config, config_path: PathBuf, editor: E, guard: FolderGuard) -> Self {
        let catalog = Catalog::load(&config.folders, &guard);
        let status = warning_status(&catalog);
        Self {
            config,
            config_path,
            guard,
            editor,
            session: Session::new(catalog, ExpandedSet::default()),
            status,
            list_state: ListState::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Term) -> Result<()> {
        loop {
            terminal
                .draw(|frame| {
                    ui::draw(frame, &self.session, self.status.as_ref(), &mut self.list_state)
                })
                .context("rendering frame")?;

            let Event::Key(key) = event::read().context("reading terminal event")? else {
                continue;
            };
            let Some(command) = keys::command_for(key) else {
                continue;
            };
            match self.session.handle(command) {
                None => {}
                Some(Intent::Quit) => return Ok(()),
                Some(intent) => {
                    restore_terminal(terminal)?;
                    self.status = match self.perform(intent) {
                        Ok(status) => status,
                        Err(err) => {
                            let message = format!("{err:#}");
                            tracing::warn!(error = %message, "action failed");
                            Some(Status::Error(format!("✗ {message}")))
                        }
                    };
                    self.reload();
                    resume_terminal(terminal)?;
                }
            }
        }
    }

    /// Carries out an intent while the terminal is in normal mode.
    fn perform(&mut self, intent: Intent) -> Result<Option<Status>> {
        let roots = self.session.catalog().roots().to_vec();
        let mut prompter = Prompter::stdio();
        execute!(io::stdout(), Clear(ClearType::All)).context("clearing screen")?;

        let status = match intent {
            Intent::OpenNote(note) => {
                self.editor.open(note.path())?;
                None
            }
            Intent::CreateNote(folder) => match prompter.create_note(&folder, &roots)? {
                Some(note) => {
                    prompter.say("Opening file in editor...")?;
                    self.editor.open(note.path())?;
                    Some(Status::Info(format!("✓ Created {}", note.name())))
                }
                None => None,
            },
            Intent::CreateFolder(parent) => prompter
                .create_folder(&parent, &roots)?
                .map(|path| Status::Info(format!("✓ Created folder {}", path.display()))),
            Intent::DeleteNote(note) => {
                if prompter.delete_note(&note, &roots)? {
                    Some(Status::Info(format!("✓ Deleted {}", note.name())))
                } else {
                    Some(Status::Warning("Deletion cancelled.".to_string()))
                }
            }
            Intent::ManageFolders => {
                prompter.manage_folders(&mut self.config, &self.config_path, &self.guard)?;
                Some(Status::Info("✓ Configuration updated.".to_string()))
            }
            Intent::Help => {
                prompter.help()?;
                None
            }
            Intent::Quit => None,
        };
        Ok(status)
    }

    /// Rescans the roots and rebuilds the session, keeping expanded folders.
    fn reload(&mut self) {
        let catalog = Catalog::load(&self.config.folders, &self.guard);
        if self.status.is_none() {
            self.status = warning_status(&catalog);
        }
        self.session.refresh(catalog);
    }
}

/// Summarizes scan warnings for the status line.
fn warning_status(catalog: &Catalog) -> Option<Status> {
    let (first, rest) = catalog.warnings().split_first()?;
    let text = if rest.is_empty() {
        format!("Warning: {first}")
    } else {
        format!("Warning: {first} (+{} more)", rest.len())
    };
    Some(Status::Warning(text))
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("switching to alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("creating terminal backend")
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    terminal.show_cursor().ok();
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("restoring screen state")?;
    Ok(())
}

fn resume_terminal(terminal: &mut Term) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)
        .context("switching to alternate screen")?;
    terminal.clear().context("clearing terminal")
}
