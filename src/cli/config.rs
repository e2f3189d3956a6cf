//! Configuration file support.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::AccessGuard;
use crate::domain::safety::resolve;
use crate::index::{Root, expand_tilde};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root directories searched for notes, in priority order
    #[serde(default)]
    pub folders: Vec<PathBuf>,
}

/// Why a folder could not be added or removed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FolderError {
    #[error("no path provided")]
    EmptyPath,

    #[error("folder '{}' is not safe to access", .0.display())]
    Unsafe(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid folder number: {0}")]
    InvalidIndex(usize),
}

/// Result of adding a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(PathBuf),
    AlreadyPresent(PathBuf),
}

impl Config {
    /// Load configuration from an explicit file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Write configuration atomically, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory: {}", dir.display()))?;

        let json = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .context("failed to write config")?;
        temp.persist(config_path)
            .with_context(|| format!("failed to save config file: {}", config_path.display()))?;

        tracing::info!(path = %config_path.display(), folders = self.folders.len(), "saved config");
        Ok(())
    }

    /// Returns the path to the config file.
    ///
    /// Default: `<config_dir>/notecli/config.json`
    pub fn config_path(override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => path.to_path_buf(),
            None => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("notecli")
                .join("config.json"),
        }
    }

    /// Configured folders resolved into roots, in order.
    pub fn roots(&self) -> Vec<Root> {
        self.folders.iter().map(|f| Root::resolve(f)).collect()
    }

    /// Adds a folder after expanding `~` and checking it with `guard`.
    ///
    /// The folder is stored in resolved form; adding it twice reports
    /// [`AddOutcome::AlreadyPresent`] without changing the list.
    pub fn add_folder(&mut self, raw: &str, guard: &impl AccessGuard) -> Result<AddOutcome, FolderError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FolderError::EmptyPath);
        }
        let expanded = expand_tilde(Path::new(raw));
        if !expanded.is_dir() {
            return Err(FolderError::NotADirectory(expanded));
        }
        if !guard.permits(&expanded) {
            return Err(FolderError::Unsafe(expanded));
        }

        let resolved = resolve(&expanded);
        if self.folders.contains(&resolved) {
            return Ok(AddOutcome::AlreadyPresent(resolved));
        }
        self.folders.push(resolved.clone());
        Ok(AddOutcome::Added(resolved))
    }

    /// Removes the folder at a 1-based position.
    pub fn remove_folder(&mut self, number: usize) -> Result<PathBuf, FolderError> {
        if number == 0 || number > self.folders.len() {
            return Err(FolderError::InvalidIndex(number));
        }
        Ok(self.folders.remove(number - 1))
    }
}
