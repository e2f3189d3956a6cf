//! Isolated test environment with a temporary home directory.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use super::NoteCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// The temp directory acts as `HOME`, so the folder guard accepts the notes
/// directory and the log file lands inside it. It is cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    home: PathBuf,
    notes_dir: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates an environment whose config lists one empty notes folder.
    pub fn new() -> Self {
        let env = Self::unconfigured();
        env.write_config(&[env.notes_dir()]);
        env
    }

    /// Creates an environment with a notes directory but no config file.
    pub fn unconfigured() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to resolve temp directory");
        let notes_dir = home.join("notes");
        fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        let config_path = home.join(".config").join("notecli").join("config.json");
        Self {
            _temp_dir: temp_dir,
            home,
            notes_dir,
            config_path,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns a path inside the notes directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.notes_dir.join(relative)
    }

    /// Writes a config file listing `folders`.
    pub fn write_config(&self, folders: &[&Path]) {
        let config = serde_json::json!({ "folders": folders });
        fs::create_dir_all(self.config_path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&self.config_path, config.to_string()).expect("Failed to write config");
    }

    /// Reads back the configured folders.
    pub fn configured_folders(&self) -> Vec<PathBuf> {
        let text = fs::read_to_string(&self.config_path).expect("Failed to read config");
        let value: serde_json::Value = serde_json::from_str(&text).expect("Invalid config JSON");
        value["folders"]
            .as_array()
            .expect("folders should be an array")
            .iter()
            .map(|v| PathBuf::from(v.as_str().expect("folder should be a string")))
            .collect()
    }

    /// Adds an empty note at `relative`, creating parent folders.
    pub fn add_note(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create note folder");
        fs::write(&path, "").expect("Failed to write test note");
        path
    }

    /// Adds an empty folder at `relative`.
    pub fn add_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("Failed to create folder");
        path
    }

    /// Creates a NoteCommand configured for this test environment.
    pub fn cmd(&self) -> NoteCommand {
        NoteCommand::new().home(&self.home).config(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_writes_config_with_notes_dir() {
        let env = TestEnv::new();
        assert_eq!(env.configured_folders(), vec![env.notes_dir().to_path_buf()]);
    }

    #[test]
    fn test_env_unconfigured_has_no_config() {
        let env = TestEnv::unconfigured();
        assert!(!env.config_path().exists());
        assert!(env.notes_dir().is_dir());
    }

    #[test]
    fn test_add_note_creates_parents() {
        let env = TestEnv::new();
        let path = env.add_note("a/b/c.md");
        assert!(path.is_file());
    }
}
