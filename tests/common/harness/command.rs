//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `notecli` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NoteCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
    editor: Option<String>,
    stdin: Option<String>,
}

impl NoteCommand {
    /// Creates a new command for the `notecli` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
            editor: None,
            stdin: None,
        }
    }

    /// Sets `--config` to the given file.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Runs the binary with `HOME` (and the XDG dirs) pointing at `path`.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Sets `$EDITOR` for the child process.
    pub fn editor(mut self, editor: &str) -> Self {
        self.editor = Some(editor.to_string());
        self
    }

    /// Feeds `input` to the child's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notecli").expect("Failed to find notecli binary");
        cmd.args(&self.args)
            .env_remove("RUST_LOG")
            .env_remove("VISUAL")
            .env("NO_COLOR", "1");
        if let Some(home) = &self.home {
            cmd.env("HOME", home)
                .env("XDG_CONFIG_HOME", home.join(".config"))
                .env("XDG_DATA_HOME", home.join(".local/share"));
        }
        match &self.editor {
            Some(editor) => cmd.env("EDITOR", editor),
            None => cmd.env_remove("EDITOR"),
        };
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `tree` command.
    pub fn tree(self) -> Self {
        self.args(["tree"])
    }

    /// Configures for `folders list`.
    pub fn folders_list(self) -> Self {
        self.args(["folders", "list"])
    }

    /// Configures for `folders add PATH`.
    pub fn folders_add(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args(["folders", "add", path.as_str()])
    }

    /// Configures for `folders remove N`.
    pub fn folders_remove(self, number: usize) -> Self {
        let number = number.to_string();
        self.args(["folders", "remove", number.as_str()])
    }

    /// Configures for `new FOLDER NAME`.
    pub fn new_note(self, folder: &str, name: &str) -> Self {
        self.args(["new", folder, name])
    }

    /// Configures for `mkdir PARENT NAME`.
    pub fn mkdir(self, parent: &str, name: &str) -> Self {
        self.args(["mkdir", parent, name])
    }

    /// Configures for `rm PATH`.
    pub fn rm(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args(["rm", path.as_str()])
    }

    // ===========================================
    // Tree Options
    // ===========================================

    /// Adds `--expand-all`.
    pub fn expand_all(self) -> Self {
        self.args(["--expand-all"])
    }

    /// Adds `--query QUERY`.
    pub fn query(self, query: &str) -> Self {
        self.args(["--query", query])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for NoteCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ===========================================
    // NoteCommand Basics
    // ===========================================

    #[test]
    fn test_command_runs_binary() {
        NoteCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_config() {
        let temp = TempDir::new().unwrap();
        let cmd = NoteCommand::new().config(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = NoteCommand::new().args(["--help"]).output_success();
        assert!(output.contains("notecli") || output.contains("notes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NoteCommand::new().tree().expand_all().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"tree".to_string()));
        assert!(args.contains(&"--expand-all".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
