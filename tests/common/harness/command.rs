//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `daybook` binary.
pub struct DaybookCommand {
    args: Vec<String>,
    envs: Vec<(String, OsString)>,
}

impl DaybookCommand {
    /// Creates a new command for the `daybook` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--data-dir` option.
    pub fn data_dir(mut self, path: &Path) -> Self {
        self.args.push("--data-dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets an environment variable for the spawned process.
    pub fn env(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.envs.push((key.to_string(), value.into()));
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
        let mut cmd = Command::cargo_bin("daybook").expect("Failed to find daybook binary");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
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

    /// Configures for the `add` command with a title.
    pub fn add(self, title: &str) -> Self {
        self.args(["add", title])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command with an ID.
    pub fn show(self, id: impl ToString) -> Self {
        self.args(["show".to_string(), id.to_string()])
    }

    /// Configures for the `update` command with an ID.
    pub fn update(self, id: impl ToString) -> Self {
        self.args(["update".to_string(), id.to_string()])
    }

    /// Configures for the `edit` command with an ID.
    pub fn edit(self, id: impl ToString) -> Self {
        self.args(["edit".to_string(), id.to_string()])
    }

    /// Configures for the `rm` command with an ID.
    pub fn rm(self, id: impl ToString) -> Self {
        self.args(["rm".to_string(), id.to_string()])
    }

    /// Configures for the `clear` command.
    pub fn clear(self) -> Self {
        self.args(["clear"])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--content <text>` to the command.
    pub fn content(self, text: &str) -> Self {
        self.args(["--content", text])
    }

    /// Adds `--title <text>` to the command.
    pub fn title(self, text: &str) -> Self {
        self.args(["--title", text])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for DaybookCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_with_data_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = DaybookCommand::new().data_dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--data-dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = DaybookCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"ls".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
