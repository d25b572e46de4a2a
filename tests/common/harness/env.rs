//! Isolated test environment with temp directories.

use super::DaybookCommand;
use chrono::NaiveDateTime;
use daybook::domain::{Note, NoteGroup};
use daybook::infra::{NOTES_FILE_NAME, NoteStore};
use daybook::notebook::Notebook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// The home directory used by spawned commands also lives under the temp
/// directory so that no real config file is picked up.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home directory");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            home_dir,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the notes file.
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILE_NAME)
    }

    /// Adds a note through the library, as if created at `now`.
    pub fn add_note(&self, title: &str, content: &str, now: NaiveDateTime) -> Note {
        let mut notebook = self.notebook();
        notebook
            .add(title, content, now)
            .expect("Failed to add test note")
    }

    /// Opens the notebook stored in this environment.
    pub fn notebook(&self) -> Notebook {
        Notebook::open(NoteStore::in_dir(&self.data_dir)).expect("Failed to open notebook")
    }

    /// Reads the persisted groups.
    pub fn groups(&self) -> Vec<NoteGroup> {
        NoteStore::in_dir(&self.data_dir)
            .load()
            .expect("Failed to load notes file")
    }

    /// Writes raw text to the notes file.
    pub fn write_notes_file(&self, content: &str) {
        std::fs::write(self.notes_path(), content).expect("Failed to write notes file");
    }

    /// Writes an executable shell script and returns its path.
    #[cfg(unix)]
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.home_dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        let mut perms = std::fs::metadata(&path).expect("script metadata").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    /// Creates a DaybookCommand configured for this test environment.
    pub fn cmd(&self) -> DaybookCommand {
        DaybookCommand::new()
            .data_dir(&self.data_dir)
            .env("HOME", &self.home_dir)
            .env("XDG_CONFIG_HOME", self.home_dir.join(".config"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
