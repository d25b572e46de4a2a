//! Single-file JSON persistence for the note collection, with atomic writes.

use crate::domain::NoteGroup;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Fixed name of the notes file inside the data directory.
pub const NOTES_FILE_NAME: &str = "notesData.json";

/// Errors from loading, saving, or clearing the notes file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("notes file is corrupt: {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read notes file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write notes file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no notes file to clear: {path}")]
    NotFound { path: PathBuf },
}

/// Durable storage of the whole note collection as one JSON array.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by [`NOTES_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(NOTES_FILE_NAME))
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every persisted group.
    ///
    /// A missing file is an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file exists but cannot be read.
    /// Returns `StoreError::Corrupt` if the contents are not a valid group array.
    pub fn load(&self) -> Result<Vec<NoteGroup>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no notes file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let groups: Vec<NoteGroup> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %self.path.display(), groups = groups.len(), "loaded notes");
        Ok(groups)
    }

    /// Replaces the persisted collection with `groups`.
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so readers see either the old or the new file. Missing
    /// parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` on any I/O failure.
    pub fn save(&self, groups: &[NoteGroup]) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(write_err)?;

        let bytes = serde_json::to_vec(groups).map_err(|e| write_err(io::Error::other(e)))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
        temp.write_all(&bytes).map_err(write_err)?;
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(&self.path).map_err(|e| write_err(e.error))?;

        tracing::debug!(path = %self.path.display(), groups = groups.len(), "saved notes");
        Ok(())
    }

    /// Deletes the persisted file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no file to delete.
    /// Returns `StoreError::Write` on any other I/O failure.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cleared notes");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound {
                path: self.path.clone(),
            }),
            Err(e) => Err(StoreError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
