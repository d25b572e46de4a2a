//! Remove and Clear command handlers.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use super::{NOTE_DELETED, NOTES_CLEARED, open_notebook, report};
use crate::cli::output::{NoteListing, Notice};
use crate::cli::{ClearArgs, RemoveArgs};
use crate::infra::NoteStore;

/// Result of clearing the notes file.
#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub path: String,
}

pub fn handle_remove(args: &RemoveArgs, data_dir: &Path) -> Result<()> {
    let mut notebook = open_notebook(data_dir)?;
    let removed = notebook
        .delete(args.id)
        .with_context(|| "failed to delete note")?;

    report(
        args.format,
        NoteListing::from(&removed),
        Notice::success(NOTE_DELETED),
        |n| println!("Deleted: {} [{}]", n.title, n.id),
    )
}

/// Deletes the notes file without loading it, so a corrupt file can still
/// be cleared.
pub fn handle_clear(args: &ClearArgs, data_dir: &Path) -> Result<()> {
    let store = NoteStore::in_dir(data_dir);
    store.clear().with_context(|| "failed to clear notes")?;

    report(
        args.format,
        ClearResult {
            path: store.path().to_string_lossy().to_string(),
        },
        Notice::success(NOTES_CLEARED),
        |_| {},
    )
}
