//! Add command handler.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::Path;

use super::{NOTE_ADDED, local_now, open_notebook, report};
use crate::cli::AddArgs;
use crate::cli::output::{NoteListing, Notice};
use crate::domain::Note;
use crate::notebook::Notebook;

/// Adds the note described by `args`, dated `now`.
pub(crate) fn add_note(notebook: &mut Notebook, args: &AddArgs, now: NaiveDateTime) -> Result<Note> {
    let title = args.title.as_deref().unwrap_or("");
    notebook
        .add(title, &args.content, now)
        .with_context(|| "failed to add note")
}

pub fn handle_add(args: &AddArgs, data_dir: &Path) -> Result<()> {
    let mut notebook = open_notebook(data_dir)?;
    let note = add_note(&mut notebook, args, local_now())?;

    report(
        args.format,
        NoteListing::from(&note),
        Notice::success(NOTE_ADDED),
        |n| println!("Added: {} [{}]", n.title, n.id),
    )
}
