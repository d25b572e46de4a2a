//! Command handlers for the CLI.

mod add;
mod list;
mod remove;
mod show_edit;


use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::CommandFactory;
use serde::Serialize;
use std::path::Path;

use crate::cli::output::{Notice, Output, OutputFormat};
use crate::cli::{Cli, CompletionsArgs};
use crate::infra::NoteStore;
use crate::notebook::Notebook;

// Re-export public items
pub use add::handle_add;
pub use list::handle_list;
pub use remove::{handle_clear, handle_remove};
pub use show_edit::{handle_edit, handle_show, handle_update};

// Re-export for tests
#[cfg(test)]
pub(crate) use add::add_note;
#[cfg(test)]
pub(crate) use list::{build_listings, group_label};
#[cfg(test)]
pub(crate) use show_edit::{EditOutcome, EditorLauncher, handle_edit_impl, merge_update};

pub(crate) const NOTE_ADDED: &str = "Note added successfully";
pub(crate) const NOTE_UPDATED: &str = "Note updated successfully";
pub(crate) const NOTE_DELETED: &str = "Note deleted successfully";
pub(crate) const NOTES_CLEARED: &str = "Notes cleared";
pub(crate) const NO_NOTES: &str = "No notes available";

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the notebook stored in `data_dir`.
pub(crate) fn open_notebook(data_dir: &Path) -> Result<Notebook> {
    let store = NoteStore::in_dir(data_dir);
    let path = store.path().to_path_buf();
    Notebook::open(store).with_context(|| format!("failed to load notes from {}", path.display()))
}

/// Current local wall-clock time.
pub(crate) fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Writes a command result in the requested format.
///
/// Human output runs `human` and then prints the notice; JSON output wraps
/// the data and notice in an [`Output`].
pub(crate) fn report<T: Serialize>(
    format: OutputFormat,
    data: T,
    notice: Notice,
    human: impl FnOnce(&T),
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            human(&data);
            notice.print();
        }
        OutputFormat::Json => {
            let output = Output::new(data).with_notice(notice);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
