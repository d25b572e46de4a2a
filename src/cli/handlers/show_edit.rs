//! Show, Update and Edit command handlers.

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDateTime;
use std::io::Write as IoWrite;
use std::path::Path;
use std::process::Command;

use super::{NOTE_UPDATED, local_now, open_notebook, report};
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Notice, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs, UpdateArgs};
use crate::domain::Note;

pub fn handle_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
    let notebook = open_notebook(data_dir)?;
    let note = notebook
        .find(args.id)
        .ok_or_else(|| anyhow!("note not found: {}", args.id))?;
    let group_date = notebook
        .notes()
        .group_of(args.id)
        .map(|g| g.date().to_string())
        .unwrap_or_default();

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();
            println!(
                "ID: {}  Filed: {}  Updated: {}",
                note.id(),
                group_date,
                note.last_updated()
            );
            println!();
            if !note.content().is_empty() {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Resolves the title and content for an update, keeping current values for
/// fields not given. Returns `None` when neither field was given.
pub(crate) fn merge_update(note: &Note, args: &UpdateArgs) -> Option<(String, String)> {
    if args.title.is_none() && args.content.is_none() {
        return None;
    }
    let title = args.title.as_deref().unwrap_or(note.title()).to_string();
    let content = args.content.as_deref().unwrap_or(note.content()).to_string();
    Some((title, content))
}

pub fn handle_update(args: &UpdateArgs, data_dir: &Path) -> Result<()> {
    let mut notebook = open_notebook(data_dir)?;
    let current = notebook
        .find(args.id)
        .ok_or_else(|| anyhow!("note not found: {}", args.id))?;

    let Some((title, content)) = merge_update(current, args) else {
        Notice::warning("nothing to update; pass --title and/or --content").print();
        return Ok(());
    };

    let note = notebook
        .update(args.id, &title, &content, local_now())
        .with_context(|| "failed to update note")?;

    report(
        args.format,
        NoteListing::from(&note),
        Notice::success(NOTE_UPDATED),
        |n| println!("Updated: {} [{}]", n.title, n.id),
    )
}

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// What an edit session did to the note.
#[derive(Debug)]
pub(crate) enum EditOutcome {
    Updated(Note),
    Unchanged(Note),
}

/// Opens the note's content in `editor` through a scratch file and saves the
/// result if anything changed.
pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    args: &EditArgs,
    data_dir: &Path,
    editor: &E,
    now: NaiveDateTime,
) -> Result<EditOutcome> {
    let mut notebook = open_notebook(data_dir)?;
    let current = notebook
        .find(args.id)
        .cloned()
        .ok_or_else(|| anyhow!("note not found: {}", args.id))?;

    let mut scratch = tempfile::Builder::new()
        .prefix("daybook-")
        .suffix(".txt")
        .tempfile()
        .with_context(|| "failed to create scratch file for editing")?;
    scratch
        .write_all(current.content().as_bytes())
        .and_then(|()| scratch.flush())
        .with_context(|| "failed to write scratch file for editing")?;

    editor.open(scratch.path())?;

    let content = std::fs::read_to_string(scratch.path())
        .with_context(|| "failed to read edited content")?;
    let title = args.title.as_deref().unwrap_or(current.title());

    if content == current.content() && title == current.title() {
        return Ok(EditOutcome::Unchanged(current));
    }

    let note = notebook
        .update(args.id, title, &content, now)
        .with_context(|| "failed to update note")?;
    Ok(EditOutcome::Updated(note))
}

/// Opens a file in the user's configured editor.
fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // Editor command may include args, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let Some(cmd) = parts.next() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path, config: &Config) -> Result<()> {
    struct RealEditor<'a>(&'a Config);
    impl EditorLauncher for RealEditor<'_> {
        fn open(&self, path: &Path) -> Result<()> {
            open_in_editor(path, self.0)
        }
    }

    match handle_edit_impl(args, data_dir, &RealEditor(config), local_now())? {
        EditOutcome::Updated(note) => {
            println!("Edited: {} [{}]", note.title(), note.id());
            Notice::success(NOTE_UPDATED).print();
        }
        EditOutcome::Unchanged(note) => {
            Notice::info(format!("No changes to {}", note)).print();
        }
    }
    Ok(())
}
