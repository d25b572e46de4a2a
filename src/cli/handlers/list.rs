//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::{NO_NOTES, local_now, open_notebook, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{GroupListing, Notice, Output, OutputFormat};
use crate::domain::NoteGroup;
use crate::domain::stamp::date_key;

/// Heading shown for a group: "Today", the date itself, or "No Date".
pub(crate) fn group_label<'a>(date: &'a str, today: &str) -> &'a str {
    if date == today {
        "Today"
    } else if date.trim().is_empty() {
        "No Date"
    } else {
        date
    }
}

/// Builds listings for `groups` in sequence order.
pub(crate) fn build_listings(groups: &[NoteGroup], today: &str) -> Vec<GroupListing> {
    groups
        .iter()
        .map(|g| GroupListing::new(g, group_label(g.date(), today)))
        .collect()
}

pub fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let notebook = open_notebook(data_dir)?;
    let today = date_key(local_now());
    let listings = build_listings(notebook.groups(), &today);

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                Notice::info(NO_NOTES).print();
                return Ok(());
            }

            for group in &listings {
                println!("{}", group.label);
                for note in &group.notes {
                    let title = truncate_str(&note.title, 40);
                    println!("  {:<13}  {:<40}  {}", note.id, title, note.last_updated);
                }
                println!();
            }

            println!("{} note(s)", notebook.notes().len());
        }
        OutputFormat::Json => {
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
