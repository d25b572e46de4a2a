//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::NoteId;
use output::OutputFormat;

/// daybook - short notes filed by the day they were written
#[derive(Parser, Debug)]
#[command(name = "daybook", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the notes file (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note under today's date
    Add(AddArgs),

    /// List notes grouped by date
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note
    Show(ShowArgs),

    /// Replace a note's title and/or content
    Update(UpdateArgs),

    /// Edit a note's content in your editor
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Delete the notes file and every note in it
    Clear(ClearArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title ("Untitled" if omitted or blank)
    pub title: Option<String>,

    /// Note content
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Note ID
    pub id: NoteId,

    /// New title (kept if omitted; "Untitled" if blank)
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content (kept if omitted)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID
    pub id: NoteId,

    /// New title (kept if omitted)
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note ID
    pub id: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `clear` command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
