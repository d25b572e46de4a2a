//! daybook - short notes grouped by the day they were written

pub mod cli;
pub mod domain;
pub mod infra;
pub mod notebook;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_clear, handle_completions, handle_edit, handle_list, handle_remove,
        handle_show, handle_update,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_ref());
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    match &cli.command {
        Command::Add(args) => handle_add(args, &data_dir),
        Command::List(args) => handle_list(args, &data_dir),
        Command::Show(args) => handle_show(args, &data_dir),
        Command::Update(args) => handle_update(args, &data_dir),
        Command::Edit(args) => handle_edit(args, &data_dir, &config),
        Command::Remove(args) => handle_remove(args, &data_dir),
        Command::Clear(args) => handle_clear(args, &data_dir),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs a stderr log subscriber. `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daybook={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
