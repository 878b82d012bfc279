//! # menu CLI entry point
//!
//! Parses arguments and dispatches to subcommand handlers. The state
//! file is resolved once here (flag, else the platform data dir) and
//! handed to each command as an explicit store.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use menu_cli::edit::{
    run_add, run_date, run_lang, run_remove, run_reset, run_set, run_show, AddArgs, DateArgs,
    LangArgs, RemoveArgs, SetArgs,
};
use menu_cli::publish::{run_publish, PublishArgs};
use menu_cli::render::{run_pdf, PdfArgs};
use menu_core::MenuStore;

/// Generador de menús — El Reino de Drácula
///
/// Edits the daily menu, renders it as a printable PDF, and publishes
/// it to the website through the menu proxy.
#[derive(Parser, Debug)]
#[command(name = "menu", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the menu state file.
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the current menu state.
    Show,

    /// Set the menu language.
    Lang(LangArgs),

    /// Select or clear the menu date.
    Date(DateArgs),

    /// Append a course to a section.
    Add(AddArgs),

    /// Replace the course name at an index.
    Set(SetArgs),

    /// Remove the course at an index.
    Remove(RemoveArgs),

    /// Restore both sections to one empty course and clear the date.
    Reset,

    /// Render the menu as a printable PDF.
    Pdf(PdfArgs),

    /// Render the document, then publish the menu to the CMS.
    Publish(PublishArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let store = match resolve_store(cli.state_file) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{e:#}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(state_file = %store.path().display(), "resolved state file");

    let result = match cli.command {
        Commands::Show => run_show(&store),
        Commands::Lang(args) => run_lang(&args, &store),
        Commands::Date(args) => run_date(&args, &store),
        Commands::Add(args) => run_add(&args, &store),
        Commands::Set(args) => run_set(&args, &store),
        Commands::Remove(args) => run_remove(&args, &store),
        Commands::Reset => run_reset(&store),
        Commands::Pdf(args) => run_pdf(&args, &store),
        Commands::Publish(args) => run_publish(&args, &store).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn resolve_store(state_file: Option<PathBuf>) -> anyhow::Result<MenuStore> {
    match state_file {
        Some(path) => Ok(MenuStore::new(path)),
        None => Ok(MenuStore::at_default_path()?),
    }
}
