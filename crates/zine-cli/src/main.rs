//! Zines CLI Application
//!
//! Command-line front end for the zine archive: record browsing and editing,
//! CSV import, data cleaning and the reports.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use zine_core::{ArchiveBuilder, ListEvents};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let archive = ArchiveBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open archive")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Zine archive opened at {}", archive.database_path().display());

    let cli = Cli::new(archive, renderer);
    match command {
        Some(Init { reset }) => cli.init(reset).await,
        Some(Import(args)) => cli.import(args.into()).await,
        Some(Event { command }) => cli.handle_event_command(command).await,
        Some(Publication { command }) => cli.handle_publication_command(command).await,
        Some(Show(args)) => cli.show(args.into()).await,
        Some(Edit(args)) => cli.edit(args.into()).await,
        Some(Report { json, command }) => cli.handle_report_command(command, json).await,
        Some(Resources { command }) => cli.handle_resource_command(command).await,
        Some(Clean { command }) => cli.handle_clean_command(command).await,
        None => cli.list_events(&ListEvents::default()).await,
    }
}
