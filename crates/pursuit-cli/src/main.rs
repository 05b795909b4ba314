//! Pursuit CLI Application
//!
//! Command-line interface for the pursuit job-application tracker.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use pursuit_core::{display::OperationStatus, models::CompanyQuery, TrackerBuilder};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        no_color,
        command,
    } = Args::parse();

    let mut builder = TrackerBuilder::new().with_database_path(database_file);
    if let Some(user) = user {
        builder = builder.with_user(user);
    }
    let mut tracker = builder
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    // A failed load is shown and the session continues with an empty list
    if let Err(e) = tracker.load_all().await {
        let status = OperationStatus::failure(format!("Could not load companies: {e}"));
        renderer.render(&status.to_string())?;
    }

    info!("Pursuit started for user {}", tracker.user_id());
    let cli = Cli::new(tracker, renderer);

    match command {
        Some(Commands::Company { command }) => cli.handle_company_command(command).await,
        Some(Commands::Stage { command }) => cli.handle_stage_command(command).await,
        Some(Commands::Stats) => cli.show_statistics(),
        Some(Commands::Schedule) => cli.show_schedule(),
        None => cli.list_companies(&CompanyQuery::default()),
    }
}
