//! Marathon planner CLI
//!
//! Command-line front end for generating and managing marathon training
//! plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use marathon_core::PlannerBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!(
        "Marathon planner started for user '{user}' with database {}",
        planner.database_path().display()
    );

    let cli = Cli::new(planner, renderer, user);
    match command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        None => cli.list_plans().await,
    }
}
