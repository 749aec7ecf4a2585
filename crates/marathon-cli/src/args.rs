use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::PlanCommands;

/// Command-line interface for the marathon training planner
///
/// Generates 18-week marathon training plans that build to a peak week and
/// taper into race day, and keeps them in a local SQLite database.
#[derive(Parser)]
#[command(version, about, name = "marathon")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/marathon/marathon.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User whose plans are created, listed and modified
    #[arg(long, global = true, env = "MARATHON_USER", default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the acting user's plans are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage training plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
