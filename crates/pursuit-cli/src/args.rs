use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompanyCommands, StageCommands};

/// Track job applications and their selection stages
///
/// Pursuit keeps every company you applied to, the interview stages each
/// application goes through, and the portal credentials you used. Changes
/// are applied locally first and then written to the store; a failed write
/// is reported as a warning and never undone.
#[derive(Parser)]
#[command(version, about, name = "pursuit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pursuit/pursuit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// User whose applications are loaded and created. Defaults to "local"
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the company list is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage companies
    #[command(alias = "c")]
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },
    /// Manage the selection stages of a company
    #[command(alias = "s")]
    Stage {
        #[command(subcommand)]
        command: StageCommands,
    },
    /// Show application statistics
    Stats,
    /// Show stage counts and upcoming stages for the next seven days
    #[command(alias = "sched")]
    Schedule,
}
