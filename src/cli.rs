use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tasklist", about = "Today's tasks, with subtasks", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, env = "TASKLIST_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Write logs to files in this directory
    #[arg(long, env = "TASKLIST_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Launch the interactive task screen
    Screen,

    /// Apply newline-separated steps from stdin and print the resulting views
    Exec {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
