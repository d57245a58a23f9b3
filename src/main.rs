mod cli;

use std::io::{IsTerminal, Read as _};

use anyhow::{bail, Result};
use clap::Parser;

use cli::{Cli, Command};
use tasklist::logging::{self, Sink};
use tasklist::{output, script, tui, TaskList};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let sink = match (&cli.log_dir, &cli.command) {
        (Some(dir), _) => Sink::File(dir),
        (None, Command::Exec { .. }) => Sink::Stderr,
        (None, Command::Screen) => Sink::Off,
    };
    let _logger = logging::init(&cli.log_level, sink)?;

    match cli.command {
        Command::Screen => {
            tui::run(TaskList::new())?;
        }

        Command::Exec { json } => {
            if std::io::stdin().is_terminal() {
                bail!("exec reads steps from stdin; pipe them in");
            }
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            let mut list = TaskList::new();
            let applied = script::run(&mut list, &input)?;
            log::info!("exec: applied {applied} steps");
            if json {
                println!("{}", serde_json::to_string_pretty(&list.snapshot())?);
            } else {
                print!("{}", output::format_views(&list));
            }
        }
    }

    Ok(())
}
