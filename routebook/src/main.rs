use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use routebook::{ask_open_mode, check, display, edit, OpenMode, Prompter};
use story_core::Config;

const DEFAULT_CONFIG: &str = "routebook.toml";

#[derive(Debug, Parser)]
#[command(name = "routebook", version)]
#[command(about = "View and edit branching story route trees")]
struct Args {
    /// Settings file (TOML); defaults to ./routebook.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every route with its accumulated deaths and events
    Display {
        file: PathBuf,
    },
    /// Edit a route file through menus, then save it
    Edit {
        file: PathBuf,
        /// Where to save; asked for at the end when omitted
        output: Option<PathBuf>,
    },
    /// Report deaths that name unregistered characters
    Check {
        file: PathBuf,
    },
    /// Ask whether to display or edit
    Open {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(DEFAULT_CONFIG),
    }
    .context("failed to read settings")?;

    if args.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    match args.command {
        Command::Display { file } => display(&file, &config, &mut io::stdout().lock()),
        Command::Edit { file, output } => run_editor(file, output, config),
        Command::Check { file } => {
            let dangling = check(&file, &mut io::stdout().lock())?;
            if dangling > 0 {
                bail!("{} dangling character reference(s) in {}", dangling, file.display());
            }
            Ok(())
        }
        Command::Open { file } => {
            // Released before the editor locks stdin again.
            let mode = {
                let stdin = io::stdin();
                let mut prompter = Prompter::new(stdin.lock(), io::stdout());
                ask_open_mode(&mut prompter)?
            };
            match mode {
                OpenMode::Display => display(&file, &config, &mut io::stdout().lock()),
                OpenMode::Edit => run_editor(file, None, config),
            }
        }
    }
}

fn run_editor(file: PathBuf, output: Option<PathBuf>, config: Config) -> Result<()> {
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let saved = edit(&file, output, config, prompter)?;
    log::info!("wrote {}", saved.display());
    io::stdout().flush()?;
    Ok(())
}
