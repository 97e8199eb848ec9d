//! The subcommands, written against any reader and writer.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use story_core::{load, render_tree, Config};

use crate::editor::Editor;
use crate::prompt::Prompter;
use crate::session::Session;

/// Print the whole tree.
pub fn display<W: Write>(file: &Path, config: &Config, out: &mut W) -> Result<()> {
    let tree = load(file).with_context(|| format!("failed to load {}", file.display()))?;
    write!(out, "{}", render_tree(&tree, &config.display))?;
    Ok(())
}

/// Report deaths naming unregistered characters. Returns how many there are.
pub fn check<W: Write>(file: &Path, out: &mut W) -> Result<usize> {
    let tree = load(file).with_context(|| format!("failed to load {}", file.display()))?;
    let dangling = tree.dangling_deaths();

    for death in &dangling {
        writeln!(
            out,
            "{} route \"{}\" records a death for unknown character \"{}\"",
            "dangling:".yellow().bold(),
            death.route,
            death.id
        )?;
    }
    if dangling.is_empty() {
        writeln!(
            out,
            "{} {} characters, {} base routes",
            "ok:".green().bold(),
            tree.names.len(),
            tree.route_count()
        )?;
    }
    Ok(dangling.len())
}

/// Edit `file` interactively, then save. Returns the path written.
///
/// Without `output` the user is asked where to save once editing ends.
pub fn edit<R: BufRead, W: Write>(
    file: &Path,
    output: Option<PathBuf>,
    config: Config,
    prompter: Prompter<R, W>,
) -> Result<PathBuf> {
    let mut session = Session::open(file, config)
        .with_context(|| format!("failed to load {}", file.display()))?
        .with_output(output);

    let mut editor = Editor::new(&mut session, prompter);
    editor.run().context("editor input failed")?;
    let mut prompter = editor.into_prompter();

    let target = match session.output() {
        Some(path) => path.to_path_buf(),
        None => {
            let answer = prompter
                .ask("Input filename to save to: ")
                .context("no output file given")?;
            PathBuf::from(answer.trim())
        }
    };
    prompter.say("Saving file and exiting")?;
    session
        .save_to(&target)
        .with_context(|| format!("failed to save {}", target.display()))?;
    Ok(target)
}

/// Which subcommand `open` should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Display,
    Edit,
}

/// Ask whether to display or edit.
pub fn ask_open_mode<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<OpenMode> {
    loop {
        let answer = prompter
            .ask("1 to display file, 2 to edit: ")
            .context("no mode given")?;
        match answer.trim() {
            "1" | "d" | "display" => return Ok(OpenMode::Display),
            "2" | "e" | "edit" => return Ok(OpenMode::Edit),
            other => prompter.say(format!("unknown selection \"{}\"", other))?,
        }
    }
}
