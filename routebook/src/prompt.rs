//! Line-based prompting over any reader and writer.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use story_model::{EditError, ErrorKind};

use crate::command::MenuCommand;

/// Asks questions on `output` and reads answers from `input`, one line each.
///
/// Reaching the end of input is reported as [`io::ErrorKind::UnexpectedEof`],
/// which unwinds every open menu.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of plain text.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Print a rejected edit. Unreadable input is labelled apart from edits
    /// the tree refused.
    pub fn warn(&mut self, error: &EditError) -> io::Result<()> {
        let label = match error.kind() {
            ErrorKind::Format => "invalid input:".yellow().bold(),
            ErrorKind::Validation => "error:".red().bold(),
        };
        writeln!(self.output, "{} {}", label, error)
    }

    /// Print a non-edit failure, such as a failed save.
    pub fn fail(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{} {}", "error:".red().bold(), message)
    }

    /// Show a prompt and read one line, without its line ending.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt.cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Ask until the answer parses.
    pub fn ask_with<T, F>(&mut self, prompt: &str, mut parse: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Result<T, EditError>,
    {
        loop {
            let line = self.ask(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(error) => self.warn(&error)?,
            }
        }
    }

    /// Ask until the answer is a command of menu `C`.
    pub fn choose<C: MenuCommand>(&mut self, prompt: &str) -> io::Result<C> {
        loop {
            let line = self.ask(prompt)?;
            match C::parse(&line) {
                Some(command) => return Ok(command),
                None => writeln!(self.output, "{} \"{}\"", "unknown selection".yellow(), line.trim())?,
            }
        }
    }

    /// Ask a yes/no question; anything but `y`/`yes` is a no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Give back the writer, e.g. to inspect a transcript in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}
