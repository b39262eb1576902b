//! Sources of operator input.
//!
//! The session only ever asks two kinds of question: pick a menu action, or type a
//! line of text. [`TerminalPrompter`] answers them with dialoguer widgets on a real
//! terminal. [`LinePrompter`] reads plain lines, which is what piped input and
//! scripted runs need.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use dialoguer::{Input, Select};

use crate::menu::MenuAction;

#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Asks the operator to pick one of `actions`.
    ///
    /// Returns `None` when the input source is exhausted.
    fn select_action(
        &mut self,
        prompt: &str,
        actions: &[MenuAction],
    ) -> Result<Option<MenuAction>>;

    /// Asks for one line of free text
    fn input(&mut self, prompt: &str) -> Result<String>;
}

/// Arrow-key menu and text prompts on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn select_action(
        &mut self,
        prompt: &str,
        actions: &[MenuAction],
    ) -> Result<Option<MenuAction>> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(actions)
            .default(0)
            .interact()
            .context("Failed to read menu selection")?;

        Ok(actions.get(selection).copied())
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read answer to '{prompt}'"))
    }
}

/// Line-oriented prompts over any reader and writer.
///
/// Menu choices are accepted as a 1-based number or as the exact label.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Reads one line; bytes that are not valid UTF-8 become U+FFFD
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> Result<()> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Resolves a typed menu choice against the offered actions
pub fn parse_choice(input: &str, actions: &[MenuAction]) -> Option<MenuAction> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| actions.get(index))
            .copied();
    }

    actions
        .iter()
        .copied()
        .find(|action| action.label() == input)
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select_action(
        &mut self,
        prompt: &str,
        actions: &[MenuAction],
    ) -> Result<Option<MenuAction>> {
        loop {
            writeln!(self.writer)?;
            for (index, action) in actions.iter().enumerate() {
                writeln!(self.writer, "  {}) {}", index + 1, action)?;
            }
            self.ask(prompt)?;

            let Some(line) = self.read_line()? else {
                writeln!(self.writer)?;
                return Ok(None);
            };

            match parse_choice(&line, actions) {
                Some(action) => return Ok(Some(action)),
                None => writeln!(self.writer, "Unknown action: '{}'", line.trim())?,
            }
        }
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)?;
        self.read_line()?
            .ok_or_else(|| anyhow::anyhow!("Input closed while waiting for '{prompt}'"))
    }
}
