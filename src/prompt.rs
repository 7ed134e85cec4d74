//! Console prompting

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Synchronous line-prompt capability.
///
/// The session collects its two input lines and emits its status lines
/// through this trait, which lets tests script the whole interaction.
pub trait Prompter {
    /// Display `label` and read one line of input, without the line terminator.
    fn prompt_line(&mut self, label: &str) -> Result<String>;

    /// Emit a status line to the user.
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Prompter backed by stdin and stdout
#[derive(Debug)]
pub struct ConsolePrompter {
    quiet: bool,
}

impl ConsolePrompter {
    /// Create a prompter that echoes status lines to stdout
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a prompter that suppresses status lines, for JSON output mode
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Prompter for ConsolePrompter {
    fn prompt_line(&mut self, label: &str) -> Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(label.as_bytes())?;
        stdout.flush()?;

        // EOF reads as an empty line; the caller decides what that means
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        if !self.quiet {
            println!("{}", message);
        }
        Ok(())
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}
