//! Plain console mode
//!
//! Line-based play over stdin/stdout without the TUI.

use super::session::play_sessions;
use crate::game::{InteractionChannel, RoundEngine};
use crate::output::print_session_summary;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Channel that prints lines and reads answers one line at a time
pub struct ConsoleChannel<I, O> {
    input: I,
    output: O,
}

impl ConsoleChannel<io::StdinLock<'static>, io::Stdout> {
    /// Channel over the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> ConsoleChannel<I, O> {
    pub const fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> O {
        self.output
    }
}

impl<I: BufRead, O: Write> InteractionChannel for ConsoleChannel<I, O> {
    fn display(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        if !prompt.is_empty() {
            write!(self.output, "{prompt} ")?;
        }
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }

        Ok(input.trim().to_string())
    }
}

/// Run the console game until the player stops
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a
/// session aborts.
pub fn run_console(seed: Option<u64>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Scramble - Console                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut engine = RoundEngine::standard(seed);
    let mut channel = ConsoleChannel::stdio();

    let summaries = play_sessions(&mut engine, &mut channel).context("game session aborted")?;

    if summaries.len() > 1 {
        println!();
        for (i, summary) in summaries.iter().enumerate() {
            print_session_summary(i + 1, summary);
        }
    }

    Ok(())
}
