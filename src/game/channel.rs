//! The interaction channel the engine talks through
//!
//! The engine never touches a terminal directly. Front ends implement
//! [`InteractionChannel`]; tests and replays use [`ScriptedChannel`].

use super::clock::ManualClock;
use super::state::GameState;
use crate::wordlists::unscramble;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Line introducing each scrambled word
pub const UNSCRAMBLE_LABEL: &str = "Unscramble the word:";

/// Output sink and prompt source for one game session
///
/// `prompt` blocks until the player answers; that call is the only point
/// where a session waits.
pub trait InteractionChannel {
    /// Append a line of output
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn display(&mut self, text: &str) -> io::Result<()>;

    /// Show `prompt` (if non-empty) and wait for the player's trimmed answer
    ///
    /// The answer is returned as typed; the engine does its own case folding.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or the player aborts.
    fn prompt(&mut self, prompt: &str) -> io::Result<String>;

    /// Show a freshly scrambled word
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn present(&mut self, scrambled: &str) -> io::Result<()> {
        self.display(&format!("{UNSCRAMBLE_LABEL} {scrambled}"))
    }

    /// Live score and round counters changed
    fn show_progress(&mut self, _state: &GameState) {}
}

impl<C: InteractionChannel + ?Sized> InteractionChannel for &mut C {
    fn display(&mut self, text: &str) -> io::Result<()> {
        (**self).display(text)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        (**self).prompt(prompt)
    }

    fn present(&mut self, scrambled: &str) -> io::Result<()> {
        (**self).present(scrambled)
    }

    fn show_progress(&mut self, state: &GameState) {
        (**self).show_progress(state);
    }
}

/// A queued answer for [`ScriptedChannel`]
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Type this exact text
    Text(String, Duration),
    /// Solve the current scramble
    Correct(Duration),
    /// Answer something that is never a tier word
    Wrong(Duration),
}

impl Reply {
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string(), Duration::ZERO)
    }

    #[must_use]
    pub fn correct_after(secs: f64) -> Self {
        Self::Correct(Duration::from_secs_f64(secs))
    }

    #[must_use]
    pub fn wrong_after(secs: f64) -> Self {
        Self::Wrong(Duration::from_secs_f64(secs))
    }
}

/// Channel that answers prompts from a fixed script
///
/// Each reply advances the shared [`ManualClock`] by its delay before it is
/// returned, so the engine measures exactly that latency. Everything shown
/// is kept in a transcript.
#[derive(Debug, Clone)]
pub struct ScriptedChannel {
    replies: VecDeque<Reply>,
    clock: ManualClock,
    current_scramble: Option<String>,
    transcript: Vec<String>,
    progress: Vec<GameState>,
}

impl ScriptedChannel {
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = Reply>, clock: ManualClock) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            clock,
            current_scramble: None,
            transcript: Vec::new(),
            progress: Vec::new(),
        }
    }

    /// Every displayed line and non-empty prompt, in order
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any displayed line contains `needle`
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Snapshots received through `show_progress`
    #[must_use]
    pub fn progress(&self) -> &[GameState] {
        &self.progress
    }

    #[must_use]
    pub fn remaining_replies(&self) -> usize {
        self.replies.len()
    }
}

impl InteractionChannel for ScriptedChannel {
    fn display(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        if !prompt.is_empty() {
            self.transcript.push(prompt.to_string());
        }

        let reply = self
            .replies
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))?;

        let (answer, delay) = match reply {
            Reply::Text(text, delay) => (text, delay),
            Reply::Correct(delay) => {
                let answer = self
                    .current_scramble
                    .as_deref()
                    .and_then(unscramble)
                    .unwrap_or_default()
                    .to_string();
                (answer, delay)
            }
            Reply::Wrong(delay) => ("?".to_string(), delay),
        };

        self.clock.advance(delay);
        Ok(answer.trim().to_string())
    }

    fn present(&mut self, scrambled: &str) -> io::Result<()> {
        self.current_scramble = Some(scrambled.to_string());
        self.display(&format!("{UNSCRAMBLE_LABEL} {scrambled}"))
    }

    fn show_progress(&mut self, state: &GameState) {
        self.progress.push(state.clone());
    }
}
