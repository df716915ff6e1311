//! TUI application state and terminal channel

use crate::commands::play_sessions;
use crate::core::Phase;
use crate::game::{
    GameError, GameState, InteractionChannel, MAX_MAIN_ATTEMPTS, RoundEngine, SessionSummary,
    channel::UNSCRAMBLE_LABEL,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Oldest transcript lines are dropped beyond this
const MAX_TRANSCRIPT_LINES: usize = 200;

/// Application state
pub struct App {
    pub transcript: Vec<Message>,
    pub input_buffer: String,
    /// Prompt currently waiting for an answer
    pub prompt: Option<String>,
    /// Most recently presented scramble
    pub scramble: Option<String>,
    pub stats: Statistics,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl MessageStyle {
    /// Pick a color class for an engine message
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.starts_with("Incorrect") || text.starts_with("Invalid") || text.starts_with("You lose")
        {
            Self::Error
        } else if text.starts_with("Quick answer")
            || text.starts_with("Correct")
            || text.starts_with("Congratulations")
            || text.starts_with("Outstanding")
        {
            Self::Success
        } else {
            Self::Info
        }
    }
}

/// Live counters shown in the status panel
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub score: f64,
    pub round: usize,
    pub tier: usize,
    pub phase: Phase,
    pub games_finished: usize,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            score: 0.0,
            round: 0,
            tier: 0,
            phase: Phase::Intro,
            games_finished: 0,
        }
    }
}

/// What a key press did to the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep editing
    Pending,
    /// Enter pressed with this trimmed text
    Submit(String),
    /// Player asked to quit
    Abort,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            input_buffer: String::new(),
            prompt: None,
            scramble: None,
            stats: Statistics::default(),
        }
    }

    pub fn add_message(&mut self, text: &str) {
        self.transcript.push(Message {
            text: text.to_string(),
            style: MessageStyle::classify(text),
        });

        if self.transcript.len() > MAX_TRANSCRIPT_LINES {
            let excess = self.transcript.len() - MAX_TRANSCRIPT_LINES;
            self.transcript.drain(..excess);
        }
    }

    pub fn set_progress(&mut self, state: &GameState) {
        if state.phase == Phase::Done && self.stats.phase != Phase::Done {
            self.stats.games_finished += 1;
        }
        self.stats.score = state.score;
        self.stats.round = state.rounds_played;
        self.stats.tier = state.tier;
        self.stats.phase = state.phase;

        if matches!(state.phase, Phase::Summary | Phase::Done) {
            self.scramble = None;
        }
    }

    /// Apply a key press to the input line
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyOutcome::Abort
            }
            KeyCode::Esc => KeyOutcome::Abort,
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                KeyOutcome::Pending
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                KeyOutcome::Pending
            }
            KeyCode::Enter => {
                let answer = self.input_buffer.trim().to_string();
                self.input_buffer.clear();
                KeyOutcome::Submit(answer)
            }
            _ => KeyOutcome::Pending,
        }
    }

    /// Round counter text, e.g. `2/5`
    #[must_use]
    pub fn round_label(&self) -> String {
        format!("{}/{MAX_MAIN_ATTEMPTS}", self.stats.round)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Interaction channel that draws the app and reads keys
///
/// `prompt` runs a draw/read loop until Enter is pressed.
pub struct TerminalChannel<B: Backend> {
    terminal: Terminal<B>,
    pub app: App,
}

impl<B: Backend> TerminalChannel<B> {
    pub fn new(terminal: Terminal<B>, app: App) -> Self {
        Self { terminal, app }
    }

    fn draw(&mut self) -> io::Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| super::rendering::ui(f, app))?;
        Ok(())
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> InteractionChannel for TerminalChannel<B> {
    fn display(&mut self, text: &str) -> io::Result<()> {
        self.app.add_message(text);
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        if !prompt.is_empty() {
            self.app.add_message(prompt);
        }
        self.app.prompt = Some(prompt.to_string());

        loop {
            self.draw()?;

            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match self.app.handle_key(key) {
                    KeyOutcome::Pending => {}
                    KeyOutcome::Submit(answer) => {
                        self.app.add_message(&format!("> {answer}"));
                        self.app.prompt = None;
                        return Ok(answer);
                    }
                    KeyOutcome::Abort => {
                        return Err(io::Error::new(
                            io::ErrorKind::Interrupted,
                            "player quit the game",
                        ));
                    }
                }
            }
        }
    }

    fn present(&mut self, scrambled: &str) -> io::Result<()> {
        self.app.scramble = Some(scrambled.to_string());
        self.display(&format!("{UNSCRAMBLE_LABEL} {scrambled}"))
    }

    fn show_progress(&mut self, state: &GameState) {
        self.app.set_progress(state);
    }
}

/// Run the TUI game
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if a session aborts
/// for any reason other than the player quitting.
pub fn run_tui(seed: Option<u64>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut channel = TerminalChannel::new(terminal, App::new());
    let mut engine = RoundEngine::standard(seed);

    // Run app
    let res = play_sessions(&mut engine, &mut channel);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        channel.terminal_mut().backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    channel.terminal_mut().show_cursor()?;

    report(res)
}

fn report(res: Result<Vec<SessionSummary>, GameError>) -> Result<()> {
    match res {
        Ok(summaries) => {
            for (i, summary) in summaries.iter().enumerate() {
                crate::output::print_session_summary(i + 1, summary);
            }
            println!("Thanks for playing!");
            Ok(())
        }
        Err(GameError::Channel(err)) if err.kind() == io::ErrorKind::Interrupted => {
            debug!("player quit mid-session");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
