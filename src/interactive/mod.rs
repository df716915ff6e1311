//! Interactive TUI mode
//!
//! Full-screen game interface built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, KeyOutcome, Message, MessageStyle, Statistics, TerminalChannel, run_tui};
