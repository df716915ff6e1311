//! Core domain types for the scramble game
//!
//! This module contains the fundamental domain types shared by the engine and the front ends.
//! All types here are pure and testable.

mod phase;
mod word;

pub use phase::{Outcome, Phase, RoundKind};
pub use word::{Word, WordError};
