//! Game state and session results

use super::scorer::MAX_POINTS_PER_WORD;
use crate::core::{Outcome, Phase, Word};

/// Mutable state of one play-through, owned by the round engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Current difficulty tier (index into the active pool set)
    pub tier: usize,
    /// Cumulative points; never decreases within a session
    pub score: f64,
    /// Main round attempts used so far
    pub attempts: usize,
    /// Main round words played (bonus words are not counted)
    pub rounds_played: usize,
    pub phase: Phase,
    /// Set once the main round finishes
    pub outcome: Option<Outcome>,
    pub bonus: BonusOutcome,
}

impl GameState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tier: 0,
            score: 0.0,
            attempts: 0,
            rounds_played: 0,
            phase: Phase::Intro,
            outcome: None,
            bonus: BonusOutcome::NotEligible,
        }
    }

    /// Points available across the main round words played so far
    #[must_use]
    pub fn possible_points(&self) -> f64 {
        MAX_POINTS_PER_WORD * self.rounds_played as f64
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened with the bonus game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusOutcome {
    /// Main round was lost
    NotEligible,
    /// Player answered `two`
    Declined,
    /// Both bonus tiers answered correctly
    Cleared,
    /// A bonus word was missed after solving `words_solved` words
    Missed { words_solved: usize },
}

impl BonusOutcome {
    /// Whether the bonus round was actually played
    #[must_use]
    pub const fn was_played(self) -> bool {
        matches!(self, Self::Cleared | Self::Missed { .. })
    }
}

/// Outcome of a single scramble-present-guess cycle
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub correct: bool,
    pub elapsed_secs: f64,
    pub word: Word,
}

/// Final report of a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub score: f64,
    /// Two points per main round word played
    pub possible: f64,
    pub outcome: Outcome,
    pub bonus: BonusOutcome,
    pub main_rounds: usize,
}

impl SessionSummary {
    /// Score as a fraction of possible points (may exceed 1 after a bonus round)
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.possible > 0.0 {
            self.score / self.possible
        } else {
            0.0
        }
    }
}
