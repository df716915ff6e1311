//! Session phases, round kinds and outcomes
//!
//! A session moves through the phases in order:
//!
//! ```text
//! Intro -> MainRound -> BonusPrompt -> BonusRound -> Summary -> Done
//!                   \             \________________/
//!                    \______________________________> Summary (loss or bonus declined)
//! ```

use std::fmt;

/// Which set of word pools a tier indexes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundKind {
    /// Three tiers of 3, 4 and 5 letter words
    Main,
    /// Two tiers of 6 and 7 letter words
    Bonus,
}

impl fmt::Display for RoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Bonus => write!(f, "bonus"),
        }
    }
}

/// State of the round engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to type `ready`
    Intro,
    /// Up to five attempts climbing the three main tiers
    MainRound,
    /// Player won and chooses whether to play the bonus game
    BonusPrompt,
    /// Bonus words until a miss or both tiers cleared
    BonusRound,
    /// Final score report
    Summary,
    /// Session complete
    Done,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "Intro",
            Self::MainRound => "Main round",
            Self::BonusPrompt => "Bonus prompt",
            Self::BonusRound => "Bonus round",
            Self::Summary => "Summary",
            Self::Done => "Done",
        };
        write!(f, "{name}")
    }
}

/// Result of the main round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The five letter tier was answered correctly within five attempts
    Win,
    /// Attempts ran out first
    Loss,
}
