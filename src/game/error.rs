//! Session error taxonomy

use crate::core::RoundKind;
use std::fmt;
use std::io;

/// Fatal errors that abort a game session
#[derive(Debug)]
pub enum GameError {
    /// A word pool ran dry; the pools are under-provisioned for a session
    ExhaustedPool { kind: RoundKind, tier: usize },
    /// A tier outside the pool set was requested
    InvalidTier { kind: RoundKind, tier: usize },
    /// The interaction channel failed while displaying or prompting
    Channel(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedPool { kind, tier } => write!(
                f,
                "No words left in {kind} tier {tier}: word pools are too small for a session"
            ),
            Self::InvalidTier { kind, tier } => {
                write!(f, "Tier {tier} does not exist in the {kind} word pools")
            }
            Self::Channel(err) => write!(f, "Interaction channel failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Channel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Channel(err)
    }
}
