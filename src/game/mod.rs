//! Game engine
//!
//! Word pools, scrambling, scoring and the round state machine that ties them together.

pub mod bank;
pub mod channel;
pub mod clock;
mod engine;
mod error;
pub mod scorer;
mod scrambler;
mod state;

pub use bank::{WordBank, WordPool};
pub use channel::{InteractionChannel, Reply, ScriptedChannel};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{
    BONUS_CLEAR_TIER, GUESS_PROMPT, MAIN_WIN_TIER, MAX_MAIN_ATTEMPTS, READY_PROMPT, RoundEngine,
    WELCOME,
};
pub use error::GameError;
pub use scorer::{ScoreTier, award, format_points};
pub use scrambler::{MAX_SCRAMBLE_ATTEMPTS, scramble};
pub use state::{BonusOutcome, GameState, RoundResult, SessionSummary};
