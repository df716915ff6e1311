//! Replay loop around the round engine
//!
//! Plays sessions back to back until the player declines another game.

use crate::game::{Clock, GameError, InteractionChannel, RoundEngine, SessionSummary};
use rand::Rng;
use tracing::{info, instrument};

pub const PLAY_AGAIN_PROMPT: &str = "Would you like to play again? (yes/no):";
pub const FAREWELL: &str = "Thanks for playing!";

/// Play sessions until the player answers anything but `yes`
///
/// Each replay resets the engine, so word pools start full again.
/// Returns the summaries of every completed session.
///
/// # Errors
///
/// Returns `GameError` if any session fails; earlier summaries are discarded.
#[instrument(skip_all)]
pub fn play_sessions<R: Rng, K: Clock, C: InteractionChannel>(
    engine: &mut RoundEngine<R, K>,
    mut channel: C,
) -> Result<Vec<SessionSummary>, GameError> {
    let mut summaries = Vec::new();

    loop {
        let summary = engine.run(&mut channel)?;
        summaries.push(summary);

        channel.display("")?;
        let again = channel.prompt(PLAY_AGAIN_PROMPT)?;
        if !again.trim().eq_ignore_ascii_case("yes") {
            channel.display("")?;
            channel.display(FAREWELL)?;
            info!(sessions = summaries.len(), "player finished");
            return Ok(summaries);
        }

        engine.reset();
    }
}
