//! Round engine: the session state machine
//!
//! Sequences the intro, the main round, the optional bonus round and the
//! final summary. All input and output goes through an [`InteractionChannel`];
//! the engine owns the word pools, the game state, the random source and the
//! clock used to time answers.

use super::bank::WordBank;
use super::channel::InteractionChannel;
use super::clock::{Clock, SystemClock};
use super::error::GameError;
use super::scorer::{ScoreTier, format_points};
use super::scrambler::scramble;
use super::state::{BonusOutcome, GameState, RoundResult, SessionSummary};
use crate::core::{Outcome, Phase, RoundKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Main round attempts per session
pub const MAX_MAIN_ATTEMPTS: usize = 5;

/// Main round is won when the tier counter reaches this value, i.e. one past
/// the last main tier after answering the five letter word
pub const MAIN_WIN_TIER: usize = 3;

/// Bonus round is fully cleared when the tier counter reaches this value
pub const BONUS_CLEAR_TIER: usize = 2;

pub const WELCOME: &str = "Welcome to the word scramble guessing game! You will have five attempts to \
correctly unscramble one three letter word, one four letter word, and one \
five letter word. If you complete this task, you will have the option to \
participate in a bonus game to improve your score. Good luck!\n";
pub const READY_PROMPT: &str = "Type 'ready' to continue:";
pub const GUESS_PROMPT: &str = "Your guess:";
const BONUS_OFFER: &str = "Congratulations, you win! Enter 'one' if you would like to play a bonus game. \
Enter 'two' if you would not like to participate.";
const BONUS_RETRY: &str = "Invalid input. Enter 'one' if you would like to play a bonus game. \
Enter 'two' if you would not like to participate.";
const LOSS_MESSAGE: &str = "You lose, play again.";

/// Drives one play-through at a time
///
/// Generic over the random source and clock so sessions can be replayed
/// deterministically.
pub struct RoundEngine<R: Rng = StdRng, K: Clock = SystemClock> {
    bank: WordBank,
    state: GameState,
    rng: R,
    clock: K,
    summary: Option<SessionSummary>,
}

impl RoundEngine {
    /// Engine over the embedded word lists with wall-clock timing
    ///
    /// A `seed` makes word choice and scrambles reproducible.
    #[must_use]
    pub fn standard(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_parts(WordBank::standard(), rng, SystemClock::new())
    }
}

impl<R: Rng, K: Clock> RoundEngine<R, K> {
    #[must_use]
    pub const fn with_parts(bank: WordBank, rng: R, clock: K) -> Self {
        Self {
            bank,
            state: GameState::new(),
            rng,
            clock,
            summary: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Summary of the finished session, once the summary phase has run
    #[must_use]
    pub const fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// Prepare a new session: refill every pool and start from the intro
    pub fn reset(&mut self) {
        self.bank.reset();
        self.state = GameState::new();
        self.summary = None;
        debug!("session reset");
    }

    /// Play the session through to the end
    ///
    /// # Errors
    ///
    /// Returns `GameError` if a word pool runs dry or the channel fails.
    #[instrument(skip_all)]
    pub fn run<C: InteractionChannel>(
        &mut self,
        mut channel: C,
    ) -> Result<SessionSummary, GameError> {
        while !self.state.phase.is_terminal() {
            self.step(&mut channel)?;
        }

        let summary = self.summary.clone().unwrap_or_else(|| self.build_summary());
        info!(
            score = summary.score,
            possible = summary.possible,
            outcome = ?summary.outcome,
            bonus = ?summary.bonus,
            "session finished"
        );
        Ok(summary)
    }

    /// Execute the current phase and move to the next one
    ///
    /// Returns the new phase. Calling this in `Done` does nothing.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if a word pool runs dry or the channel fails.
    pub fn step<C: InteractionChannel>(&mut self, mut channel: C) -> Result<Phase, GameError> {
        let next = match self.state.phase {
            Phase::Intro => self.intro(&mut channel)?,
            Phase::MainRound => self.main_round(&mut channel)?,
            Phase::BonusPrompt => self.bonus_prompt(&mut channel)?,
            Phase::BonusRound => self.bonus_round(&mut channel)?,
            Phase::Summary => self.report(&mut channel)?,
            Phase::Done => Phase::Done,
        };

        if next != self.state.phase {
            debug!(from = %self.state.phase, to = %next, "phase transition");
        }
        self.state.phase = next;
        channel.show_progress(&self.state);
        Ok(next)
    }

    fn intro<C: InteractionChannel>(&mut self, channel: &mut C) -> Result<Phase, GameError> {
        channel.display(WELCOME)?;
        loop {
            let answer = channel.prompt(READY_PROMPT)?;
            channel.display("")?;
            if answer.trim().eq_ignore_ascii_case("ready") {
                return Ok(Phase::MainRound);
            }
        }
    }

    fn main_round<C: InteractionChannel>(&mut self, channel: &mut C) -> Result<Phase, GameError> {
        while self.state.attempts < MAX_MAIN_ATTEMPTS {
            self.state.attempts += 1;
            self.state.rounds_played += 1;
            channel.show_progress(&self.state);

            let result = self.play_word(channel, RoundKind::Main)?;
            if result.correct {
                self.credit(channel, result.elapsed_secs)?;
                self.state.tier = (self.state.tier + 1).min(MAIN_WIN_TIER);
            } else {
                reveal(channel, &result)?;
                self.state.tier = self.state.tier.saturating_sub(1);
            }

            channel.display("")?;
            channel.show_progress(&self.state);

            if self.state.tier == MAIN_WIN_TIER {
                break;
            }
        }

        if self.state.tier == MAIN_WIN_TIER {
            self.state.outcome = Some(Outcome::Win);
            Ok(Phase::BonusPrompt)
        } else {
            self.state.outcome = Some(Outcome::Loss);
            self.state.bonus = BonusOutcome::NotEligible;
            channel.display(LOSS_MESSAGE)?;
            Ok(Phase::Summary)
        }
    }

    fn bonus_prompt<C: InteractionChannel>(&mut self, channel: &mut C) -> Result<Phase, GameError> {
        channel.display(BONUS_OFFER)?;
        let mut choice = channel.prompt("")?.trim().to_lowercase();
        channel.display("")?;

        while choice != "one" && choice != "two" {
            channel.display(BONUS_RETRY)?;
            choice = channel.prompt("")?.trim().to_lowercase();
            channel.display("")?;
        }

        if choice == "one" {
            Ok(Phase::BonusRound)
        } else {
            self.state.bonus = BonusOutcome::Declined;
            Ok(Phase::Summary)
        }
    }

    fn bonus_round<C: InteractionChannel>(&mut self, channel: &mut C) -> Result<Phase, GameError> {
        self.state.tier = 0;

        loop {
            let result = self.play_word(channel, RoundKind::Bonus)?;
            if result.correct {
                self.credit(channel, result.elapsed_secs)?;
                self.state.tier += 1;
            } else {
                reveal(channel, &result)?;
                self.state.bonus = BonusOutcome::Missed {
                    words_solved: self.state.tier,
                };
                break;
            }

            channel.display("")?;
            channel.show_progress(&self.state);

            if self.state.tier == BONUS_CLEAR_TIER {
                self.state.bonus = BonusOutcome::Cleared;
                break;
            }
        }

        channel.display("")?;
        Ok(Phase::Summary)
    }

    fn report<C: InteractionChannel>(&mut self, channel: &mut C) -> Result<Phase, GameError> {
        let summary = self.build_summary();
        let prefix = if summary.bonus.was_played() {
            "Outstanding! "
        } else {
            ""
        };
        channel.display(&format!(
            "{prefix}Your score was: {} / {} possible points.",
            format_points(summary.score),
            format_points(summary.possible)
        ))?;

        self.summary = Some(summary);
        Ok(Phase::Done)
    }

    /// Draw, scramble, present and time one word
    fn play_word<C: InteractionChannel>(
        &mut self,
        channel: &mut C,
        kind: RoundKind,
    ) -> Result<RoundResult, GameError> {
        let word = self.bank.draw(kind, self.state.tier, &mut self.rng)?;
        let scrambled = scramble(word.text(), &mut self.rng);
        channel.present(&scrambled)?;

        let started = self.clock.now();
        let guess = channel.prompt(GUESS_PROMPT)?;
        let elapsed_secs = self.clock.now().as_secs_f64() - started.as_secs_f64();

        let correct = word.matches_guess(&guess);
        debug!(%kind, tier = self.state.tier, correct, elapsed_secs, "answer received");

        Ok(RoundResult {
            correct,
            elapsed_secs,
            word,
        })
    }

    fn credit<C: InteractionChannel>(
        &mut self,
        channel: &mut C,
        elapsed_secs: f64,
    ) -> Result<(), GameError> {
        let tier = ScoreTier::from_elapsed(elapsed_secs);
        channel.display(tier.message())?;
        self.state.score += tier.points();
        debug!(points = tier.points(), score = self.state.score, "points awarded");
        Ok(())
    }

    fn build_summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.state.score,
            possible: self.state.possible_points(),
            outcome: self.state.outcome.unwrap_or(Outcome::Loss),
            bonus: self.state.bonus,
            main_rounds: self.state.rounds_played,
        }
    }
}

fn reveal<C: InteractionChannel>(channel: &mut C, result: &RoundResult) -> Result<(), GameError> {
    channel.display(&format!("Incorrect, the correct word is: {}", result.word))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::game::channel::{Reply, ScriptedChannel};
    use crate::game::clock::ManualClock;

    fn engine(seed: u64) -> (RoundEngine<StdRng, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let engine = RoundEngine::with_parts(
            WordBank::standard(),
            StdRng::seed_from_u64(seed),
            clock.clone(),
        );
        (engine, clock)
    }

    fn channel(clock: &ManualClock, replies: Vec<Reply>) -> ScriptedChannel {
        ScriptedChannel::new(replies, clock.clone())
    }

    /// Put the engine straight into `phase`
    fn at_phase(engine: &mut RoundEngine<StdRng, ManualClock>, phase: Phase) {
        engine.state.phase = phase;
    }

    #[test]
    fn intro_waits_for_ready() {
        let (mut engine, clock) = engine(1);
        let mut ch = channel(
            &clock,
            vec![Reply::text("go"), Reply::text(""), Reply::text("  READY ")],
        );

        let next = engine.step(&mut ch).unwrap();

        assert_eq!(next, Phase::MainRound);
        assert_eq!(ch.remaining_replies(), 0);
        assert!(ch.saw("Welcome to the word scramble"));
        let ready_prompts = ch
            .transcript()
            .iter()
            .filter(|line| *line == READY_PROMPT)
            .count();
        assert_eq!(ready_prompts, 3);
    }

    #[test]
    fn three_correct_answers_win() {
        let (mut engine, clock) = engine(2);
        at_phase(&mut engine, Phase::MainRound);
        let mut ch = channel(
            &clock,
            vec![
                Reply::correct_after(2.0),
                Reply::correct_after(5.0),
                Reply::correct_after(8.0),
            ],
        );

        let next = engine.step(&mut ch).unwrap();

        assert_eq!(next, Phase::BonusPrompt);
        assert_eq!(engine.state().tier, MAIN_WIN_TIER);
        assert_eq!(engine.state().score, 3.5);
        assert_eq!(engine.state().attempts, 3);
        assert_eq!(engine.state().rounds_played, 3);
        assert_eq!(engine.state().outcome, Some(Outcome::Win));
        assert!(ch.saw("Quick answer! Bonus point awarded."));
        assert!(ch.saw("Correct in good time!"));
        assert!(ch.saw("Correct, but try to be quicker."));
    }

    #[test]
    fn words_get_longer_with_each_tier() {
        let (mut engine, clock) = engine(3);
        at_phase(&mut engine, Phase::MainRound);
        let mut ch = channel(
            &clock,
            vec![
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
            ],
        );

        engine.step(&mut ch).unwrap();

        let lengths: Vec<usize> = ch
            .transcript()
            .iter()
            .filter_map(|line| line.strip_prefix("Unscramble the word: "))
            .map(str::len)
            .collect();
        assert_eq!(lengths, vec![3, 4, 5]);
    }

    #[test]
    fn five_misses_lose() {
        let (mut engine, clock) = engine(4);
        at_phase(&mut engine, Phase::MainRound);
        let mut ch = channel(&clock, vec![Reply::wrong_after(1.0); 5]);

        let next = engine.step(&mut ch).unwrap();

        assert_eq!(next, Phase::Summary);
        assert_eq!(engine.state().attempts, MAX_MAIN_ATTEMPTS);
        assert_eq!(engine.state().tier, 0);
        assert_eq!(engine.state().score, 0.0);
        assert_eq!(engine.state().outcome, Some(Outcome::Loss));
        assert!(ch.saw(LOSS_MESSAGE));
        let reveals = ch
            .transcript()
            .iter()
            .filter(|line| line.starts_with("Incorrect, the correct word is:"))
            .count();
        assert_eq!(reveals, 5);
    }

    #[test]
    fn miss_at_tier_zero_stays_at_zero() {
        let (mut engine, clock) = engine(5);
        at_phase(&mut engine, Phase::MainRound);
        // Miss first, then climb: tier 0 -> 0 -> 1 -> 2 -> 3
        let mut ch = channel(
            &clock,
            vec![
                Reply::wrong_after(1.0),
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
            ],
        );

        let next = engine.step(&mut ch).unwrap();

        assert_eq!(next, Phase::BonusPrompt);
        assert_eq!(engine.state().attempts, 4);
        let tiers: Vec<usize> = ch.progress().iter().map(|s| s.tier).collect();
        // Snapshots come before and after each answer, plus one on leaving the phase
        assert_eq!(tiers, vec![0, 0, 0, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn miss_drops_one_tier() {
        let (mut engine, clock) = engine(6);
        at_phase(&mut engine, Phase::MainRound);
        // 0 -> 1 -> 2 -> 1 -> 2 -> 1
        let mut ch = channel(
            &clock,
            vec![
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
                Reply::wrong_after(1.0),
                Reply::correct_after(1.0),
                Reply::wrong_after(1.0),
            ],
        );

        let next = engine.step(&mut ch).unwrap();

        assert_eq!(next, Phase::Summary);
        assert_eq!(engine.state().tier, 1);
        assert_eq!(engine.state().score, 6.0);
        assert_eq!(engine.state().outcome, Some(Outcome::Loss));
    }

    #[test]
    fn win_on_last_attempt() {
        let (mut engine, clock) = engine(7);
        at_phase(&mut engine, Phase::MainRound);
        let mut ch = channel(
            &clock,
            vec![
                Reply::wrong_after(1.0),
                Reply::wrong_after(1.0),
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
            ],
        );

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::BonusPrompt);
        assert_eq!(engine.state().attempts, 5);
    }

    #[test]
    fn malformed_guess_is_just_wrong() {
        let (mut engine, clock) = engine(8);
        at_phase(&mut engine, Phase::MainRound);
        let mut ch = channel(
            &clock,
            vec![
                Reply::text(""),
                Reply::text("12345"),
                Reply::text("!!"),
                Reply::text(" "),
                Reply::text("nope"),
            ],
        );

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::Summary);
        assert_eq!(engine.state().score, 0.0);
    }

    #[test]
    fn bonus_prompt_reprompts_until_valid() {
        let (mut engine, clock) = engine(9);
        at_phase(&mut engine, Phase::BonusPrompt);
        let mut ch = channel(
            &clock,
            vec![Reply::text("yes"), Reply::text("3"), Reply::text("One")],
        );

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::BonusRound);
        let retries = ch
            .transcript()
            .iter()
            .filter(|line| line.starts_with("Invalid input."))
            .count();
        assert_eq!(retries, 2);
    }

    #[test]
    fn bonus_prompt_two_declines() {
        let (mut engine, clock) = engine(10);
        at_phase(&mut engine, Phase::BonusPrompt);
        let mut ch = channel(&clock, vec![Reply::text("TWO")]);

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::Summary);
        assert_eq!(engine.state().bonus, BonusOutcome::Declined);
    }

    #[test]
    fn bonus_miss_ends_round_immediately() {
        let (mut engine, clock) = engine(11);
        at_phase(&mut engine, Phase::BonusRound);
        let mut ch = channel(&clock, vec![Reply::wrong_after(1.0), Reply::correct_after(1.0)]);

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::Summary);
        assert_eq!(ch.remaining_replies(), 1);
        assert_eq!(engine.state().bonus, BonusOutcome::Missed { words_solved: 0 });
    }

    #[test]
    fn bonus_miss_on_second_word() {
        let (mut engine, clock) = engine(12);
        at_phase(&mut engine, Phase::BonusRound);
        let mut ch = channel(&clock, vec![Reply::correct_after(4.0), Reply::wrong_after(1.0)]);

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::Summary);
        assert_eq!(engine.state().bonus, BonusOutcome::Missed { words_solved: 1 });
        assert_eq!(engine.state().score, 1.0);
    }

    #[test]
    fn bonus_two_correct_clears() {
        let (mut engine, clock) = engine(13);
        at_phase(&mut engine, Phase::BonusRound);
        let mut ch = channel(&clock, vec![Reply::correct_after(1.0), Reply::correct_after(9.0)]);

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::Summary);
        assert_eq!(engine.state().bonus, BonusOutcome::Cleared);
        assert_eq!(engine.state().tier, BONUS_CLEAR_TIER);
        assert_eq!(engine.state().score, 2.5);

        let lengths: Vec<usize> = ch
            .transcript()
            .iter()
            .filter_map(|line| line.strip_prefix("Unscramble the word: "))
            .map(str::len)
            .collect();
        assert_eq!(lengths, vec![6, 7]);
    }

    #[test]
    fn summary_reports_score_over_possible() {
        let (mut engine, clock) = engine(14);
        engine.state.phase = Phase::Summary;
        engine.state.score = 3.5;
        engine.state.rounds_played = 3;
        engine.state.outcome = Some(Outcome::Win);
        engine.state.bonus = BonusOutcome::Declined;
        let mut ch = channel(&clock, vec![]);

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::Done);
        assert!(ch.saw("Your score was: 3.5 / 6 possible points."));
        assert!(!ch.saw("Outstanding!"));

        let summary = engine.summary().unwrap();
        assert_eq!(summary.possible, 6.0);
        assert_eq!(summary.main_rounds, 3);
    }

    #[test]
    fn done_is_a_fixed_point() {
        let (mut engine, clock) = engine(15);
        at_phase(&mut engine, Phase::Done);
        let mut ch = channel(&clock, vec![]);

        assert_eq!(engine.step(&mut ch).unwrap(), Phase::Done);
        assert!(ch.transcript().is_empty());
    }

    #[test]
    fn channel_failure_aborts_session() {
        let (mut engine, clock) = engine(16);
        let ch = channel(&clock, vec![Reply::text("ready"), Reply::correct_after(1.0)]);

        let err = engine.run(ch).unwrap_err();
        assert!(matches!(err, GameError::Channel(_)));
    }

    #[test]
    fn exhausted_pool_aborts_session() {
        const ONE: &[&str] = &["sun"];
        let clock = ManualClock::new();
        let mut engine = RoundEngine::with_parts(
            WordBank::new(&[ONE, ONE, ONE], &[ONE, ONE]),
            StdRng::seed_from_u64(17),
            clock.clone(),
        );
        at_phase(&mut engine, Phase::MainRound);
        let mut ch = channel(&clock, vec![Reply::wrong_after(1.0); 5]);

        let err = engine.step(&mut ch).unwrap_err();
        assert!(matches!(
            err,
            GameError::ExhaustedPool {
                kind: RoundKind::Main,
                tier: 0
            }
        ));
    }

    #[test]
    fn full_session_with_bonus_clear() {
        let (mut engine, clock) = engine(18);
        let ch = channel(
            &clock,
            vec![
                Reply::text("ready"),
                Reply::correct_after(2.0),
                Reply::correct_after(5.0),
                Reply::correct_after(8.0),
                Reply::text("one"),
                Reply::correct_after(1.0),
                Reply::correct_after(1.0),
            ],
        );

        let summary = engine.run(ch).unwrap();

        assert_eq!(summary.score, 7.5);
        assert_eq!(summary.possible, 6.0);
        assert_eq!(summary.outcome, Outcome::Win);
        assert_eq!(summary.bonus, BonusOutcome::Cleared);
        assert_eq!(engine.phase(), Phase::Done);
    }

    #[test]
    fn reset_starts_a_fresh_session() {
        let (mut engine, clock) = engine(19);
        let ch = channel(
            &clock,
            vec![
                Reply::text("ready"),
                Reply::wrong_after(1.0),
                Reply::wrong_after(1.0),
                Reply::wrong_after(1.0),
                Reply::wrong_after(1.0),
                Reply::wrong_after(1.0),
            ],
        );
        engine.run(ch).unwrap();
        assert!(engine.bank().pool(RoundKind::Main, 0).unwrap().len() < 10);

        engine.reset();

        assert_eq!(engine.state(), &GameState::new());
        assert!(engine.summary().is_none());
        assert_eq!(engine.bank().pool(RoundKind::Main, 0).unwrap().len(), 10);
    }
}
