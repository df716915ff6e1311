//! Simulation command
//!
//! Plays many sessions with an automated player to show how scores are
//! distributed for a given accuracy and answer speed.

use crate::core::Outcome;
use crate::game::{
    GUESS_PROMPT, GameError, InteractionChannel, ManualClock, READY_PROMPT, RoundEngine,
    SessionSummary, WordBank,
};
use crate::wordlists::unscramble;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest mean answer time the bot will simulate (one day)
pub const MAX_MEAN_LATENCY_SECS: f64 = 86_400.0;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub sessions: usize,
    /// Probability of answering a word correctly
    pub accuracy: f64,
    /// Mean answer time; each answer takes uniformly between zero and twice this.
    /// Capped at [`MAX_MEAN_LATENCY_SECS`].
    pub mean_latency_secs: f64,
    /// Whether the bot accepts the bonus game after a win
    pub play_bonus: bool,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(sessions: usize, accuracy: f64, mean_latency_secs: f64) -> Self {
        Self {
            sessions,
            accuracy,
            mean_latency_secs,
            play_bonus: true,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Aggregated results of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub sessions: usize,
    pub wins: usize,
    pub bonus_played: usize,
    pub bonus_cleared: usize,
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub average_ratio: f64,
    /// Sessions per score, keyed in half points (a score of 3.5 is key 7)
    pub score_distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.sessions == 0 {
            0.0
        } else {
            self.wins as f64 / self.sessions as f64
        }
    }
}

/// Automated player
///
/// Solves scrambles by looking their letters up in the tier lists, then
/// deliberately misses a share of them.
pub struct BotChannel {
    rng: StdRng,
    clock: ManualClock,
    accuracy: f64,
    mean_latency_secs: f64,
    play_bonus: bool,
    current_scramble: Option<String>,
}

impl BotChannel {
    #[must_use]
    pub fn new(config: &SimulationConfig, seed: u64, clock: ManualClock) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            clock,
            accuracy: config.accuracy.clamp(0.0, 1.0),
            mean_latency_secs: if config.mean_latency_secs.is_nan() {
                0.0
            } else {
                config.mean_latency_secs.clamp(0.0, MAX_MEAN_LATENCY_SECS)
            },
            play_bonus: config.play_bonus,
            current_scramble: None,
        }
    }

    fn think(&mut self) {
        let secs = if self.mean_latency_secs > 0.0 {
            self.rng.random_range(0.0..2.0 * self.mean_latency_secs)
        } else {
            0.0
        };
        self.clock.advance(Duration::from_secs_f64(secs));
    }

    fn guess(&mut self) -> String {
        let knows_it = self.rng.random_bool(self.accuracy);
        let solution = self.current_scramble.as_deref().and_then(unscramble);
        match solution {
            Some(word) if knows_it => word.to_string(),
            _ => String::new(),
        }
    }
}

impl InteractionChannel for BotChannel {
    fn display(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        match prompt {
            READY_PROMPT => Ok("ready".to_string()),
            GUESS_PROMPT => {
                self.think();
                Ok(self.guess())
            }
            "" => Ok(if self.play_bonus { "one" } else { "two" }.to_string()),
            other => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("bot cannot answer prompt {other:?}"),
            )),
        }
    }

    fn present(&mut self, scrambled: &str) -> io::Result<()> {
        self.current_scramble = Some(scrambled.to_string());
        Ok(())
    }
}

/// Play one bot session; session `index` gets its own random streams
///
/// # Errors
///
/// Returns `GameError` if the session aborts.
pub fn simulate_session(config: &SimulationConfig, index: usize) -> Result<SessionSummary, GameError> {
    let session_seed = config.seed.wrapping_add(index as u64);
    let clock = ManualClock::new();
    let mut engine = RoundEngine::with_parts(
        WordBank::standard(),
        StdRng::seed_from_u64(session_seed),
        clock.clone(),
    );
    let bot = BotChannel::new(config, session_seed ^ 0x9E37_79B9_7F4A_7C15, clock);
    engine.run(bot)
}

/// Run every session of the simulation in parallel
///
/// # Errors
///
/// Returns the first `GameError` raised by any session.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult, GameError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.sessions as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Simulating...");

    let summaries: Vec<SessionSummary> = (0..config.sessions)
        .into_par_iter()
        .map(|index| {
            let summary = simulate_session(config, index);
            pb.inc(1);
            summary
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    debug!(sessions = summaries.len(), "simulation finished");

    Ok(aggregate(&summaries, start.elapsed()))
}

fn aggregate(summaries: &[SessionSummary], duration: Duration) -> SimulationResult {
    let sessions = summaries.len();
    let wins = summaries
        .iter()
        .filter(|s| s.outcome == Outcome::Win)
        .count();
    let bonus_played = summaries.iter().filter(|s| s.bonus.was_played()).count();
    let bonus_cleared = summaries
        .iter()
        .filter(|s| s.bonus == crate::game::BonusOutcome::Cleared)
        .count();

    let total_score: f64 = summaries.iter().map(|s| s.score).sum();
    let total_ratio: f64 = summaries.iter().map(SessionSummary::ratio).sum();
    let (average_score, average_ratio) = if sessions > 0 {
        (total_score / sessions as f64, total_ratio / sessions as f64)
    } else {
        (0.0, 0.0)
    };

    let min_score = summaries.iter().map(|s| s.score).reduce(f64::min).unwrap_or(0.0);
    let max_score = summaries.iter().map(|s| s.score).reduce(f64::max).unwrap_or(0.0);

    let mut score_distribution: BTreeMap<u32, usize> = BTreeMap::new();
    for summary in summaries {
        let half_points = (summary.score * 2.0).round() as u32;
        *score_distribution.entry(half_points).or_insert(0) += 1;
    }

    SimulationResult {
        sessions,
        wins,
        bonus_played,
        bonus_cleared,
        average_score,
        min_score,
        max_score,
        average_ratio,
        score_distribution,
        duration,
    }
}
