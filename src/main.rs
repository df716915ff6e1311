//! Word Scramble - CLI
//!
//! Timed word-unscrambling quiz with TUI and console modes, plus a
//! simulator that plays many sessions with an automated player.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{MAX_MEAN_LATENCY_SECS, SimulationConfig, run_console, run_simulation},
    interactive::run_tui,
    output::print_simulation_result,
};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Unscramble words against the clock across three tiers, then try the bonus round",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible word draws and scrambles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'word_scramble=trace' (logs go to stderr)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain console mode over stdin/stdout
    Console,

    /// Play many sessions with an automated player and report the scores
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Probability that the bot answers a word correctly (0.0 - 1.0)
        #[arg(short, long, default_value = "0.8")]
        accuracy: f64,

        /// Mean answer time in seconds
        #[arg(long, default_value = "4.0")]
        latency: f64,

        /// Decline the bonus game after a win
        #[arg(long)]
        no_bonus: bool,
    },
}

/// Install the global tracing subscriber
///
/// The TUI owns the terminal, so it only logs when a level was asked for.
fn init_tracing(log_level: Option<&str>, tui: bool) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
        None if tui => return Ok(()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(cli.log_level.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => {
            info!(seed = ?cli.seed, "starting TUI");
            run_tui(cli.seed)
        }
        Commands::Console => {
            info!(seed = ?cli.seed, "starting console game");
            run_console(cli.seed)
        }
        Commands::Simulate {
            count,
            accuracy,
            latency,
            no_bonus,
        } => run_simulate_command(cli.seed, count, accuracy, latency, no_bonus),
    }
}

fn run_simulate_command(
    seed: Option<u64>,
    count: usize,
    accuracy: f64,
    latency: f64,
    no_bonus: bool,
) -> Result<()> {
    if !(0.0..=1.0).contains(&accuracy) {
        bail!("accuracy must be between 0.0 and 1.0, got {accuracy}");
    }
    if !(0.0..=MAX_MEAN_LATENCY_SECS).contains(&latency) {
        bail!("latency must be between 0 and {MAX_MEAN_LATENCY_SECS} seconds, got {latency}");
    }

    let mut config = SimulationConfig::new(count, accuracy, latency);
    config.play_bonus = !no_bonus;
    if let Some(seed) = seed {
        config.seed = seed;
    }

    println!(
        "Simulating {count} sessions (accuracy {:.0}%, mean answer time {latency:.1}s)...",
        accuracy * 100.0
    );

    let result = run_simulation(&config).context("simulation aborted")?;
    print_simulation_result(&result);
    Ok(())
}
