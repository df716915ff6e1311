//! Command implementations

pub mod console;
pub mod session;
pub mod simulate;

pub use console::{ConsoleChannel, run_console};
pub use session::{FAREWELL, PLAY_AGAIN_PROMPT, play_sessions};
pub use simulate::{BotChannel, MAX_MEAN_LATENCY_SECS, SimulationConfig, SimulationResult, run_simulation};
