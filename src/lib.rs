//! Word Scramble
//!
//! A timed word-unscrambling quiz. Players climb three tiers of word lengths
//! in at most five attempts, earning more points for faster answers, and can
//! then try a two-word bonus round.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_scramble::game::{ManualClock, Reply, RoundEngine, ScriptedChannel, WordBank};
//!
//! let clock = ManualClock::new();
//! let mut engine = RoundEngine::with_parts(
//!     WordBank::standard(),
//!     StdRng::seed_from_u64(1),
//!     clock.clone(),
//! );
//! let channel = ScriptedChannel::new(
//!     [
//!         Reply::text("ready"),
//!         Reply::correct_after(2.0),
//!         Reply::correct_after(5.0),
//!         Reply::correct_after(8.0),
//!         Reply::text("two"),
//!     ],
//!     clock,
//! );
//!
//! let summary = engine.run(channel).unwrap();
//! assert_eq!(summary.score, 3.5);
//! ```

// Core domain types
pub mod core;

// Round engine, scoring and word pools
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
