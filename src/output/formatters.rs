//! Formatting utilities for terminal output

use crate::game::{BonusOutcome, format_points};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a score against the points possible
#[must_use]
pub fn score_bar(score: f64, possible: f64, width: usize) -> String {
    create_progress_bar(score, possible, width)
}

/// Render a half-point distribution key as a score
#[must_use]
pub fn half_points_label(half_points: u32) -> String {
    format_points(f64::from(half_points) / 2.0)
}

/// Short description of the bonus game result
#[must_use]
pub const fn bonus_label(bonus: BonusOutcome) -> &'static str {
    match bonus {
        BonusOutcome::NotEligible => "not reached",
        BonusOutcome::Declined => "declined",
        BonusOutcome::Cleared => "cleared",
        BonusOutcome::Missed { words_solved: 0 } => "missed first word",
        BonusOutcome::Missed { .. } => "missed second word",
    }
}
