//! Latency-tiered scoring
//!
//! Converts the time taken to answer into points. Faster answers earn more.

/// Answers strictly faster than this earn [`QUICK_POINTS`]
pub const QUICK_ANSWER_SECS: f64 = 3.0;

/// Answers strictly faster than this (but not quick) earn [`GOOD_POINTS`]
pub const GOOD_ANSWER_SECS: f64 = 7.0;

pub const QUICK_POINTS: f64 = 2.0;
pub const GOOD_POINTS: f64 = 1.0;
pub const SLOW_POINTS: f64 = 0.5;

/// Most points a single word can earn; the summary's "possible points" is this per main attempt
pub const MAX_POINTS_PER_WORD: f64 = QUICK_POINTS;

/// Speed bucket of a correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Quick,
    Good,
    Slow,
}

impl ScoreTier {
    /// Classify an elapsed answer time
    ///
    /// Zero or negative times (clock anomalies) count as quick.
    #[must_use]
    pub fn from_elapsed(elapsed_secs: f64) -> Self {
        if elapsed_secs < QUICK_ANSWER_SECS {
            Self::Quick
        } else if elapsed_secs < GOOD_ANSWER_SECS {
            Self::Good
        } else {
            Self::Slow
        }
    }

    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::Quick => QUICK_POINTS,
            Self::Good => GOOD_POINTS,
            Self::Slow => SLOW_POINTS,
        }
    }

    /// Feedback line shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Quick => "Quick answer! Bonus point awarded.",
            Self::Good => "Correct in good time!",
            Self::Slow => "Correct, but try to be quicker.",
        }
    }
}

/// Points earned for a correct answer given after `elapsed_secs`
///
/// # Examples
/// ```
/// use word_scramble::game::award;
///
/// assert_eq!(award(1.2), 2.0);
/// assert_eq!(award(5.0), 1.0);
/// assert_eq!(award(30.0), 0.5);
/// ```
#[must_use]
pub fn award(elapsed_secs: f64) -> f64 {
    ScoreTier::from_elapsed(elapsed_secs).points()
}

/// Render a point total the way the score line shows it
///
/// Whole numbers print without a fractional part (`4`), others with as many
/// digits as needed (`3.5`).
#[must_use]
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points}")
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(award(2.999), 2.0);
        assert_eq!(award(3.0), 1.0);
        assert_eq!(award(6.999), 1.0);
        assert_eq!(award(7.0), 0.5);
    }

    #[test]
    fn clock_anomalies_are_quick() {
        assert_eq!(award(-1.0), 2.0);
        assert_eq!(award(0.0), 2.0);
    }

    #[test]
    fn very_slow_answers_still_score() {
        assert_eq!(award(3600.0), 0.5);
    }

    #[test]
    fn tiers_and_messages() {
        assert_eq!(ScoreTier::from_elapsed(1.0), ScoreTier::Quick);
        assert_eq!(ScoreTier::from_elapsed(4.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_elapsed(9.0), ScoreTier::Slow);
        assert!(ScoreTier::Quick.message().starts_with("Quick answer!"));
        assert_eq!(ScoreTier::Slow.message(), "Correct, but try to be quicker.");
    }

    #[test]
    fn points_formatting() {
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(4.0), "4");
        assert_eq!(format_points(3.5), "3.5");
        assert_eq!(format_points(10.0), "10");
    }

    #[test]
    fn max_points_is_quick_award() {
        assert_eq!(MAX_POINTS_PER_WORD, ScoreTier::Quick.points());
    }
}
