//! Word lists for the scramble game
//!
//! Provides the fixed difficulty tiers, embedded into the binary at build time.
//! The main game draws from three tiers (3, 4 and 5 letters), the bonus game
//! from two (6 and 7 letters).

mod embedded;
pub mod loader;

use crate::core::Word;

pub use embedded::{
    BONUS_SEVEN, BONUS_SEVEN_COUNT, BONUS_SIX, BONUS_SIX_COUNT, MAIN_FIVE, MAIN_FIVE_COUNT,
    MAIN_FOUR, MAIN_FOUR_COUNT, MAIN_THREE, MAIN_THREE_COUNT,
};

/// Base lists for the main game, indexed by tier
pub const MAIN_TIERS: [&[&str]; 3] = [MAIN_THREE, MAIN_FOUR, MAIN_FIVE];

/// Base lists for the bonus game, indexed by tier
pub const BONUS_TIERS: [&[&str]; 2] = [BONUS_SIX, BONUS_SEVEN];

/// Find the tier word that `scrambled` is a permutation of
///
/// Searches every main and bonus tier. Returns `None` if no word uses the
/// same letters.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::unscramble;
///
/// assert_eq!(unscramble("tanpl"), Some("plant"));
/// assert_eq!(unscramble("qqq"), None);
/// ```
#[must_use]
pub fn unscramble(scrambled: &str) -> Option<&'static str> {
    MAIN_TIERS
        .iter()
        .chain(BONUS_TIERS.iter())
        .flat_map(|list| list.iter().copied())
        .filter(|word| word.len() == scrambled.len())
        .find(|&word| Word::new(word).is_ok_and(|w| w.is_anagram_of(scrambled)))
}
