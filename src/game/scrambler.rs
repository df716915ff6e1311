//! Word scrambling
//!
//! Produces a uniformly shuffled permutation of a word that differs from the word itself.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

/// Shuffles attempted before giving up on finding a differing permutation
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 100;

/// Scramble `word` into a permutation of its letters
///
/// Uses a Fisher-Yates shuffle and reshuffles until the result differs from
/// the input. Words of length 0 or 1, and words whose letters are all the
/// same, have no differing permutation; after [`MAX_SCRAMBLE_ATTEMPTS`]
/// shuffles the last attempt is returned (equal to the input in those cases).
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::game::scramble;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble("plant", &mut rng);
/// assert_ne!(scrambled, "plant");
/// assert_eq!(scrambled.len(), 5);
/// ```
pub fn scramble<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() <= 1 {
        return word.to_string();
    }

    for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return candidate;
        }
    }

    warn!(word, "no differing permutation found");
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{BONUS_TIERS, MAIN_TIERS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn scramble_is_permutation_and_differs() {
        let mut rng = StdRng::seed_from_u64(42);

        for &word in MAIN_TIERS.iter().chain(BONUS_TIERS.iter()).flat_map(|l| l.iter()) {
            let scrambled = scramble(word, &mut rng);
            assert_ne!(scrambled, word);
            assert!(Word::new(word).unwrap().is_anagram_of(&scrambled));
        }
    }

    #[test]
    fn two_letter_words_swap() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble("ab", &mut rng), "ba");
    }

    #[test]
    fn short_words_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble("a", &mut rng), "a");
        assert_eq!(scramble("", &mut rng), "");
    }

    #[test]
    fn fixed_point_words_fall_back_to_input() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble("aaaa", &mut rng), "aaaa");
    }

    #[test]
    fn repeated_letters_still_scramble() {
        let mut rng = StdRng::seed_from_u64(3);
        let scrambled = scramble("aab", &mut rng);
        assert_ne!(scrambled, "aab");
        assert!(scrambled == "aba" || scrambled == "baa");
    }

    #[test]
    fn permutations_are_roughly_uniform() {
        // "abc" has five non-identity permutations; each should appear about 1/5 of the time
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts: HashMap<String, usize> = HashMap::new();
        let trials = 5_000;

        for _ in 0..trials {
            *counts.entry(scramble("abc", &mut rng)).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 5);
        for (perm, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "permutation {perm} appeared {count} times"
            );
        }
    }
}
