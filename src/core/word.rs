//! Word representation
//!
//! A Word stores a lowercase puzzle word along with its letter multiset for anagram checks.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase ASCII word with letter count tracking
///
/// Letter counts let scrambles and guesses be checked as permutations without sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_counts: FxHashMap<u8, u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("Plant").unwrap();
    /// assert_eq!(word.text(), "plant");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("pl4nt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letter_counts = count_letters(&text);

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters (never true once constructed)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &FxHashMap<u8, u8> {
        &self.letter_counts
    }

    /// Whether `other` uses exactly the same letters as this word
    ///
    /// Comparison is case-insensitive; an identical string counts as an anagram.
    #[must_use]
    pub fn is_anagram_of(&self, other: &str) -> bool {
        let other = other.to_ascii_lowercase();
        other.len() == self.text.len() && count_letters(&other) == self.letter_counts
    }

    /// Whether a typed guess names this word
    ///
    /// Guesses are trimmed and compared case-insensitively. Anything else,
    /// including an empty guess, simply does not match.
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(&self.text)
    }
}

fn count_letters(text: &str) -> FxHashMap<u8, u8> {
    let mut counts = FxHashMap::default();
    for &ch in text.as_bytes() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("plant").unwrap();
        assert_eq!(word.text(), "plant");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PLANET").unwrap();
        assert_eq!(word.text(), "planet");

        let word2 = Word::new("PlAnEt").unwrap();
        assert_eq!(word2.text(), "planet");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("pl4nt").is_err()); // Number
        assert!(Word::new("pl nt").is_err()); // Space
        assert!(Word::new("plant!").is_err()); // Punctuation
        assert_eq!(Word::new("plänt"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("teacher").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b't'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'h'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_is_anagram_of() {
        let word = Word::new("stone").unwrap();
        assert!(word.is_anagram_of("notes"));
        assert!(word.is_anagram_of("ONSET"));
        assert!(word.is_anagram_of("stone"));
        assert!(!word.is_anagram_of("stones"));
        assert!(!word.is_anagram_of("stane"));
    }

    #[test]
    fn word_is_anagram_respects_duplicates() {
        let word = Word::new("teacher").unwrap();
        assert!(word.is_anagram_of("cheater"));
        assert!(!word.is_anagram_of("teachrr"));
    }

    #[test]
    fn word_matches_guess() {
        let word = Word::new("cloud").unwrap();
        assert!(word.matches_guess("cloud"));
        assert!(word.matches_guess("CLOUD"));
        assert!(word.matches_guess("  Cloud "));
        assert!(!word.matches_guess("could"));
        assert!(!word.matches_guess(""));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("train").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
