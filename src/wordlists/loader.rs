//! Word list conversion utilities

use crate::core::Word;
use tracing::warn;

/// Convert embedded string slice to Word vector
///
/// Entries that are not valid words are skipped with a warning.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::MAIN_THREE;
///
/// let words = words_from_slice(MAIN_THREE);
/// assert_eq!(words.len(), MAIN_THREE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!(entry, %err, "skipping invalid word list entry");
                None
            }
        })
        .collect()
}
