//! Word pools with no-repeat drawing
//!
//! A `WordBank` owns one pool per difficulty tier for both the main and the
//! bonus game. Drawing removes the word from its pool; `reset` refills every
//! pool from the immutable base lists.

use super::GameError;
use crate::core::{RoundKind, Word};
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{BONUS_TIERS, MAIN_TIERS};
use rand::Rng;
use tracing::{debug, warn};

/// Not-yet-drawn words of one tier
#[derive(Debug, Clone)]
pub struct WordPool {
    base: &'static [&'static str],
    remaining: Vec<Word>,
    rejected: usize,
}

impl WordPool {
    /// Pool over `base`; entries that are not valid words are logged and left out
    #[must_use]
    pub fn new(base: &'static [&'static str]) -> Self {
        let remaining = words_from_slice(base);
        Self {
            base,
            rejected: base.len() - remaining.len(),
            remaining,
        }
    }

    /// Restore the pool to a fresh copy of its base list
    pub fn reset(&mut self) {
        self.remaining = words_from_slice(self.base);
    }

    /// Base list entries that could not be used as words
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Remove and return a uniformly chosen word, or `None` if the pool is empty
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Word> {
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(idx))
    }

    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.remaining
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Per-tier word pools for the main and bonus games
#[derive(Debug, Clone)]
pub struct WordBank {
    main: Vec<WordPool>,
    bonus: Vec<WordPool>,
}

impl WordBank {
    /// Build a bank from explicit base lists
    #[must_use]
    pub fn new(main: &[&'static [&'static str]], bonus: &[&'static [&'static str]]) -> Self {
        Self {
            main: main.iter().map(|&base| WordPool::new(base)).collect(),
            bonus: bonus.iter().map(|&base| WordPool::new(base)).collect(),
        }
    }

    /// Bank over the embedded tier lists
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&MAIN_TIERS, &BONUS_TIERS)
    }

    /// Refill every pool from its base list
    pub fn reset(&mut self) {
        for pool in self.main.iter_mut().chain(self.bonus.iter_mut()) {
            pool.reset();
        }
    }

    /// Draw one word from `tier` of the `kind` pools, without replacement
    ///
    /// # Errors
    ///
    /// Returns `GameError::ExhaustedPool` if the tier has no words left, and
    /// `GameError::InvalidTier` if the tier does not exist.
    pub fn draw<R: Rng>(
        &mut self,
        kind: RoundKind,
        tier: usize,
        rng: &mut R,
    ) -> Result<Word, GameError> {
        let pool = self
            .pools_mut(kind)
            .get_mut(tier)
            .ok_or(GameError::InvalidTier { kind, tier })?;

        match pool.draw(rng) {
            Some(word) => {
                debug!(%kind, tier, remaining = pool.len(), "drew word");
                Ok(word)
            }
            None => {
                warn!(%kind, tier, "word pool exhausted");
                Err(GameError::ExhaustedPool { kind, tier })
            }
        }
    }

    /// Pool for a tier, if it exists
    #[must_use]
    pub fn pool(&self, kind: RoundKind, tier: usize) -> Option<&WordPool> {
        match kind {
            RoundKind::Main => self.main.get(tier),
            RoundKind::Bonus => self.bonus.get(tier),
        }
    }

    fn pools_mut(&mut self, kind: RoundKind) -> &mut [WordPool] {
        match kind {
            RoundKind::Main => &mut self.main,
            RoundKind::Bonus => &mut self.bonus,
        }
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::standard()
    }
}
