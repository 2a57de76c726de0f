//! Secret key module - random key generation
//!
//! The key is drawn from the ten digits without replacement: a partial
//! shuffle of the digit pool leaves a uniformly random `n`-permutation in the
//! chosen slice.
//!
//! The RNG is always passed in, so tests can use a seeded generator and get
//! the same key every run.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::guess::{parse_unique_digits, write_digits, Digits, KEY_CAPACITY};
use crate::types::{Difficulty, GuessError};

/// The hidden sequence of unique digits the player has to find
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretKey {
    digits: Digits,
}

impl SecretKey {
    /// Generate a key of `difficulty` unique digits
    pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let mut pool: [u8; KEY_CAPACITY] = std::array::from_fn(|i| i as u8);
        let (chosen, _) = pool.partial_shuffle(rng, difficulty.key_len());

        Self {
            digits: chosen.iter().copied().collect(),
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Difficulty implied by the key length
    pub fn difficulty(&self) -> Difficulty {
        // Length is always 1..=10, see FromStr and generate().
        Difficulty::new(self.digits.len() as u8).unwrap_or_default()
    }

    /// Check whether a digit appears anywhere in the key
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }
}

impl FromStr for SecretKey {
    type Err = GuessError;

    /// Build a known key, e.g. `"1234"`. Digits must be unique.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = parse_unique_digits(s.trim())?;
        Ok(Self { digits })
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

/// Generate a secret key for the given difficulty
pub fn generate_key<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> SecretKey {
    SecretKey::generate(difficulty, rng)
}
