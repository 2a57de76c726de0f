//! Feedback module - guess evaluation and attempt limits
//!
//! Each guessed digit is classified independently:
//! - same digit at the same position in the key -> [`Mark::Exact`]
//! - digit somewhere else in the key -> [`Mark::Present`]
//! - digit not in the key -> [`Mark::Absent`]
//!
//! Because both guess and key have unique digits there is no multiset
//! bookkeeping: a digit is present at most once on each side.

use arrayvec::ArrayVec;

use crate::guess::{Guess, KEY_CAPACITY};
use crate::secret::SecretKey;
use crate::types::{Difficulty, Mark, DIGIT_COUNT};

/// Maximum number of guesses for a difficulty.
///
/// Falling factorial `10 * 9 * ... * (10 - d + 1)`, i.e. the number of
/// distinct keys of that length.
pub fn compute_max_attempts(difficulty: Difficulty) -> u32 {
    let lowest = DIGIT_COUNT - difficulty.get() + 1;
    (lowest..=DIGIT_COUNT).map(u32::from).product()
}

/// Per-position result of one evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    entries: ArrayVec<(u8, Mark), KEY_CAPACITY>,
}

impl Feedback {
    /// Guessed digits paired with their marks, in position order
    pub fn entries(&self) -> &[(u8, Mark)] {
        &self.entries
    }

    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.entries.iter().map(|&(_, mark)| mark)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.marks().filter(|&m| m == mark).count()
    }

    /// Every position is exact
    pub fn is_solved(&self) -> bool {
        !self.entries.is_empty() && self.marks().all(|m| m == Mark::Exact)
    }
}

/// Classify every position of `guess` against `secret`
pub fn evaluate_guess(guess: &Guess, secret: &SecretKey) -> Feedback {
    debug_assert_eq!(guess.len(), secret.len());

    let entries = guess
        .digits()
        .iter()
        .zip(secret.digits())
        .map(|(&g, &s)| {
            let mark = if g == s {
                Mark::Exact
            } else if secret.contains(g) {
                Mark::Present
            } else {
                Mark::Absent
            };
            (g, mark)
        })
        .collect();

    Feedback { entries }
}
