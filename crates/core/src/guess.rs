//! Guess module - validation of player-submitted digit strings
//!
//! A guess is accepted only if it is purely numeric, exactly as long as the
//! secret key, and uses every digit at most once. Checks run in that order
//! and the first failure is reported.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Difficulty, GuessError, DIGIT_COUNT};

/// Longest possible digit sequence (every digit once)
pub const KEY_CAPACITY: usize = DIGIT_COUNT as usize;

/// Stack-only storage for a sequence of unique digits
pub type Digits = ArrayVec<u8, KEY_CAPACITY>;

/// A validated guess: `difficulty` unique digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    digits: Digits,
}

impl Guess {
    /// Validate raw input against the session difficulty
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(input: &str, difficulty: Difficulty) -> Result<Self, GuessError> {
        let input = input.trim();
        if !is_numeric(input) {
            return Err(GuessError::NotNumeric);
        }

        let expected = difficulty.key_len();
        // ASCII-only at this point, so bytes == chars.
        if input.len() != expected {
            return Err(GuessError::WrongLength {
                expected,
                actual: input.len(),
            });
        }

        let digits = parse_unique_digits(input)?;
        Ok(Self { digits })
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
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Convert an all-digit string into digits, rejecting repeats.
///
/// Returns `NotNumeric` for anything but ASCII digits; a string longer than
/// ten digits always contains a repeat.
pub(crate) fn parse_unique_digits(input: &str) -> Result<Digits, GuessError> {
    if !is_numeric(input) {
        return Err(GuessError::NotNumeric);
    }

    let mut seen = [false; KEY_CAPACITY];
    let mut digits = Digits::new();
    for b in input.bytes() {
        let digit = b - b'0';
        if seen[digit as usize] {
            return Err(GuessError::RepeatedDigit);
        }
        seen[digit as usize] = true;
        digits.push(digit);
    }
    Ok(digits)
}

pub(crate) fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for d in digits {
        write!(f, "{d}")?;
    }
    Ok(())
}
