//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data with no I/O, so the same types serve the
//! session logic, the terminal view and the tests.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DIGIT_COUNT` | 10 | Size of the alphabet (digits 0-9) |
//! | `MIN_DIFFICULTY` | 1 | Shortest secret key |
//! | `MAX_DIFFICULTY` | 10 | Longest secret key (every digit used once) |
//! | `DEFAULT_DIFFICULTY` | 4 | Used when the player just presses enter |
//!
//! # Examples
//!
//! ```
//! use mastermind_types::{Command, Difficulty, Mark, DEFAULT_DIFFICULTY};
//!
//! // An empty line selects the default difficulty
//! let difficulty = Difficulty::parse_input("").unwrap();
//! assert_eq!(difficulty.get(), DEFAULT_DIFFICULTY);
//!
//! // Control tokens are exact, case-sensitive matches
//! assert_eq!(Command::from_str("hint"), Some(Command::Hint));
//! assert_eq!(Command::from_str("HINT"), None);
//!
//! assert_eq!(Mark::Exact.as_str(), "exact");
//! ```

use std::fmt;
use std::num::IntErrorKind;

use derive_more::{Display, Error};

/// Number of distinct symbols a key can be built from (digits 0-9)
pub const DIGIT_COUNT: u8 = 10;

/// Smallest selectable difficulty
pub const MIN_DIFFICULTY: u8 = 1;

/// Largest selectable difficulty (a key using every digit once)
pub const MAX_DIFFICULTY: u8 = DIGIT_COUNT;

/// Difficulty used when the player submits an empty line
pub const DEFAULT_DIFFICULTY: u8 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_bounds_cover_the_whole_alphabet() {
        assert_eq!(MIN_DIFFICULTY, 1);
        assert_eq!(MAX_DIFFICULTY, 10);
        assert!((MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&DEFAULT_DIFFICULTY));
    }

    #[test]
    fn parse_empty_selects_default() {
        assert_eq!(Difficulty::parse_input(""), Ok(Difficulty::default()));
    }

    #[test]
    fn parse_whitespace_only_is_not_numeric() {
        assert_eq!(Difficulty::parse_input("   "), Err(DifficultyError::NotNumeric));
        assert_eq!(Difficulty::parse_input("\t"), Err(DifficultyError::NotNumeric));
    }

    #[test]
    fn parse_accepts_range_limits() {
        assert_eq!(Difficulty::parse_input("1").map(|d| d.get()), Ok(1));
        assert_eq!(Difficulty::parse_input(" 10 ").map(|d| d.get()), Ok(10));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(
            Difficulty::parse_input("four"),
            Err(DifficultyError::NotNumeric)
        );
        assert_eq!(
            Difficulty::parse_input("4.5"),
            Err(DifficultyError::NotNumeric)
        );
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(Difficulty::parse_input("0"), Err(DifficultyError::OutOfRange));
        assert_eq!(Difficulty::parse_input("11"), Err(DifficultyError::OutOfRange));
        assert_eq!(Difficulty::parse_input("-3"), Err(DifficultyError::OutOfRange));
        assert_eq!(
            Difficulty::parse_input("99999999999999999999999"),
            Err(DifficultyError::OutOfRange)
        );
    }

    #[test]
    fn command_tokens_are_case_sensitive() {
        for command in [Command::Hint, Command::NewGame, Command::Exit] {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
        assert_eq!(Command::from_str("Exit"), None);
        assert_eq!(Command::from_str("new game"), None);
        assert_eq!(Command::from_str("1234"), None);
    }

    #[test]
    fn error_messages_match_prompts() {
        assert_eq!(DifficultyError::NotNumeric.to_string(), "Enter only numeric value!");
        assert_eq!(DifficultyError::OutOfRange.to_string(), "Not in range!");
        assert_eq!(
            GuessError::WrongLength {
                expected: 4,
                actual: 3
            }
            .to_string(),
            "Expected guess length 4 got 3."
        );
        assert_eq!(GuessError::RepeatedDigit.to_string(), "Every digit must be unique.");
    }
}

/// Length of the secret key, chosen once per session.
///
/// Always within `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Create a difficulty, rejecting values outside the playable range
    pub fn new(level: u8) -> Option<Self> {
        (MIN_DIFFICULTY..=MAX_DIFFICULTY)
            .contains(&level)
            .then_some(Self(level))
    }

    /// Parse what the player typed at the difficulty prompt
    ///
    /// An empty line selects [`DEFAULT_DIFFICULTY`]. Otherwise surrounding
    /// whitespace is ignored, so a line of only spaces is not numeric.
    /// Integers that do not fit are reported as out of range rather than
    /// non-numeric.
    ///
    /// # Examples
    ///
    /// ```
    /// use mastermind_types::{Difficulty, DifficultyError};
    ///
    /// assert_eq!(Difficulty::parse_input("7").unwrap().get(), 7);
    /// assert_eq!(Difficulty::parse_input("x"), Err(DifficultyError::NotNumeric));
    /// assert_eq!(Difficulty::parse_input(""), Ok(Difficulty::default()));
    /// assert_eq!(Difficulty::parse_input("42"), Err(DifficultyError::OutOfRange));
    /// ```
    pub fn parse_input(input: &str) -> Result<Self, DifficultyError> {
        if input.is_empty() {
            return Ok(Self::default());
        }

        let value = match input.trim().parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                return Err(match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        DifficultyError::OutOfRange
                    }
                    _ => DifficultyError::NotNumeric,
                })
            }
        };

        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(DifficultyError::OutOfRange)
    }

    /// Raw difficulty level
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Number of digits in the secret key (and in every guess)
    pub fn key_len(&self) -> usize {
        self.0 as usize
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(DEFAULT_DIFFICULTY)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-position classification of a guessed digit
///
/// - **Exact**: same digit at the same position (shown green)
/// - **Present**: digit occurs in the key at another position (shown yellow)
/// - **Absent**: digit does not occur in the key (shown plain)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Exact => "exact",
            Mark::Present => "present",
            Mark::Absent => "absent",
        }
    }
}

/// Control tokens accepted at the guess prompt instead of a guess
///
/// None of these consume an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reveal one derived fact about the secret key
    Hint,
    /// Abandon the current session and start a fresh one
    NewGame,
    /// Leave the program
    Exit,
}

impl Command {
    /// Parse a control token (exact, case-sensitive match)
    ///
    /// # Examples
    ///
    /// ```
    /// use mastermind_types::Command;
    ///
    /// assert_eq!(Command::from_str("newgame"), Some(Command::NewGame));
    /// assert_eq!(Command::from_str("exit"), Some(Command::Exit));
    /// assert_eq!(Command::from_str("quit"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "hint" => Some(Command::Hint),
            "newgame" => Some(Command::NewGame),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }

    /// The token the player types
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Hint => "hint",
            Command::NewGame => "newgame",
            Command::Exit => "exit",
        }
    }
}

/// Rejected input at the difficulty prompt.
///
/// The display text is what the player sees before being asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DifficultyError {
    #[display("Enter only numeric value!")]
    NotNumeric,
    #[display("Not in range!")]
    OutOfRange,
}

/// Rejected guess submission. None of these consume an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// Empty input or a character other than an ASCII digit
    #[display("Must contain only numeric characters.")]
    NotNumeric,
    #[display("Expected guess length {expected} got {actual}.")]
    WrongLength { expected: usize, actual: usize },
    #[display("Every digit must be unique.")]
    RepeatedDigit,
    /// The session already reached an outcome
    #[display("The game is already over.")]
    SessionOver,
}
