//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and session state. It has **zero
//! dependencies** on terminal I/O, which makes it:
//!
//! - **Deterministic**: Randomness comes from a caller-supplied RNG, so a
//!   seeded generator reproduces the same key and hints
//! - **Testable**: Every rule is covered by unit tests next to its code
//! - **Portable**: The terminal layer is just one possible front end
//!
//! # Module Structure
//!
//! - [`secret`]: Uniform generation of keys of unique digits
//! - [`guess`]: Validation of player input into a [`Guess`]
//! - [`feedback`]: Per-position evaluation and the attempt limit
//! - [`hints`]: Sum / product / range facts about the key
//! - [`session`]: The [`GameSession`] state machine tying it all together
//!
//! # Game Rules
//!
//! - The key has `difficulty` digits (1-10), no digit repeated
//! - Guesses must be numeric, of the key's length, and without repeats
//! - Each guessed digit is marked exact, present or absent
//! - The player gets `10 * 9 * ... * (10 - difficulty + 1)` attempts
//! - Hints never use an attempt
//!
//! # Example
//!
//! ```
//! use mastermind_core::{GameSession, SecretKey};
//! use mastermind_types::Mark;
//!
//! let secret: SecretKey = "1234".parse().unwrap();
//! let mut session = GameSession::with_secret(secret);
//!
//! let turn = session.submit("1243").unwrap();
//! let marks: Vec<Mark> = turn.feedback.marks().collect();
//! assert_eq!(marks, [Mark::Exact, Mark::Exact, Mark::Present, Mark::Present]);
//!
//! let turn = session.submit("1234").unwrap();
//! assert!(turn.outcome.unwrap().is_won());
//! ```

pub mod feedback;
pub mod guess;
pub mod hints;
pub mod secret;
pub mod session;

pub use mastermind_types as types;

// Re-export commonly used types for convenience
pub use feedback::{compute_max_attempts, evaluate_guess, Feedback};
pub use guess::Guess;
pub use hints::{Hint, Hints};
pub use secret::{generate_key, SecretKey};
pub use session::{GameSession, Outcome, Phase, Turn};
