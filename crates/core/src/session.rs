//! Game session module - one secret key from generation to outcome
//!
//! The session owns the key, the attempt counter and the lazily derived
//! hints. It is a small state machine:
//!
//! ```text
//! AwaitingGuess --submit--> (evaluate) --> AwaitingGuess
//!                                      \-> Finished(Won | Lost)
//! ```
//!
//! Evaluation happens inside a single [`GameSession::submit`] call, so it is
//! never observable as a separate phase.

use rand::Rng;
use tracing::{debug, info};

use crate::feedback::{compute_max_attempts, evaluate_guess, Feedback};
use crate::guess::Guess;
use crate::hints::{Hint, Hints};
use crate::secret::SecretKey;
use crate::types::{Difficulty, GuessError};

/// Terminal result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key was guessed exactly
    Won { secret: SecretKey, attempts: u32 },
    /// The attempt limit was reached without an exact guess
    Lost { secret: SecretKey },
}

impl Outcome {
    pub fn secret(&self) -> &SecretKey {
        match self {
            Outcome::Won { secret, .. } | Outcome::Lost { secret } => secret,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    Finished(Outcome),
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub feedback: Feedback,
    /// Attempt number this guess used (1-based)
    pub attempt: u32,
    /// Set when this guess ended the session
    pub outcome: Option<Outcome>,
}

/// One game: a secret key and the player's progress against it
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    secret: SecretKey,
    max_attempts: u32,
    attempts: u32,
    hints: Option<Hints>,
    phase: Phase,
}

impl GameSession {
    /// Start a session with a freshly generated key
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::with_secret(SecretKey::generate(difficulty, rng))
    }

    /// Start a session against a known key; difficulty follows its length
    pub fn with_secret(secret: SecretKey) -> Self {
        let difficulty = secret.difficulty();
        let max_attempts = compute_max_attempts(difficulty);
        info!(%difficulty, max_attempts, "session started");

        Self {
            difficulty,
            secret,
            max_attempts,
            attempts: 0,
            hints: None,
            phase: Phase::AwaitingGuess,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts - self.attempts
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::AwaitingGuess => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn hints_generated(&self) -> bool {
        self.hints.is_some()
    }

    /// Validate and evaluate one guess.
    ///
    /// Rejected input leaves the session untouched. An accepted guess uses
    /// one attempt and is always evaluated, even the one that exhausts the
    /// limit; an exact match wins regardless of the counter.
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.is_finished() {
            return Err(GuessError::SessionOver);
        }

        let guess = Guess::parse(input, self.difficulty)?;
        self.attempts += 1;

        let feedback = evaluate_guess(&guess, &self.secret);
        let outcome = if feedback.is_solved() {
            Some(Outcome::Won {
                secret: self.secret.clone(),
                attempts: self.attempts,
            })
        } else if self.attempts >= self.max_attempts {
            Some(Outcome::Lost {
                secret: self.secret.clone(),
            })
        } else {
            None
        };

        debug!(
            attempt = self.attempts,
            %guess,
            finished = outcome.is_some(),
            "guess evaluated"
        );

        if let Some(outcome) = &outcome {
            self.phase = Phase::Finished(outcome.clone());
        }

        Ok(Turn {
            feedback,
            attempt: self.attempts,
            outcome,
        })
    }

    /// Return one derived fact about the key. Never uses an attempt.
    pub fn request_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Hint {
        let hints = self.hints.get_or_insert_with(|| {
            debug!("hints derived");
            Hints::derive(&self.secret)
        });
        hints.pick(rng)
    }
}
