//! GameView: builds the text the player sees, without touching a terminal.
//!
//! Everything here returns [`Line`]s of tagged [`Span`]s. Mapping a
//! [`Tone`] to an actual color happens in the console, so these functions
//! can be asserted on directly in tests.

use std::borrow::Cow;

use crate::core::{Feedback, Hint, Outcome};
use crate::types::{DifficultyError, GuessError, Mark, DEFAULT_DIFFICULTY};

/// Semantic styling of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    /// Digit at the right position
    Exact,
    /// Digit in the key, wrong position
    Present,
    Title,
    Info,
    Hint,
    Error,
    Warning,
}

impl From<Mark> for Tone {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Exact => Tone::Exact,
            Mark::Present => Tone::Present,
            Mark::Absent => Tone::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: Cow<'static, str>,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<Cow<'static, str>>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

/// One line of output (or a prompt, which is written without a newline)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn styled(text: impl Into<Cow<'static, str>>, tone: Tone) -> Self {
        Self::new(vec![Span::new(text, tone)])
    }

    pub fn blank() -> Self {
        Self::default()
    }

    fn plain_text(text: &'static str) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    /// Concatenated text without styling
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_ref()).collect()
    }
}

/// Greeting and help shown at the start of every session
pub fn welcome() -> Vec<Line> {
    let item = |spans: Vec<Span>| {
        let mut all = vec![Span::plain("    ")];
        all.extend(spans);
        Line::new(all)
    };

    vec![
        Line::new(vec![
            Span::plain("\t\t"),
            Span::new("Welcome to the classic game Mastermind!", Tone::Title),
            Span::plain(" 🧠"),
        ]),
        Line::blank(),
        Line::styled("HELP:", Tone::Info),
        item(vec![Span::plain("number: not present in key,")]),
        item(vec![
            Span::new("number", Tone::Present),
            Span::plain(": present in key,"),
        ]),
        item(vec![
            Span::new("number", Tone::Exact),
            Span::plain(": present and in correct location in key."),
        ]),
        item(vec![
            Span::new("hint", Tone::Hint),
            Span::plain(": to receive a hint about the secret key,"),
        ]),
        item(vec![
            Span::new("newgame", Tone::Hint),
            Span::plain(": to start a new game,"),
        ]),
        item(vec![
            Span::new("exit", Tone::Hint),
            Span::plain(": to exit the game,"),
        ]),
        item(vec![Span::new("No digits are repeated.", Tone::Error)]),
        Line::blank(),
        Line::styled("Good Luck! 👍", Tone::Info),
        Line::blank(),
        Line::styled(
            format!("Press enter to continue with default difficulty level: {DEFAULT_DIFFICULTY}"),
            Tone::Info,
        ),
    ]
}

pub fn difficulty_prompt() -> Line {
    Line::new(vec![Span::plain("Enter difficulty (1-10): ")])
}

pub fn difficulty_error(err: &DifficultyError) -> Line {
    Line::styled(err.to_string(), Tone::Error)
}

pub fn key_generated() -> Vec<Line> {
    vec![Line::styled("Key Generated.", Tone::Title), Line::blank()]
}

pub fn guess_prompt() -> Line {
    Line::new(vec![Span::new("Enter guess:", Tone::Info), Span::plain(" ")])
}

pub fn guess_error(err: &GuessError) -> Line {
    Line::styled(err.to_string(), Tone::Error)
}

/// `Remark: ` followed by each guessed digit colored by its mark
pub fn remark(feedback: &Feedback) -> Line {
    let mut spans = vec![Span::plain("Remark: ")];
    for &(digit, mark) in feedback.entries() {
        spans.push(Span::new(digit.to_string(), mark.into()));
        spans.push(Span::plain(" "));
    }
    Line::new(spans)
}

pub fn hint(hint: &Hint) -> Line {
    Line::styled(hint.to_string(), Tone::Hint)
}

pub fn outcome(outcome: &Outcome) -> Vec<Line> {
    let mut lines = match outcome {
        Outcome::Won { secret, .. } => vec![Line::styled(
            format!("Secret key unveiled: {secret} !"),
            Tone::Exact,
        )],
        Outcome::Lost { secret } => vec![
            Line::blank(),
            Line::styled("Uh Oh! Max attempts reached! o_o", Tone::Warning),
            Line::styled(format!("The secret key was `{secret}`"), Tone::Warning),
        ],
    };
    lines.push(Line::blank());
    lines.push(Line::styled("Great Guessing! （*＾-＾*）", Tone::Info));
    lines
}

pub fn replay_prompt() -> Line {
    Line::new(vec![
        Span::new("Replay? (y/N):", Tone::Title),
        Span::plain(" "),
    ])
}

/// Acknowledges `newgame`
pub fn restarting() -> Line {
    Line::plain_text("Ok!")
}

pub fn farewell() -> Line {
    Line::plain_text("👋")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, SecretKey};

    fn feedback_for(secret: &str, guess: &str) -> Feedback {
        let mut session = GameSession::with_secret(secret.parse::<SecretKey>().unwrap());
        session.submit(guess).unwrap().feedback
    }

    #[test]
    fn remark_colors_each_digit() {
        let line = remark(&feedback_for("1234", "1243"));
        assert_eq!(line.text(), "Remark: 1 2 4 3 ");

        let tones: Vec<Tone> = line
            .spans
            .iter()
            .filter(|s| s.text.trim().len() == 1)
            .map(|s| s.tone)
            .collect();
        assert_eq!(tones, [Tone::Exact, Tone::Exact, Tone::Present, Tone::Present]);
    }

    #[test]
    fn remark_absent_digits_are_plain() {
        let line = remark(&feedback_for("5678", "1234"));
        assert_eq!(line.text(), "Remark: 1 2 3 4 ");
        assert!(line.spans.iter().all(|s| s.tone == Tone::Plain));
    }

    #[test]
    fn outcome_lines_reveal_key() {
        let secret: SecretKey = "0413".parse().unwrap();

        let won = outcome(&Outcome::Won {
            secret: secret.clone(),
            attempts: 3,
        });
        assert_eq!(won[0].text(), "Secret key unveiled: 0413 !");

        let lost = outcome(&Outcome::Lost { secret });
        let text: Vec<String> = lost.iter().map(Line::text).collect();
        assert!(text.contains(&"Uh Oh! Max attempts reached! o_o".to_string()));
        assert!(text.contains(&"The secret key was `0413`".to_string()));
    }

    #[test]
    fn error_lines_use_error_tone() {
        let line = guess_error(&GuessError::WrongLength {
            expected: 4,
            actual: 2,
        });
        assert_eq!(line.text(), "Expected guess length 4 got 2.");
        assert_eq!(line.spans[0].tone, Tone::Error);

        let line = difficulty_error(&DifficultyError::OutOfRange);
        assert_eq!(line.text(), "Not in range!");
    }

    #[test]
    fn welcome_mentions_commands_and_default() {
        let text: String = welcome().iter().map(|l| l.text() + "\n").collect();
        for token in ["hint", "newgame", "exit", "default difficulty level: 4"] {
            assert!(text.contains(token), "missing {token}");
        }
    }
}
