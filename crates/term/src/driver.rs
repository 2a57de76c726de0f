//! Driver: the single top-level game loop.
//!
//! One loop iteration is one session: greet, ask for a difficulty, play
//! until an outcome, offer a replay. `newgame` and an accepted replay both
//! go back to the top of the loop with a brand-new session, so sessions
//! never nest.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info};

use crate::console::Console;
use crate::core::{GameSession, Outcome};
use crate::types::{Command, Difficulty};
use crate::view;

/// Why [`run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player typed `exit`
    Quit,
    /// The player answered anything but `y` to the replay prompt
    Declined,
    /// Input was closed
    EndOfInput,
}

/// How one session ended
#[derive(Debug)]
enum SessionEnd {
    Finished(Outcome),
    Restart,
    Quit,
    EndOfInput,
}

/// Play sessions until the player leaves.
pub fn run<R, W, G>(console: &mut Console<R, W>, rng: &mut G) -> Result<ExitReason>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        console.clear()?;
        console.show_all(&view::welcome())?;

        let Some(difficulty) = ask_difficulty(console)? else {
            return Ok(ExitReason::EndOfInput);
        };

        let mut session = GameSession::new(difficulty, rng);
        console.show_all(&view::key_generated())?;

        match play(console, &mut session, rng)? {
            SessionEnd::Restart => {
                info!("new game requested");
            }
            SessionEnd::Quit => {
                console.show(&view::farewell())?;
                return Ok(ExitReason::Quit);
            }
            SessionEnd::EndOfInput => return Ok(ExitReason::EndOfInput),
            SessionEnd::Finished(outcome) => {
                info!(won = outcome.is_won(), attempts = session.attempts(), "session finished");
                console.show_all(&view::outcome(&outcome))?;

                match console.prompt(&view::replay_prompt())? {
                    Some(answer) if wants_replay(&answer) => {
                        info!("replay accepted");
                    }
                    Some(_) => return Ok(ExitReason::Declined),
                    None => return Ok(ExitReason::EndOfInput),
                }
            }
        }
    }
}

/// Ask until a valid difficulty is entered. `None` on end of input.
pub fn ask_difficulty<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Difficulty>> {
    loop {
        let Some(answer) = console.prompt(&view::difficulty_prompt())? else {
            return Ok(None);
        };

        match Difficulty::parse_input(&answer) {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(e) => {
                debug!(input = %answer, error = %e, "difficulty rejected");
                console.show(&view::difficulty_error(&e))?;
            }
        }
    }
}

fn play<R, W, G>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
    rng: &mut G,
) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        let Some(line) = console.prompt(&view::guess_prompt())? else {
            return Ok(SessionEnd::EndOfInput);
        };
        let input = line.trim();

        match Command::from_str(input) {
            Some(Command::Hint) => {
                let hint = session.request_hint(rng);
                console.show(&view::hint(&hint))?;
                continue;
            }
            Some(Command::NewGame) => {
                console.show(&view::restarting())?;
                return Ok(SessionEnd::Restart);
            }
            Some(Command::Exit) => return Ok(SessionEnd::Quit),
            None => {}
        }

        match session.submit(input) {
            Ok(turn) => match turn.outcome {
                Some(outcome) => {
                    // No remark for the winning guess.
                    if !outcome.is_won() {
                        console.show(&view::remark(&turn.feedback))?;
                    }
                    return Ok(SessionEnd::Finished(outcome));
                }
                None => console.show(&view::remark(&turn.feedback))?,
            },
            Err(e) => {
                debug!(%input, error = %e, "guess rejected");
                console.show(&view::guess_error(&e))?;
            }
        }
    }
}

fn wants_replay(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
