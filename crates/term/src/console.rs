//! Console: line-based terminal I/O for the game.
//!
//! Output is encoded into an internal buffer with crossterm commands and
//! flushed once per line or prompt. Input is read a line at a time from any
//! `BufRead`, so tests can script a whole game with an in-memory cursor.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::view::{Line, Tone};

/// Presentation switches for a console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Emit color escape sequences
    pub styled: bool,
    /// Clear the screen when a new session starts
    pub clear_screen: bool,
}

impl ConsoleConfig {
    /// Style and clear only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        let tty = io::stdout().is_terminal();
        Self {
            styled: tty,
            clear_screen: tty,
        }
    }

    /// Plain text, no escape sequences at all.
    pub fn plain() -> Self {
        Self {
            styled: false,
            clear_screen: false,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::detect()
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config
    }

    /// Write one line followed by a newline.
    pub fn show(&mut self, line: &Line) -> Result<()> {
        self.buf.clear();
        encode_line_into(line, self.config.styled, &mut self.buf)?;
        self.buf.push(b'\n');
        self.flush_buf()
    }

    pub fn show_all(&mut self, lines: &[Line]) -> Result<()> {
        for line in lines {
            self.show(line)?;
        }
        Ok(())
    }

    /// Write a prompt (no newline) and read the answer.
    ///
    /// Returns `None` once input is exhausted. The line terminator is
    /// stripped; other whitespace is left for the caller.
    pub fn prompt(&mut self, line: &Line) -> Result<Option<String>> {
        self.buf.clear();
        encode_line_into(line, self.config.styled, &mut self.buf)?;
        self.flush_buf()?;
        self.read_line()
    }

    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        let trimmed = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(trimmed);
        Ok(Some(answer))
    }

    /// Clear the screen and home the cursor (no-op unless enabled).
    pub fn clear(&mut self) -> Result<()> {
        if !self.config.clear_screen {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.output.write_all(&self.buf)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Foreground color for a tone; `None` keeps the terminal default.
pub fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Exact => Some(Color::Green),
        Tone::Present | Tone::Warning => Some(Color::Yellow),
        Tone::Title => Some(Color::Magenta),
        Tone::Info => Some(Color::Cyan),
        Tone::Hint => Some(Color::Blue),
        Tone::Error => Some(Color::Red),
    }
}

/// Encode a line (without trailing newline) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_line_into(line: &Line, styled: bool, out: &mut Vec<u8>) -> Result<()> {
    for span in &line.spans {
        match tone_color(span.tone).filter(|_| styled) {
            Some(color) => {
                out.queue(SetForegroundColor(color))?;
                out.queue(Print(&span.text))?;
                out.queue(ResetColor)?;
            }
            None => {
                out.queue(Print(&span.text))?;
            }
        }
    }
    Ok(())
}
