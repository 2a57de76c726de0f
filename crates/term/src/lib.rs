//! Terminal I/O module.
//!
//! A small, line-oriented presentation layer for the console game. The core
//! never prints; this crate turns its results into colored text and drives
//! the prompt loop.
//!
//! - [`view`]: pure functions building styled lines (easy to test)
//! - [`console`]: reads lines and writes styled lines via crossterm
//! - [`driver`]: the top-level session loop

pub mod console;
pub mod driver;
pub mod view;

pub use mastermind_core as core;
pub use mastermind_types as types;

pub use console::{encode_line_into, tone_color, Console, ConsoleConfig};
pub use driver::{ask_difficulty, run, ExitReason};
pub use view::{Line, Span, Tone};
