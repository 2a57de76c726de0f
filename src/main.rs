//! Console Mastermind (default binary).
//!
//! Reads guesses from stdin and prints feedback to stdout. Diagnostics go to
//! stderr and are silent unless `RUST_LOG` asks for them.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mastermind::term::{run, Console, ConsoleConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut console = Console::new(io::stdin().lock(), io::stdout(), ConsoleConfig::detect());
    let mut rng = rand::rng();

    let reason = run(&mut console, &mut rng)?;
    info!(?reason, "exiting");
    Ok(())
}
