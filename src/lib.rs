//! Mastermind (workspace facade crate).
//!
//! Re-exports the game crates under `mastermind::{core,term,types}` so the
//! binary, integration tests and benchmarks share one import path.

pub use mastermind_core as core;
pub use mastermind_term as term;
pub use mastermind_types as types;
