//! Execution engine.
//!
//! Simulates a compiled automaton over an input sequence by tracking every
//! live state at once. Matching is total: the whole input must be consumed
//! and the terminal state must be live at the end.

mod frontier;
mod matcher;
mod trace;

#[cfg(test)]
mod engine_tests;

pub use frontier::Frontier;
pub use matcher::SequenceMatcher;
pub use trace::{NoopTracer, PrintTracer, Tracer};
