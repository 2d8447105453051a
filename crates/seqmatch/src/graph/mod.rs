//! Compiled automaton graph.
//!
//! States live in a flat arena addressed by [`StateId`]. Slot 0 is always
//! the terminal state. The builder is the only code that allocates or
//! patches states; once [`GraphBuilder::finish`] returns, the arena is a
//! frozen [`Automaton`].
//!
//! # Architecture
//!
//! ```text
//! Fragment tree → GraphBuilder (continuation-passing) → Automaton
//! ```

mod automaton;
mod build;
mod dump;
mod invariants;
mod state;


pub use automaton::Automaton;
pub(crate) use build::GraphBuilder;
pub use dump::GraphPrinter;
pub use state::{State, StateId};
