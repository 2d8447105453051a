//! seqmatch: regular-expression-style matching over sequences of typed
//! elements, driven by predicates instead of characters.
//!
//! # Example
//!
//! ```
//! use seqmatch::{Predicate, query};
//!
//! let is = |c: char| Predicate::equal_to(c);
//!
//! let matcher = query::literal(is('a'))
//!     .zero_or_more(is('b'))
//!     .then(is('c'))
//!     .compile()
//!     .expect("default limits");
//!
//! assert!(matcher.matches(&['a', 'b', 'b', 'c']));
//! assert!(matcher.matches(&['a', 'c']));
//! assert!(!matcher.matches(&['a', 'b']));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Query (immutable fragments) → GraphBuilder → Automaton (frozen arena) → SequenceMatcher
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod engine;
pub mod graph;
pub mod query;

#[cfg(test)]
mod compile_tests;

pub use compile::{CompileBuilder, CompileLimits};
pub use engine::{Frontier, NoopTracer, PrintTracer, SequenceMatcher, Tracer};
pub use graph::{Automaton, State, StateId};
pub use query::Query;
pub use seqmatch_core::{Colors, Context, Match, Predicate};

/// Errors raised while building or compiling a query.
///
/// Matching itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `any_of` was given no branches.
    #[error("alternation needs at least one branch")]
    EmptyAlternation,

    /// `sequence` was given no elements.
    #[error("sequence needs at least one element")]
    EmptySequence,

    /// The automaton would grow past `CompileLimits::max_states`.
    #[error("automaton state limit of {limit} exceeded")]
    StateLimitExceeded { limit: u32 },

    /// The query is nested deeper than `CompileLimits::recursion_limit`.
    #[error("query nesting limit of {limit} exceeded")]
    RecursionLimitExceeded { limit: u32 },
}

/// Result type for query construction and compilation.
pub type Result<T> = std::result::Result<T, Error>;
