//! Compilation settings.

use seqmatch_core::Predicate;

use crate::Result;
use crate::engine::SequenceMatcher;
use crate::graph::GraphBuilder;
use crate::query::Query;

/// Compile-time limits.
///
/// Nested `one_or_more` doubles its body each level, so a small query can
/// ask for a very large automaton. These bounds turn that into an error.
#[derive(Clone, Copy, Debug)]
pub struct CompileLimits {
    /// Maximum arena size, terminal included (default: 1,000,000).
    pub(crate) max_states: u32,
    /// Maximum fragment nesting depth (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for CompileLimits {
    fn default() -> Self {
        Self {
            max_states: 1_000_000,
            recursion_limit: 1024,
        }
    }
}

impl CompileLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of automaton states.
    pub fn max_states(mut self, max: u32) -> Self {
        self.max_states = max;
        self
    }

    /// Set the maximum nesting depth.
    ///
    /// Concatenation chains do not nest; alternations and repetitions do.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_max_states(&self) -> u32 {
        self.max_states
    }
    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Builder for [`SequenceMatcher`] instances.
pub struct CompileBuilder<'q, T> {
    query: &'q Query<T>,
    ignore: Predicate<T>,
    limits: CompileLimits,
}

impl<'q, T: 'static> CompileBuilder<'q, T> {
    /// Start from the defaults: nothing ignored, default limits.
    pub fn new(query: &'q Query<T>) -> Self {
        Self {
            query,
            ignore: Predicate::never(),
            limits: CompileLimits::default(),
        }
    }

    /// Skip elements accepted by `ignore` instead of feeding them to the
    /// automaton.
    pub fn ignoring(mut self, ignore: Predicate<T>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Set all limits at once.
    pub fn limits(mut self, limits: CompileLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum number of automaton states.
    pub fn max_states(mut self, max: u32) -> Self {
        self.limits = self.limits.max_states(max);
        self
    }

    /// Set the maximum nesting depth.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    /// Build the automaton and wrap it in a matcher.
    pub fn build(self) -> Result<SequenceMatcher<T>> {
        let automaton = GraphBuilder::compile(self.query.fragment(), self.limits)?;
        Ok(SequenceMatcher::new(automaton, self.ignore))
    }
}
