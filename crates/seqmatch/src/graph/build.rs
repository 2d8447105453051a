//! Continuation-passing construction of the automaton.
//!
//! Each fragment is compiled against `next`, the state to enter once the
//! fragment has matched, and returns the state that begins it:
//!
//! ```text
//! Literal(p)   → Consume(p) → next
//! Concat(a, b) → a → b → next           (b built first)
//! Or(a, b)     → Choice(a → next, b → next)
//! Repeat(r)    → placeholder → Choice(r → placeholder, next)
//! Plus(r)      → r → Repeat(r)
//! ```
//!
//! Repeat is the only construct that needs back-patching:
//!
//! ```text
//!           ┌──────────── r ←────────┐
//!           ↓                        │
//! entry ─→ placeholder ─→ loop ──────┘
//!                          │
//!                          └─→ next
//! ```

use seqmatch_core::Predicate;

use crate::compile::CompileLimits;
use crate::query::Fragment;
use crate::{Error, Result};

use super::{Automaton, State, StateId};

/// Mutable arena used while compiling one query.
pub(crate) struct GraphBuilder<T> {
    states: Vec<State<T>>,
    limits: CompileLimits,
    depth: u32,
}

impl<T> GraphBuilder<T> {
    pub fn new(limits: CompileLimits) -> Self {
        Self {
            states: vec![State::Terminal],
            limits,
            depth: 0,
        }
    }

    fn add(&mut self, state: State<T>) -> Result<StateId> {
        let limit = self.limits.get_max_states();
        if self.states.len() >= limit as usize {
            return Err(Error::StateLimitExceeded { limit });
        }
        let id = StateId::from_index(self.states.len());
        self.states.push(state);
        Ok(id)
    }

    fn add_consume(&mut self, predicate: Predicate<T>, next: StateId) -> Result<StateId> {
        self.add(State::Consume { predicate, next })
    }

    fn add_choice(&mut self, left: StateId, right: StateId) -> Result<StateId> {
        self.add(State::Choice {
            left: Some(left),
            right: Some(right),
        })
    }

    /// Compile `fragment` so that it continues into `next`.
    ///
    /// Returns the entry state of the fragment.
    pub fn build(&mut self, fragment: &Fragment<T>, next: StateId) -> Result<StateId> {
        let limit = self.limits.get_recursion_limit();
        if self.depth >= limit {
            return Err(Error::RecursionLimitExceeded { limit });
        }
        self.depth += 1;
        let entry = self.build_inner(fragment, next);
        self.depth -= 1;
        entry
    }

    fn build_inner(&mut self, fragment: &Fragment<T>, next: StateId) -> Result<StateId> {
        match fragment {
            Fragment::Literal(predicate) => self.add_consume(predicate.clone(), next),
            Fragment::Concat(..) => self.build_concat(fragment, next),
            Fragment::Or(left, right) => {
                let left = self.build(left, next)?;
                let right = self.build(right, next)?;
                self.add_choice(left, right)
            }
            Fragment::Repeat(inner) => self.build_repeat(inner, next),
            Fragment::Plus(inner) => {
                let rest = self.build_repeat(inner, next)?;
                self.build(inner, rest)
            }
        }
    }

    /// Concat chains are flattened and built right to left, so each part
    /// receives the entry of the part after it as its continuation.
    fn build_concat(&mut self, fragment: &Fragment<T>, next: StateId) -> Result<StateId> {
        let mut next = next;
        for part in fragment.concat_parts().into_iter().rev() {
            next = self.build(part, next)?;
        }
        Ok(next)
    }

    /// Two-phase build of the loop: the body is compiled against a
    /// placeholder choice, which is patched once the loop decision exists.
    fn build_repeat(&mut self, inner: &Fragment<T>, next: StateId) -> Result<StateId> {
        let placeholder = self.add(State::Choice {
            left: None,
            right: None,
        })?;
        let body = self.build(inner, placeholder)?;
        let decision = self.add_choice(body, next)?;
        *self.ensure_choice_left(placeholder) = Some(decision);
        Ok(placeholder)
    }

    pub(super) fn states_mut(&mut self) -> &mut [State<T>] {
        &mut self.states
    }

    /// Freeze the arena with `entry` as the start state.
    pub fn finish(self, entry: StateId) -> Automaton<T> {
        Automaton::new(self.states.into_boxed_slice(), entry)
    }

    /// Compile a whole fragment tree against the terminal state.
    pub fn compile(fragment: &Fragment<T>, limits: CompileLimits) -> Result<Automaton<T>> {
        let mut builder = Self::new(limits);
        let entry = builder.build(fragment, StateId::TERMINAL)?;
        Ok(builder.finish(entry))
    }
}
