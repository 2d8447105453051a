//! Frontier sets and epsilon closure.

use std::fmt;

use indexmap::IndexSet;

use crate::graph::{Automaton, State, StateId};

/// States live after some prefix of the input.
///
/// Holds only consume states and the terminal state; choices are expanded
/// on insertion. Insertion order is kept so traces are deterministic.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    states: IndexSet<StateId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// An empty frontier is dead: no later element can revive it.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.states.contains(&id)
    }

    /// True when the terminal state is live.
    pub fn is_accepting(&self) -> bool {
        self.contains(StateId::TERMINAL)
    }

    pub(crate) fn insert(&mut self, id: StateId) {
        self.states.insert(id);
    }

    pub(crate) fn clear(&mut self) {
        self.states.clear();
    }
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}")?;
        }
        f.write_str("}")
    }
}

/// Epsilon-closure walker.
///
/// Visited states are stamped with the current generation instead of being
/// collected in a set, so starting a new step is O(1). One generation spans
/// a whole step: a choice already expanded during the step has already
/// delivered its states into the same frontier.
pub(crate) struct EpsilonClosure {
    marks: Vec<u32>,
    generation: u32,
    stack: Vec<StateId>,
}

impl EpsilonClosure {
    pub fn new(state_count: usize) -> Self {
        Self {
            marks: vec![0; state_count],
            generation: 0,
            stack: Vec::new(),
        }
    }

    /// Forget every mark from the previous step.
    pub fn begin_step(&mut self) {
        if self.generation == u32::MAX {
            self.marks.fill(0);
            self.generation = 0;
        }
        self.generation += 1;
    }

    /// Add every observable state reachable from `from` without consuming
    /// input. Left branches are explored before right ones.
    pub fn expand<T>(&mut self, automaton: &Automaton<T>, from: StateId, into: &mut Frontier) {
        self.stack.push(from);
        while let Some(id) = self.stack.pop() {
            let mark = &mut self.marks[id.index()];
            if *mark == self.generation {
                continue;
            }
            *mark = self.generation;

            match automaton.state(id) {
                State::Choice { left, right } => {
                    self.stack.extend(*right);
                    self.stack.extend(*left);
                }
                State::Consume { .. } | State::Terminal => into.insert(id),
            }
        }
    }
}
