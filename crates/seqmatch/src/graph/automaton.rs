//! Frozen automaton.

use super::dump::GraphPrinter;
use super::{State, StateId};

/// Immutable state arena produced by compilation.
///
/// Shared read-only between any number of concurrent matches. The graph may
/// contain cycles (every repetition introduces one); walkers must guard
/// against revisiting choice states.
pub struct Automaton<T> {
    states: Box<[State<T>]>,
    entry: StateId,
}

impl<T> Automaton<T> {
    pub(super) fn new(states: Box<[State<T>]>, entry: StateId) -> Self {
        let automaton = Self { states, entry };
        automaton.ensure_terminal_slot();
        automaton
    }

    /// State the scan starts from.
    pub fn entry(&self) -> StateId {
        self.entry
    }

    /// Look up a state by id.
    #[inline]
    pub fn state(&self, id: StateId) -> &State<T> {
        self.ensure_state(id)
    }

    /// Number of states, terminal included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Iterate over all states with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State<T>)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, state)| (StateId::from_index(i), state))
    }

    pub(super) fn states_slice(&self) -> &[State<T>] {
        &self.states
    }

    /// Printer for this automaton.
    pub fn printer(&self) -> GraphPrinter<'_, T> {
        GraphPrinter::new(self)
    }

    /// Plain-text listing of every state.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}

impl<T> std::fmt::Debug for Automaton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("entry", &self.entry)
            .field("states", &self.states)
            .finish()
    }
}
