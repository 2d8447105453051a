//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::build::GraphBuilder;
use super::{Automaton, State, StateId};

impl<T> GraphBuilder<T> {
    /// First branch of a choice placeholder, for back-patching.
    pub(super) fn ensure_choice_left(&mut self, id: StateId) -> &mut Option<StateId> {
        match &mut self.states_mut()[id.index()] {
            State::Choice { left, .. } => {
                assert!(left.is_none(), "GraphBuilder: placeholder {id} patched twice");
                left
            }
            other => panic!("GraphBuilder: {id} is not a choice placeholder: {other:?}"),
        }
    }
}

impl<T> Automaton<T> {
    pub(super) fn ensure_state(&self, id: StateId) -> &State<T> {
        self.states_slice().get(id.index()).unwrap_or_else(|| {
            panic!(
                "Automaton: {id} out of range (arena holds {} states)",
                self.state_count()
            )
        })
    }

    pub(super) fn ensure_terminal_slot(&self) {
        assert!(
            matches!(self.states_slice().first(), Some(State::Terminal)),
            "Automaton: slot 0 must hold the terminal state"
        );
    }
}
