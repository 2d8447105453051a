//! Automaton states and their ids.

use std::fmt;

use seqmatch_core::Predicate;

/// Index into the automaton arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    /// The single terminal state. Reserved at arena slot 0.
    pub const TERMINAL: Self = Self(0);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_terminal(self) -> bool {
        self == Self::TERMINAL
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A node of the automaton.
pub enum State<T> {
    /// Consumes one element accepted by `predicate`, then moves to `next`.
    Consume { predicate: Predicate<T>, next: StateId },

    /// Epsilon fork into both branches. An unset branch leads nowhere.
    ///
    /// Never part of a frontier: the engine always expands it.
    Choice {
        left: Option<StateId>,
        right: Option<StateId>,
    },

    /// Accepting sentinel. Only ever stored at [`StateId::TERMINAL`].
    Terminal,
}

impl<T> State<T> {
    pub fn is_choice(&self) -> bool {
        matches!(self, State::Choice { .. })
    }

    /// States that can sit in a frontier.
    pub fn is_observable(&self) -> bool {
        !self.is_choice()
    }
}

impl<T> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Consume { predicate, next } => f
                .debug_struct("Consume")
                .field("predicate", predicate)
                .field("next", next)
                .finish(),
            State::Choice { left, right } => f
                .debug_struct("Choice")
                .field("left", left)
                .field("right", right)
                .finish(),
            State::Terminal => f.write_str("Terminal"),
        }
    }
}
