//! Scan position passed to predicates.

use std::fmt;

/// Position of the scan within the input sequence.
///
/// A fresh context has not started yet. Each call to [`Context::advance`]
/// returns a new context pointing at the next element; the old value is
/// left untouched, so a context can be copied freely into traces.
///
/// Every element advances the context, including elements skipped by an
/// ignore predicate. A predicate therefore always sees the element's real
/// index in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Context {
    position: Option<usize>,
}

impl Context {
    /// Context before the first element.
    pub const fn start() -> Self {
        Self { position: None }
    }

    /// Context for the element after this one.
    #[must_use]
    pub const fn advance(self) -> Self {
        let position = match self.position {
            None => 0,
            Some(p) => p + 1,
        };
        Self {
            position: Some(position),
        }
    }

    /// Index of the current element, or `None` before the scan starts.
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// Index of the current element.
    ///
    /// # Panics
    /// Panics on [`Context::start`], before any element. Use
    /// [`position`](Self::position) when the context may not have advanced.
    pub fn index(&self) -> usize {
        self.position
            .unwrap_or_else(|| panic!("Context::index called before the first element"))
    }

    /// True when the current element is the first one in the sequence.
    pub const fn is_first(&self) -> bool {
        matches!(self.position, Some(0))
    }

    /// Number of elements advanced past so far.
    pub const fn consumed(&self) -> usize {
        match self.position {
            None => 0,
            Some(p) => p + 1,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            None => write!(f, "@start"),
            Some(p) => write!(f, "@{p}"),
        }
    }
}
