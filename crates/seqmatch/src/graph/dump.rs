//! Dump helpers for automaton inspection and testing.
//!
//! ```text
//! entry = S2
//! S0: ✓
//! S1: isB → S0
//! S2: isA → S1
//! ```
//!
//! Choices print as `ε → left, right`, with `∅` for an unset branch.

use std::fmt::Write;

use seqmatch_core::Colors;

use super::{Automaton, State, StateId};

/// Printer for [`Automaton`].
pub struct GraphPrinter<'a, T> {
    automaton: &'a Automaton<T>,
    colors: Colors,
}

impl<'a, T> GraphPrinter<'a, T> {
    pub fn new(automaton: &'a Automaton<T>) -> Self {
        Self {
            automaton,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;
        writeln!(w, "entry = {}", self.id(self.automaton.entry()))?;

        for (id, state) in self.automaton.iter() {
            write!(w, "{}: ", self.id(id))?;
            match state {
                State::Terminal => write!(w, "{}✓{}", c.green, c.reset)?,
                State::Consume { predicate, next } => {
                    write!(w, "{predicate} {}→{} {}", c.dim, c.reset, self.id(*next))?
                }
                State::Choice { left, right } => write!(
                    w,
                    "{}ε →{} {}, {}",
                    c.dim,
                    c.reset,
                    self.branch(*left),
                    self.branch(*right)
                )?,
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn id(&self, id: StateId) -> String {
        format!("{}{id}{}", self.colors.blue, self.colors.reset)
    }

    fn branch(&self, branch: Option<StateId>) -> String {
        match branch {
            Some(id) => self.id(id),
            None => "∅".to_string(),
        }
    }
}
