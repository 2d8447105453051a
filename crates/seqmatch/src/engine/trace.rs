//! Tracing infrastructure for debugging matches.
//!
//! `NoopTracer` is the default: every method is an empty
//! `#[inline(always)]` body, so untraced matching pays nothing for the
//! hooks. `PrintTracer` collects one line per event for inspection.
//!
//! Event order for one call:
//! - `trace_start` - frontier after the entry closure
//! - per element: `trace_element`, then either `trace_ignored` or one
//!   `trace_consume` per consume state followed by `trace_frontier`
//! - `trace_dead` - the frontier emptied; scanning stops here
//! - `trace_finish` - final verdict

use std::fmt;

use seqmatch_core::{Colors, Context};

use crate::graph::{Automaton, State, StateId};

use super::frontier::Frontier;

/// Observer for [`SequenceMatcher`](super::SequenceMatcher) execution.
pub trait Tracer<T> {
    /// Called once with the closure of the entry state.
    fn trace_start(&mut self, frontier: &Frontier);

    /// Called after the context advances onto `element`.
    fn trace_element(&mut self, context: &Context, element: &T);

    /// Called when the ignore predicate skips the current element.
    fn trace_ignored(&mut self, context: &Context);

    /// Called after testing a consume state against the current element.
    fn trace_consume(&mut self, state: StateId, accepted: bool);

    /// Called with the frontier that replaces the current one.
    fn trace_frontier(&mut self, frontier: &Frontier);

    /// Called when no state survived the current element.
    fn trace_dead(&mut self, context: &Context);

    /// Called once with the result.
    fn trace_finish(&mut self, matched: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl<T> Tracer<T> for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _frontier: &Frontier) {}

    #[inline(always)]
    fn trace_element(&mut self, _context: &Context, _element: &T) {}

    #[inline(always)]
    fn trace_ignored(&mut self, _context: &Context) {}

    #[inline(always)]
    fn trace_consume(&mut self, _state: StateId, _accepted: bool) {}

    #[inline(always)]
    fn trace_frontier(&mut self, _frontier: &Frontier) {}

    #[inline(always)]
    fn trace_dead(&mut self, _context: &Context) {}

    #[inline(always)]
    fn trace_finish(&mut self, _matched: bool) {}
}

/// Tracer that collects a readable log of the match.
///
/// ```text
/// start {S2}
/// @0 'a'
///   S2 ='a' ✓
///   → {S1}
/// @1 'b'
///   S1 ='b' ✓
///   → {S0}
/// match
/// ```
pub struct PrintTracer<'a, T> {
    /// Used to resolve predicate labels of consume states.
    automaton: &'a Automaton<T>,
    lines: Vec<String>,
    colors: Colors,
}

impl<'a, T> PrintTracer<'a, T> {
    pub fn new(automaton: &'a Automaton<T>) -> Self {
        Self {
            automaton,
            lines: Vec::new(),
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Collected lines joined with newlines.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    /// Print the collected trace to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn frontier(&self, frontier: &Frontier) -> String {
        let c = self.colors;
        let ids: Vec<String> = frontier
            .iter()
            .map(|id| format!("{}{id}{}", c.blue, c.reset))
            .collect();
        format!("{{{}}}", ids.join(", "))
    }

    fn label(&self, state: StateId) -> String {
        match self.automaton.state(state) {
            State::Consume { predicate, .. } => predicate.to_string(),
            other => format!("{other:?}"),
        }
    }
}

impl<T: fmt::Debug> Tracer<T> for PrintTracer<'_, T> {
    fn trace_start(&mut self, frontier: &Frontier) {
        let line = format!("start {}", self.frontier(frontier));
        self.lines.push(line);
    }

    fn trace_element(&mut self, context: &Context, element: &T) {
        self.lines.push(format!("{context} {element:?}"));
    }

    fn trace_ignored(&mut self, _context: &Context) {
        let c = self.colors;
        self.lines.push(format!("  {}ignored{}", c.dim, c.reset));
    }

    fn trace_consume(&mut self, state: StateId, accepted: bool) {
        let c = self.colors;
        let mark = if accepted { "✓" } else { "✗" };
        let line = format!(
            "  {}{state}{} {} {}{mark}{}",
            c.blue,
            c.reset,
            self.label(state),
            c.verdict(accepted),
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_frontier(&mut self, frontier: &Frontier) {
        let line = format!("  → {}", self.frontier(frontier));
        self.lines.push(line);
    }

    fn trace_dead(&mut self, _context: &Context) {
        let c = self.colors;
        self.lines.push(format!("  {}dead{}", c.red, c.reset));
    }

    fn trace_finish(&mut self, matched: bool) {
        let c = self.colors;
        let verdict = if matched { "match" } else { "no match" };
        self.lines
            .push(format!("{}{verdict}{}", c.verdict(matched), c.reset));
    }
}
