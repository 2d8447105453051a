//! Compiled sequence matcher.

use seqmatch_core::{Context, Predicate};

use crate::graph::{Automaton, State};

use super::frontier::{EpsilonClosure, Frontier};
use super::trace::{NoopTracer, Tracer};

/// A compiled query, ready to test sequences.
///
/// Immutable and `Send + Sync`: every call to [`matches`](Self::matches)
/// allocates its own frontier and context, so one matcher can serve any
/// number of threads at once.
pub struct SequenceMatcher<T> {
    automaton: Automaton<T>,
    ignore: Predicate<T>,
}

impl<T> SequenceMatcher<T> {
    pub(crate) fn new(automaton: Automaton<T>, ignore: Predicate<T>) -> Self {
        Self { automaton, ignore }
    }

    pub fn automaton(&self) -> &Automaton<T> {
        &self.automaton
    }

    /// Predicate for elements that are skipped without a transition.
    pub fn ignore(&self) -> &Predicate<T> {
        &self.ignore
    }

    /// True when the whole of `sequence` matches the query.
    pub fn matches(&self, sequence: &[T]) -> bool {
        self.run(sequence, &mut NoopTracer)
    }

    /// Like [`matches`](Self::matches), for any iterator of element refs.
    pub fn matches_iter<'e, I>(&self, sequence: I) -> bool
    where
        I: IntoIterator<Item = &'e T>,
        T: 'e,
    {
        self.run(sequence, &mut NoopTracer)
    }

    /// Like [`matches`](Self::matches), reporting each step to `tracer`.
    pub fn matches_traced<R: Tracer<T>>(&self, sequence: &[T], tracer: &mut R) -> bool {
        self.run(sequence, tracer)
    }

    fn run<'e, I, R>(&self, sequence: I, tracer: &mut R) -> bool
    where
        I: IntoIterator<Item = &'e T>,
        T: 'e,
        R: Tracer<T>,
    {
        let automaton = &self.automaton;
        let mut closure = EpsilonClosure::new(automaton.state_count());
        let mut current = Frontier::new();
        let mut next = Frontier::new();

        closure.begin_step();
        closure.expand(automaton, automaton.entry(), &mut current);
        tracer.trace_start(&current);

        let mut context = Context::start();
        for element in sequence {
            // Ignored elements still advance the position.
            context = context.advance();
            tracer.trace_element(&context, element);

            if self.ignore.test(&context, element) {
                tracer.trace_ignored(&context);
                continue;
            }

            closure.begin_step();
            for id in current.iter() {
                let State::Consume { predicate, next: target } = automaton.state(id) else {
                    continue;
                };
                let accepted = predicate.test(&context, element);
                tracer.trace_consume(id, accepted);
                if accepted {
                    closure.expand(automaton, *target, &mut next);
                }
            }

            std::mem::swap(&mut current, &mut next);
            next.clear();
            tracer.trace_frontier(&current);

            if current.is_empty() {
                tracer.trace_dead(&context);
                tracer.trace_finish(false);
                return false;
            }
        }

        let matched = current.is_accepting();
        tracer.trace_finish(matched);
        matched
    }
}

impl<T> std::fmt::Debug for SequenceMatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceMatcher")
            .field("automaton", &self.automaton)
            .field("ignore", &self.ignore)
            .finish()
    }
}
