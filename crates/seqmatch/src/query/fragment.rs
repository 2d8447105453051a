//! Unresolved pattern pieces.
//!
//! Query trees can be far deeper than the thread stack allows (a long
//! `then` chain nests once per element), so teardown and rendering both
//! walk the tree with an explicit stack.

use std::fmt;
use std::sync::Arc;

use seqmatch_core::{Context, Match, Predicate};

/// A piece of pattern that has not been compiled yet.
///
/// Children sit behind `Arc` so combinators can reuse an operand on both
/// sides (`one_or_more` refers to its body twice) without deep copies.
pub enum Fragment<T> {
    /// Exactly one element accepted by the predicate.
    Literal(Predicate<T>),
    /// Left, then right.
    Concat(Arc<Fragment<T>>, Arc<Fragment<T>>),
    /// Left or right, explored in parallel.
    Or(Arc<Fragment<T>>, Arc<Fragment<T>>),
    /// Zero or more repetitions.
    Repeat(Arc<Fragment<T>>),
    /// One or more repetitions.
    Plus(Arc<Fragment<T>>),
}

impl<T> Fragment<T> {
    /// Leaves of a concatenation chain, left to right.
    ///
    /// Non-concat fragments yield themselves. Iterative, so long `then`
    /// chains do not count against the compiler's nesting limit.
    pub fn concat_parts(&self) -> Vec<&Fragment<T>> {
        let mut parts = Vec::new();
        let mut stack = vec![self];
        while let Some(fragment) = stack.pop() {
            match fragment {
                Fragment::Concat(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
                other => parts.push(other),
            }
        }
        parts
    }

    fn is_atom(&self) -> bool {
        matches!(self, Fragment::Literal(_) | Fragment::Or(..))
    }

    fn children_mut(&mut self) -> impl Iterator<Item = &mut Arc<Fragment<T>>> {
        let (first, second) = match self {
            Fragment::Literal(_) => (None, None),
            Fragment::Concat(left, right) | Fragment::Or(left, right) => (Some(left), Some(right)),
            Fragment::Repeat(inner) | Fragment::Plus(inner) => (Some(inner), None),
        };
        first.into_iter().chain(second)
    }

    /// Move every child onto `stack`, leaving `vacant` in its place.
    fn detach_children(&mut self, vacant: &Arc<Fragment<T>>, stack: &mut Vec<Arc<Fragment<T>>>) {
        for child in self.children_mut() {
            stack.push(std::mem::replace(child, Arc::clone(vacant)));
        }
    }
}

/// Placeholder predicate for children detached during teardown.
struct Vacant;

impl<T> Match<T> for Vacant {
    fn test(&self, _: &Context, _: &T) -> bool {
        false
    }
}

impl<T> Drop for Fragment<T> {
    fn drop(&mut self) {
        if !self.children_mut().any(|child| Arc::get_mut(child).is_some()) {
            return;
        }

        // Only uniquely owned nodes are taken apart; shared subtrees are
        // released by their last owner.
        let vacant = Arc::new(Fragment::Literal(Predicate::new(Vacant)));
        let mut stack = Vec::new();
        self.detach_children(&vacant, &mut stack);
        while let Some(child) = stack.pop() {
            if let Ok(mut fragment) = Arc::try_unwrap(child) {
                fragment.detach_children(&vacant, &mut stack);
            }
        }
    }
}

enum Piece<'a, T> {
    Fragment(&'a Fragment<T>),
    Text(&'static str),
}

impl<T> fmt::Display for Fragment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Fragment(self)];
        while let Some(piece) = stack.pop() {
            let fragment = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Fragment(fragment) => fragment,
            };
            // Pieces are pushed in reverse output order.
            match fragment {
                Fragment::Literal(predicate) => write!(f, "{predicate}")?,
                Fragment::Concat(..) => {
                    let parts = fragment.concat_parts();
                    for (i, part) in parts.into_iter().enumerate().rev() {
                        stack.push(Piece::Fragment(part));
                        if i > 0 {
                            stack.push(Piece::Text(" "));
                        }
                    }
                }
                Fragment::Or(left, right) => {
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Fragment(right));
                    stack.push(Piece::Text(" | "));
                    stack.push(Piece::Fragment(left));
                    stack.push(Piece::Text("("));
                }
                Fragment::Repeat(inner) => push_postfix(&mut stack, inner, "*", ")*"),
                Fragment::Plus(inner) => push_postfix(&mut stack, inner, "+", ")+"),
            }
        }
        Ok(())
    }
}

fn push_postfix<'a, T>(
    stack: &mut Vec<Piece<'a, T>>,
    inner: &'a Fragment<T>,
    bare: &'static str,
    grouped: &'static str,
) {
    if inner.is_atom() {
        stack.push(Piece::Text(bare));
        stack.push(Piece::Fragment(inner));
    } else {
        stack.push(Piece::Text(grouped));
        stack.push(Piece::Fragment(inner));
        stack.push(Piece::Text("("));
    }
}

impl<T> fmt::Debug for Fragment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
