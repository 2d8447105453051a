//! Immutable query builder.
//!
//! Every combinator returns a new [`Query`] and leaves its operands alone;
//! operands are shared, not copied. Nothing is resolved into states until
//! [`Query::compile`] (or [`Query::compiler`]) runs.
//!
//! ```text
//! literal(p)            one element accepted by p
//! a.then(b)             a followed by b
//! a.or(b)               a or b
//! a.then_either_of(l, r)  a followed by (l or r)
//! a.zero_or_more(i)     a followed by i*
//! a.one_or_more(i)      a followed by i+
//! ```

mod fragment;


use std::fmt;
use std::sync::Arc;

use seqmatch_core::Predicate;

use crate::compile::CompileBuilder;
use crate::engine::SequenceMatcher;
use crate::{Error, Result};

pub use fragment::Fragment;

/// A pattern over sequences of `T`.
pub struct Query<T> {
    fragment: Arc<Fragment<T>>,
}

impl<T> Query<T> {
    fn from_fragment(fragment: Fragment<T>) -> Self {
        Self {
            fragment: Arc::new(fragment),
        }
    }

    /// Root fragment of this query.
    pub fn fragment(&self) -> &Fragment<T> {
        &self.fragment
    }

    fn share(&self) -> Arc<Fragment<T>> {
        Arc::clone(&self.fragment)
    }
}

impl<T: 'static> Query<T> {
    /// Exactly one element accepted by `predicate`.
    pub fn literal(predicate: Predicate<T>) -> Self {
        Self::from_fragment(Fragment::Literal(predicate))
    }

    /// Any number of arbitrary elements, including none.
    pub fn any() -> Self {
        zero_or_more(Predicate::always())
    }

    /// This query followed by `next`.
    pub fn then(self, next: impl Into<Query<T>>) -> Self {
        concat(self, next)
    }

    /// This query or `other`.
    pub fn or(self, other: impl Into<Query<T>>) -> Self {
        alternate(self, other)
    }

    /// This query followed by either `left` or `right`.
    pub fn then_either_of(self, left: impl Into<Query<T>>, right: impl Into<Query<T>>) -> Self {
        concat(self, alternate(left, right))
    }

    /// This query followed by zero or more repetitions of `inner`.
    pub fn zero_or_more(self, inner: impl Into<Query<T>>) -> Self {
        concat(self, zero_or_more(inner))
    }

    /// This query followed by one or more repetitions of `inner`.
    pub fn one_or_more(self, inner: impl Into<Query<T>>) -> Self {
        concat(self, one_or_more(inner))
    }

    /// Compile with default limits and no ignored elements.
    pub fn compile(&self) -> Result<SequenceMatcher<T>> {
        self.compiler().build()
    }

    /// Compile with default limits, skipping elements accepted by `ignore`.
    pub fn compile_ignoring(&self, ignore: Predicate<T>) -> Result<SequenceMatcher<T>> {
        self.compiler().ignoring(ignore).build()
    }

    /// Configure compilation (ignore predicate, limits) before building.
    pub fn compiler(&self) -> CompileBuilder<'_, T> {
        CompileBuilder::new(self)
    }
}

/// Exactly one element accepted by `predicate`.
pub fn literal<T: 'static>(predicate: Predicate<T>) -> Query<T> {
    Query::literal(predicate)
}

/// `a` immediately followed by `b`.
pub fn concat<T: 'static>(a: impl Into<Query<T>>, b: impl Into<Query<T>>) -> Query<T> {
    let (a, b) = (a.into(), b.into());
    Query::from_fragment(Fragment::Concat(a.share(), b.share()))
}

/// `a` or `b`. Both branches are explored; neither has priority.
pub fn alternate<T: 'static>(a: impl Into<Query<T>>, b: impl Into<Query<T>>) -> Query<T> {
    let (a, b) = (a.into(), b.into());
    Query::from_fragment(Fragment::Or(a.share(), b.share()))
}

/// `inner` repeated any number of times, including zero.
pub fn zero_or_more<T: 'static>(inner: impl Into<Query<T>>) -> Query<T> {
    Query::from_fragment(Fragment::Repeat(inner.into().share()))
}

/// `inner` repeated at least once.
pub fn one_or_more<T: 'static>(inner: impl Into<Query<T>>) -> Query<T> {
    Query::from_fragment(Fragment::Plus(inner.into().share()))
}

/// Alternation over every query in `queries`.
///
/// Branches are paired into a balanced tree so wide alternations stay
/// shallow. Fails with [`Error::EmptyAlternation`] when `queries` is empty.
pub fn any_of<T, I>(queries: I) -> Result<Query<T>>
where
    T: 'static,
    I: IntoIterator,
    I::Item: Into<Query<T>>,
{
    let branches: Vec<Query<T>> = queries.into_iter().map(Into::into).collect();
    if branches.is_empty() {
        return Err(Error::EmptyAlternation);
    }
    Ok(balanced_or(&branches))
}

fn balanced_or<T: 'static>(branches: &[Query<T>]) -> Query<T> {
    if let [single] = branches {
        return single.clone();
    }
    let (left, right) = branches.split_at(branches.len() / 2);
    alternate(balanced_or(left), balanced_or(right))
}

/// Concatenation of every query in `queries`, in order.
///
/// Fails with [`Error::EmptySequence`] when `queries` is empty.
pub fn sequence<T, I>(queries: I) -> Result<Query<T>>
where
    T: 'static,
    I: IntoIterator,
    I::Item: Into<Query<T>>,
{
    let mut queries = queries.into_iter().map(Into::<Query<T>>::into);
    let first = queries.next().ok_or(Error::EmptySequence)?;
    Ok(queries.fold(first, |acc, next| concat(acc, next)))
}

impl<T: 'static> From<Predicate<T>> for Query<T> {
    fn from(predicate: Predicate<T>) -> Self {
        Query::literal(predicate)
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            fragment: self.share(),
        }
    }
}

impl<T> fmt::Display for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.fragment, f)
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Query").field(&self.to_string()).finish()
    }
}
