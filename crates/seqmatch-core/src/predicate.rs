//! Element predicates.
//!
//! A predicate decides whether one element, seen at one [`Context`], may be
//! consumed by a transition. The automaton never owns a predicate outright:
//! [`Predicate`] is an `Arc` handle, so the same test can back several
//! states (a `one_or_more` body is compiled twice) without copying it.

use std::fmt;
use std::sync::Arc;

use crate::Context;

/// Test applied to an element at a scan position.
///
/// Implemented for every `Fn(&Context, &T) -> bool` that is `Send + Sync`,
/// so plain closures work as predicates. A predicate that panics aborts the
/// whole match; the engine does not treat a panic as "no match".
pub trait Match<T>: Send + Sync {
    fn test(&self, context: &Context, element: &T) -> bool;
}

impl<T, F> Match<T> for F
where
    F: Fn(&Context, &T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, context: &Context, element: &T) -> bool {
        self(context, element)
    }
}

/// Shared, optionally labelled predicate.
///
/// The label only affects graph dumps and traces.
pub struct Predicate<T> {
    inner: Arc<dyn Match<T>>,
    label: Option<Arc<str>>,
}

impl<T: 'static> Predicate<T> {
    /// Predicate over the element alone, ignoring its position.
    pub fn from_fn(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::new(move |_: &Context, element: &T| test(element))
    }

    /// Rejects every element. Default ignore predicate.
    pub fn never() -> Self {
        Self::new(|_: &Context, _: &T| false).named("never")
    }

    /// Accepts every element.
    pub fn always() -> Self {
        Self::new(|_: &Context, _: &T| true).named("always")
    }

    /// Accepts elements equal to `value`.
    pub fn equal_to(value: T) -> Self
    where
        T: PartialEq + fmt::Debug + Send + Sync,
    {
        let label = format!("={value:?}");
        Self::new(move |_: &Context, element: &T| *element == value).named(label)
    }

    /// Accepts when both predicates accept. `other` is not evaluated when
    /// `self` rejects.
    pub fn and(self, other: Predicate<T>) -> Self {
        let label = join_labels(&self, &other, "&");
        let combined = Self::new(move |ctx: &Context, element: &T| {
            self.test(ctx, element) && other.test(ctx, element)
        });
        combined.with_label(label)
    }

    /// Accepts when either predicate accepts. `other` is not evaluated when
    /// `self` accepts.
    pub fn or(self, other: Predicate<T>) -> Self {
        let label = join_labels(&self, &other, "|");
        let combined = Self::new(move |ctx: &Context, element: &T| {
            self.test(ctx, element) || other.test(ctx, element)
        });
        combined.with_label(label)
    }

    /// Inverts this predicate.
    pub fn negate(self) -> Self {
        let label = self.label.as_ref().map(|l| format!("!{l}"));
        let negated = Self::new(move |ctx: &Context, element: &T| !self.test(ctx, element));
        negated.with_label(label)
    }
}

impl<T> Predicate<T> {
    /// Wrap any [`Match`] implementation.
    pub fn new(test: impl Match<T> + 'static) -> Self {
        Self {
            inner: Arc::new(test),
            label: None,
        }
    }

    /// Attach a display label.
    pub fn named(mut self, label: impl Into<String>) -> Self {
        self.label = Some(Arc::from(label.into()));
        self
    }

    fn with_label(self, label: Option<String>) -> Self {
        match label {
            Some(l) => self.named(l),
            None => self,
        }
    }

    /// Display label, if one was attached.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Evaluate the predicate.
    #[inline]
    pub fn test(&self, context: &Context, element: &T) -> bool {
        self.inner.test(context, element)
    }

    /// True when both handles share the same underlying test.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn join_labels<T>(a: &Predicate<T>, b: &Predicate<T>, op: &str) -> Option<String> {
    match (a.label(), b.label()) {
        (Some(a), Some(b)) => Some(format!("({a} {op} {b})")),
        _ => None,
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            label: self.label.clone(),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.to_string()).finish()
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("<predicate>"))
    }
}
