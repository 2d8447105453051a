use seqmatch_core::Predicate;

use crate::query::{self, Query};
use crate::{CompileLimits, Error};

fn is(c: char) -> Predicate<char> {
    Predicate::equal_to(c)
}

/// `depth` levels of `one_or_more`; each level doubles the body.
fn nested_plus(depth: usize) -> Query<char> {
    (0..depth).fold(query::literal(is('a')), |q, _| query::one_or_more(q))
}

/// `depth` levels of right-nested alternation.
fn nested_or(depth: usize) -> Query<char> {
    (0..depth).fold(query::literal(is('a')), |q, _| query::alternate(is('b'), q))
}

#[test]
fn limits_defaults() {
    let limits = CompileLimits::new();

    assert_eq!(limits.get_max_states(), 1_000_000);
    assert_eq!(limits.get_recursion_limit(), 1024);
}

#[test]
fn limits_builder() {
    let limits = CompileLimits::new().max_states(64).recursion_limit(8);

    assert_eq!(limits.get_max_states(), 64);
    assert_eq!(limits.get_recursion_limit(), 8);
}

#[test]
fn state_limit_counts_terminal() {
    let q = query::literal(is('a'));

    let err = q.compiler().max_states(1).build().unwrap_err();
    assert_eq!(err, Error::StateLimitExceeded { limit: 1 });

    let matcher = q.compiler().max_states(2).build().unwrap();
    assert_eq!(matcher.automaton().state_count(), 2);
}

#[test]
fn state_limit_stops_exponential_patterns() {
    let err = nested_plus(25)
        .compiler()
        .max_states(10_000)
        .build()
        .unwrap_err();

    assert_eq!(err, Error::StateLimitExceeded { limit: 10_000 });
}

#[test]
fn small_nested_plus_compiles() {
    let matcher = nested_plus(3).compile().unwrap();

    assert!(matcher.matches(&['a', 'a', 'a']));
    assert!(!matcher.matches(&[]));
}

#[test]
fn recursion_limit() {
    let err = nested_or(50)
        .compiler()
        .recursion_limit(10)
        .build()
        .unwrap_err();

    assert_eq!(err, Error::RecursionLimitExceeded { limit: 10 });
    assert!(nested_or(50).compile().is_ok());
}

#[test]
fn concat_chains_do_not_nest() {
    let q = query::sequence((0..100).map(|_| is('a'))).unwrap();

    let matcher = q.compiler().recursion_limit(3).build().unwrap();

    assert!(matcher.matches(&['a'; 100]));
}

#[test]
fn rejected_deep_query_is_released() {
    let q = (0..100_000).fold(query::literal(is('a')), |q, _| query::zero_or_more(q));

    let err = q.compile().unwrap_err();
    assert_eq!(err, Error::RecursionLimitExceeded { limit: 1024 });

    let rendered = q.to_string();
    assert_eq!(rendered.len(), 3 * 100_000 + 2);
    assert!(rendered.starts_with("((("));
    assert!(rendered.ends_with("='a'*)*)*"));

    drop(q);
}

#[test]
fn limits_applied_together() {
    let q = query::literal(is('a')).then(is('b'));

    let fits = q.compiler().limits(CompileLimits::new().max_states(3)).build();
    let err = q
        .compiler()
        .limits(CompileLimits::new().max_states(2))
        .build()
        .unwrap_err();

    assert!(fits.is_ok());
    assert_eq!(err, Error::StateLimitExceeded { limit: 2 });
}

#[test]
fn empty_alternation_is_rejected() {
    let err = query::any_of::<char, _>(Vec::<Query<char>>::new()).unwrap_err();

    assert_eq!(err, Error::EmptyAlternation);
}

#[test]
fn empty_sequence_is_rejected() {
    let err = query::sequence::<char, _>(Vec::<Predicate<char>>::new()).unwrap_err();

    assert_eq!(err, Error::EmptySequence);
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::EmptyAlternation.to_string(),
        "alternation needs at least one branch"
    );
    assert_eq!(
        Error::EmptySequence.to_string(),
        "sequence needs at least one element"
    );
    assert_eq!(
        Error::StateLimitExceeded { limit: 5 }.to_string(),
        "automaton state limit of 5 exceeded"
    );
    assert_eq!(
        Error::RecursionLimitExceeded { limit: 7 }.to_string(),
        "query nesting limit of 7 exceeded"
    );
}
