//! Matching behavior of compiled queries.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use seqmatch_core::{Context, Predicate};

use super::SequenceMatcher;
use crate::query::{self, Query};

fn is(c: char) -> Predicate<char> {
    Predicate::equal_to(c)
}

fn compile(query: Query<char>) -> SequenceMatcher<char> {
    query.compile().expect("compile failed")
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Run `matcher` over each input, returning one flag per input.
fn run(matcher: &SequenceMatcher<char>, inputs: &[&str]) -> Vec<bool> {
    inputs.iter().map(|s| matcher.matches(&chars(s))).collect()
}

#[test]
fn literal_matches_exactly_one_element() {
    let m = compile(query::literal(is('a')));

    assert_eq!(
        run(&m, &["a", "b", "", "aa"]),
        [true, false, false, false]
    );
}

#[test]
fn concat_requires_order() {
    let m = compile(query::concat(is('a'), is('b')));

    assert_eq!(
        run(&m, &["ab", "aa", "ba", "a", "abb"]),
        [true, false, false, false, false]
    );
}

#[test]
fn alternate_accepts_either_branch() {
    let m = compile(query::alternate(is('a'), is('b')));

    assert_eq!(run(&m, &["a", "b", "c", "ab"]), [true, true, false, false]);
}

#[test]
fn zero_or_more() {
    let m = compile(query::zero_or_more(is('a')));

    assert_eq!(
        run(&m, &["aaa", "aba", "", "a", "b"]),
        [true, false, true, true, false]
    );
}

#[test]
fn one_or_more_rejects_empty() {
    let m = compile(query::one_or_more(is('a')));

    assert_eq!(
        run(&m, &["", "a", "aaa", "ab"]),
        [false, true, true, false]
    );
}

#[test]
fn then_either_of() {
    let m = compile(query::literal(is('a')).then_either_of(is('b'), is('c')));

    assert_eq!(
        run(&m, &["ab", "ac", "a", "abc", "bc"]),
        [true, true, false, false, false]
    );
}

#[test]
fn chained_builders() {
    let m = compile(
        query::literal(is('a'))
            .zero_or_more(is('b'))
            .then(is('c'))
            .one_or_more(is('d')),
    );

    assert_eq!(
        run(&m, &["acd", "abbbcddd", "ac", "abd", "acdc"]),
        [true, true, false, false, false]
    );
}

#[test]
fn alternation_of_sequences() {
    let m = compile(query::concat(is('a'), is('b')).or(query::concat(is('a'), is('c'))));

    assert_eq!(run(&m, &["ab", "ac", "a", "bc"]), [true, true, false, false]);
}

#[test]
fn ambiguous_branches_are_explored_in_parallel() {
    // Both branches consume the first 'a'; only the second can finish.
    let m = compile(
        query::literal(is('a'))
            .then(is('b'))
            .or(query::one_or_more(is('a'))),
    );

    assert_eq!(run(&m, &["ab", "aaa", "aab"]), [true, true, false]);
}

#[test]
fn any_matches_everything() {
    let m = compile(Query::any());

    assert_eq!(run(&m, &["", "x", "xyz"]), [true, true, true]);
}

#[test]
fn any_of_and_sequence() {
    let alt = compile(query::any_of([is('a'), is('b'), is('c')]).unwrap());
    let seq = compile(query::sequence([is('a'), is('b'), is('c')]).unwrap());

    assert_eq!(run(&alt, &["a", "b", "c", "d", ""]), [true, true, true, false, false]);
    assert_eq!(run(&seq, &["abc", "ab", "abcc", "cba"]), [true, false, false, false]);
}

#[test]
fn ignored_elements_are_transparent() {
    let m = query::concat(is('a'), is('b'))
        .compile_ignoring(is('_'))
        .unwrap();

    assert_eq!(
        run(&m, &["a_b", "ab", "a__b", "_ab_", "a_", "a_c"]),
        [true, true, true, true, false, false]
    );
}

#[test]
fn ignore_takes_precedence_over_consume() {
    let m = query::literal(is('a')).compile_ignoring(is('a')).unwrap();

    assert_eq!(run(&m, &["a", ""]), [false, false]);
}

#[test]
fn default_ignores_nothing() {
    let m = compile(query::literal(is('a')));

    assert_eq!(m.ignore().label(), Some("never"));
}

#[test]
fn predicates_see_position() {
    let not_first = Predicate::new(|ctx: &Context, _: &char| !ctx.is_first());
    let m = compile(query::zero_or_more(Predicate::<char>::always()).then(not_first));

    assert_eq!(run(&m, &["x", "xy", "xyz"]), [false, true, true]);
}

#[test]
fn ignored_elements_advance_position() {
    let third = Predicate::new(|ctx: &Context, _: &char| ctx.index() == 2);
    let m = query::literal(third).compile_ignoring(is('_')).unwrap();

    // 'x' sits at index 2 even though both '_' are skipped.
    assert_eq!(run(&m, &["__x", "x", "_x"]), [true, false, false]);
}

#[test]
fn matcher_is_reentrant() {
    let m = compile(query::one_or_more(is('a')).then(is('b')));
    let good = chars("aab");
    let bad = chars("aa");

    assert!(m.matches(&good));
    assert!(!m.matches(&bad));
    assert!(m.matches(&good));
    assert!(!m.matches(&bad));
}

#[test]
fn long_repeats_terminate() {
    let m = compile(query::zero_or_more(is('a')));
    let mut input = vec!['a'; 10_000];

    assert!(m.matches(&input));
    input.push('b');
    assert!(!m.matches(&input));
}

#[test]
fn nested_repeats_terminate() {
    let m = compile(query::zero_or_more(query::zero_or_more(is('a'))));

    assert!(m.matches(&[]));
    assert!(m.matches(&vec!['a'; 10_000]));
    assert!(!m.matches(&chars("aab")));
}

#[test]
fn repeat_of_nullable_alternation_terminates() {
    let m = compile(query::zero_or_more(query::alternate(
        query::zero_or_more(is('a')),
        query::zero_or_more(is('b')),
    )));

    assert_eq!(run(&m, &["", "abba", "abc"]), [true, true, false]);
}

#[test]
fn long_concat_chain() {
    let input = vec!['a'; 1_000];
    let m = compile(query::sequence(input.iter().map(|&c| is(c))).unwrap());

    assert!(m.matches(&input));
    assert!(!m.matches(&input[1..]));
}

#[test]
fn very_long_chain_round_trip() {
    let n = 200_000;
    let input = vec!['a'; n];
    let q = query::sequence(input.iter().map(|&c| is(c))).unwrap();

    let m = compile(q.clone());
    assert!(m.matches(&input));
    assert!(!m.matches(&input[1..]));

    let rendered = q.to_string();
    assert_eq!(rendered.len(), 5 * n - 1);
    assert!(rendered.starts_with("='a' ='a'"));

    drop(q);
    drop(m);
}

#[test]
fn matches_iter_accepts_any_iterator() {
    let m = compile(query::literal(is('a')).then(is('b')));
    let deque: VecDeque<char> = chars("ab").into();

    assert!(m.matches_iter(&deque));
    assert!(m.matches_iter(chars("xab").iter().skip(1)));
}

#[test]
fn dead_frontier_stops_scanning() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let ignore = Predicate::from_fn(move |_: &char| {
        counter.fetch_add(1, Ordering::Relaxed);
        false
    });
    let m = query::literal(is('a')).compile_ignoring(ignore).unwrap();

    assert!(!m.matches(&chars("bxxx")));
    assert_eq!(seen.load(Ordering::Relaxed), 1);
}

#[test]
#[should_panic(expected = "predicate failed")]
fn predicate_panic_propagates() {
    let failing = Predicate::from_fn(|_: &char| panic!("predicate failed"));
    let m = compile(query::literal(failing));

    let _ = m.matches(&['a']);
}

#[test]
fn matcher_is_shared_across_threads() {
    fn assert_send_sync<S: Send + Sync>() {}
    assert_send_sync::<SequenceMatcher<char>>();

    let m = compile(query::literal(is('a')).zero_or_more(is('b')));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let m = &m;
                scope.spawn(move || {
                    let mut input = vec!['a'];
                    input.extend(std::iter::repeat_n('b', n * 100));
                    m.matches(&input)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn works_with_non_copy_elements() {
    #[derive(Debug, PartialEq)]
    enum Insn {
        Load(String),
        Store(String),
        Nop,
    }

    let load = Predicate::from_fn(|i: &Insn| matches!(i, Insn::Load(_))).named("load");
    let store = Predicate::from_fn(|i: &Insn| matches!(i, Insn::Store(_))).named("store");
    let m = query::literal(load)
        .one_or_more(store)
        .compile_ignoring(Predicate::equal_to(Insn::Nop))
        .unwrap();

    let input = vec![
        Insn::Load("x".into()),
        Insn::Nop,
        Insn::Store("y".into()),
        Insn::Store("z".into()),
    ];

    assert!(m.matches(&input));
    assert!(!m.matches(&input[..2]));
}
