//! Integration tests over the public combinator surface, built on the
//! `digit`/`char_tok` atoms in `common`. Covers the scenarios worked out
//! alongside the primitive combinators, plus the recursion and
//! operator-table gadgets.

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;

use common::{char_tok, digit};
use parsekit::{
    choice, many, many_one, multi, must, operator_table, parse_str, recursive, repeated,
    rfolded_by, zip, zip3, BinOp,
};

fn expect_success<'a, R>(result: parsekit::ParseResult<'a, str, R>, rest: &str, value: R)
where
    R: PartialEq + std::fmt::Debug,
{
    match result {
        parsekit::ParseResult::Success { rest: r, value: v } => {
            assert_eq!(value, v);
            assert_eq!(rest, r.remaining());
        }
        other => panic!("expected Success, got {:?}", other.no_success()),
    }
}

fn expect_failure<'a, R: std::fmt::Debug>(
    result: parsekit::ParseResult<'a, str, R>,
    offset: usize,
    expected: &str,
) {
    match result {
        parsekit::ParseResult::Failure { expected: e, at } => {
            assert_eq!(expected, &*e);
            assert_eq!(offset, at.offset);
        }
        other => panic!("expected Failure, got {:?}", other),
    }
}

fn expect_error<'a, R: std::fmt::Debug>(
    result: parsekit::ParseResult<'a, str, R>,
    offset: usize,
    expected: &str,
) {
    match result {
        parsekit::ParseResult::Error { expected: e, at } => {
            assert_eq!(expected, &*e);
            assert_eq!(offset, at.offset);
        }
        other => panic!("expected Error, got {:?}", other),
    }
}

#[test]
fn digit_success() {
    // S1
    expect_success(parse_str(&digit(), "7"), "", 7);
}

#[test]
fn digit_failure() {
    // S2
    expect_failure(parse_str(&digit(), "ab"), 0, "digit");
}

#[test]
fn many_digits_success() {
    // S3
    expect_success(parse_str(&many(digit()), "12"), "", vec![1, 2]);
}

#[test]
fn many_digits_empty_input() {
    // S4
    expect_success(parse_str(&many(digit()), ""), "", Vec::<i64>::new());
}

#[test]
fn many_stops_at_first_failure_without_consuming_it() {
    expect_success(parse_str(&many(digit()), "12a"), "a", vec![1, 2]);
}

#[test]
fn recursive_parenthesized_digit() {
    // S5
    let expr = recursive(|p| {
        choice(vec![
            digit(),
            zip3(char_tok('('), p, char_tok(')'), |_, v, _| v),
        ])
    });
    expect_success(parse_str(&expr, "(5)"), "", 5);
    expect_success(parse_str(&expr, "5"), "", 5);
    expect_success(parse_str(&expr, "((5))"), "", 5);
}

fn arithmetic_table<'a>() -> parsekit::Parser<'a, str, i64> {
    operator_table(digit())
        .left(char_tok('*'), 8, |a, _, b| a * b)
        .left(char_tok('+'), 7, |a, _, b| a + b)
        .build()
}

#[test]
fn operator_table_respects_priority() {
    // S6
    expect_success(parse_str(&arithmetic_table(), "1+2*3"), "", 7);
}

#[test]
fn operator_table_left_associates() {
    // property 7
    expect_success(parse_str(&arithmetic_table(), "1+2+3"), "", 6);
    expect_success(parse_str(&arithmetic_table(), "8-3-2"), "8-3-2", 8);
}

#[test]
fn must_commits_a_dangling_operator() {
    // S7: same grammar as S6, but the right operand of `+` is a commit point.
    let expr = zip3(digit(), char_tok('+'), digit().must(), |a, _, b| a + b);
    expect_error(parse_str(&expr, "1+"), 2, "digit");
}

#[test]
fn repeated_within_bounds() {
    // S8
    expect_success(
        parse_str(&repeated(char_tok('a'), 2..=4), "aaa"),
        "",
        vec![(), (), ()],
    );
}

#[test]
fn repeated_below_minimum_fails() {
    // S9
    expect_failure(parse_str(&repeated(char_tok('a'), 2..=4), "a"), 0, "at least 2 repetitions of 'a'");
}

#[test]
fn repeated_stops_at_the_maximum() {
    expect_success(
        parse_str(&repeated(char_tok('a'), 0..=2), "aaaa"),
        "aa",
        vec![(), ()],
    );
}

#[test]
fn many_one_requires_at_least_one() {
    expect_failure(parse_str(&many_one(digit()), "a"), 0, "digit");
    expect_success(parse_str(&many_one(digit()), "1a"), "a", vec![1]);
}

#[test]
fn chain_threads_the_parsed_value() {
    let length_prefixed = digit().chain(|n| repeated(char_tok('x'), n as usize..=n as usize));
    expect_success(
        parse_str(&length_prefixed, "3xxx"),
        "",
        vec![(), (), ()],
    );
}

#[test]
fn multi_does_not_let_aux_consume_input() {
    let base = digit();
    let aux = digit().filter(|n| *n % 2 == 0);
    let parser = multi(base, aux);
    expect_success(parse_str(&parser, "41"), "1", 4);
    expect_failure(parse_str(&parser, "3"), 0, "filter");
}

#[test]
fn must_passes_success_and_error_through_unchanged() {
    expect_success(parse_str(&must(digit()), "7"), "", 7);
    let always_errors = digit().must().must();
    expect_error(parse_str(&always_errors, "a"), 0, "digit");
}

#[test]
fn joined_by_discards_the_separator() {
    let list = parsekit::joined_by(digit(), char_tok(','));
    expect_success(parse_str(&list, "1,2,3"), "", vec![1, 2, 3]);
    expect_success(parse_str(&list, ""), "", Vec::<i64>::new());
}

#[test]
fn joined_by_flat_keeps_the_separator() {
    let list = parsekit::joined_by_flat(digit(), char_tok(',').map(|_| -1));
    expect_success(parse_str(&list, "1,2,3"), "", vec![1, -1, 2, -1, 3]);
}

#[test]
fn folded_by_is_left_associative() {
    let sep: parsekit::Parser<'_, str, BinOp<'_, i64>> =
        char_tok('+').map(|_| Arc::new(|a: i64, b: i64| a + b) as BinOp<'_, i64>);
    let folded = parsekit::folded_by(digit(), sep);
    expect_success(parse_str(&folded, "1+2+3"), "", 6);
}

#[test]
fn rfolded_by_is_right_associative() {
    let sep: parsekit::Parser<'_, str, BinOp<'_, i64>> =
        char_tok('-').map(|_| Arc::new(|a: i64, b: i64| a - b) as BinOp<'_, i64>);
    // 1 - (2 - 3) = 2, distinct from the left fold (1 - 2) - 3 = -4
    let folded = rfolded_by(digit(), sep);
    expect_success(parse_str(&folded, "1-2-3"), "", 2);
}

#[test]
fn choice_is_left_biased_and_keeps_the_last_failure() {
    let parser = choice(vec![char_tok('a'), char_tok('b')]);
    expect_success(parse_str(&parser, "a"), "", ());
    expect_failure(parse_str(&parser, "c"), 0, "'b'");
}

#[test]
fn choice_of_no_alternatives_fails() {
    let parser: parsekit::Parser<'_, str, i64> = choice(vec![]);
    expect_failure(parse_str(&parser, "1"), 0, "<empty choice>");
}

#[test]
fn or_else_is_total() {
    let parser = digit().or_else(0);
    expect_success(parse_str(&parser, "a"), "a", 0);
}

#[test]
fn or_not_wraps_in_option() {
    expect_success(parse_str(&digit().or_not(), "a"), "a", None);
    expect_success(parse_str(&digit().or_not(), "7"), "", Some(7));
}

#[test]
fn sequence_collects_in_order() {
    let parser = parsekit::sequence(vec![digit(), digit(), digit()]);
    expect_success(parse_str(&parser, "123"), "", vec![1, 2, 3]);
}

#[test]
fn zip_runs_left_to_right() {
    let parser = zip(digit(), digit(), |a, b| a * 10 + b);
    expect_success(parse_str(&parser, "12"), "", 12);
}
