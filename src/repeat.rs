//! Repetition: `many`, `manyOne`, `repeated`, `joinedBy`, `foldedBy`/`rfoldedBy`.
//!
//! Each of these runs an inner parser from a loop tracking the current
//! position and an accumulator, stopping on the first `Failure` and
//! propagating `Error` immediately. The accumulator is always a plain
//! `Vec<R>`; there is no generic reducer abstraction, since every
//! combinator here only ever collects into a list or folds one in place
//! (see [`many`] and [`repeated`]).

use std::sync::Arc;

use crate::input::Sequence;
use crate::result::ParseResult;
use crate::sequence::zip;
use crate::Parser;

/**
 * `many(p)`: unbounded Kleene closure. Repeatedly invokes `p` from the
 * current position, accumulating values while it succeeds. Stops (with
 * `Success`) on the first `Failure`. Propagates `Error` immediately.
 *
 * **Progress guard**: if an iteration succeeds without consuming input
 * (`rest.location() == current.location()`), `many` returns `Error` naming
 * the non-consuming inner parser — otherwise this would loop forever.
 */
pub fn many<'a, S, R>(p: Parser<'a, S, R>) -> Parser<'a, S, Vec<R>>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    let description: Arc<str> = format!("many({})", p.description()).into();
    Parser::new(description, move |source| {
        let mut values = Vec::new();
        let mut current = source;
        loop {
            match p.invoke(current) {
                ParseResult::Success { rest, value } => {
                    if rest.location() == current.location() {
                        return ParseResult::error(
                            format!(
                                "many: inner parser `{}` succeeded without consuming input",
                                p.description()
                            ),
                            current.location(),
                        );
                    }
                    values.push(value);
                    current = rest;
                }
                ParseResult::Failure { .. } => {
                    return ParseResult::Success {
                        rest: current,
                        value: values,
                    }
                }
                ParseResult::Error { expected, at } => return ParseResult::Error { expected, at },
            }
        }
    })
}

/// `manyOne(p)`: fails if the first invocation fails; otherwise `p` followed
/// by `many(p)`, collected into one non-empty `Vec`.
pub fn many_one<'a, S, R>(p: Parser<'a, S, R>) -> Parser<'a, S, Vec<R>>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    let rest = many(p.clone());
    zip(p, rest, |first, rest| {
        let mut values = Vec::with_capacity(1 + rest.len());
        values.push(first);
        values.extend(rest);
        values
    })
}

/**
 * `repeated(p, lo..=hi)`: bounded repetition, `0 <= lo <= hi`. Runs `p` up
 * to `hi` times. If the collected count is `< lo`, `Failure` at the
 * original input location; otherwise `Success` at the last consumed
 * position. An empty range (`lo > hi`) always succeeds with `vec![]`.
 * Exact repetition of `n` is `repeated(p, n..=n)`.
 */
pub fn repeated<'a, S, R>(
    p: Parser<'a, S, R>,
    range: std::ops::RangeInclusive<usize>,
) -> Parser<'a, S, Vec<R>>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    let description: Arc<str> = format!(
        "repeated({}, {}..={})",
        p.description(),
        range.start(),
        range.end()
    )
    .into();
    Parser::new(description, move |source| {
        if range.is_empty() {
            return ParseResult::success(source, Vec::new());
        }
        let lo = *range.start();
        let hi = *range.end();
        let mut values = Vec::new();
        let mut current = source;
        loop {
            if values.len() >= hi {
                break;
            }
            match p.invoke(current) {
                ParseResult::Success { rest, value } => {
                    values.push(value);
                    current = rest;
                }
                ParseResult::Failure { .. } => break,
                ParseResult::Error { expected, at } => return ParseResult::Error { expected, at },
            }
        }
        if values.len() < lo {
            ParseResult::failure(format!("at least {} repetitions of {}", lo, p.description()), source.location())
        } else {
            ParseResult::success(current, values)
        }
    })
}

/**
 * `joinedBy(p, sep)` — separator output discarded. Parses `p (sep p)*` and
 * returns `Vec<A>` of the `p`-values only. Zero occurrences of `p` succeeds
 * with `vec![]`.
 */
pub fn joined_by<'a, S, A, U>(p: Parser<'a, S, A>, sep: Parser<'a, S, U>) -> Parser<'a, S, Vec<A>>
where
    S: ?Sized + Sequence + 'a,
    A: Clone + 'a,
    U: 'a,
{
    let pair = zip(sep, p.clone(), |_sep, v| v);
    let rest = many(pair);
    let combined = zip(p, rest, |first, mut rest: Vec<A>| {
        let mut values = vec![first];
        values.append(&mut rest);
        values
    });
    combined.or_else(Vec::new())
}

/**
 * `joinedBy(p, sep)` — separator output kept. Parses `p (sep p)*` and
 * returns a single flat `Vec<A>` interleaving `p` and `sep` values
 * (`[p0, sep0, p1, sep1, p2, ...]`); length is always odd when non-empty.
 */
pub fn joined_by_flat<'a, S, A>(p: Parser<'a, S, A>, sep: Parser<'a, S, A>) -> Parser<'a, S, Vec<A>>
where
    S: ?Sized + Sequence + 'a,
    A: Clone + 'a,
{
    let pair = zip(sep, p.clone(), |s, v| vec![s, v]);
    let rest = many(pair).map(|chunks: Vec<Vec<A>>| chunks.into_iter().flatten().collect::<Vec<A>>());
    let combined = zip(p, rest, |first, mut rest: Vec<A>| {
        let mut values = vec![first];
        values.append(&mut rest);
        values
    });
    combined.or_else(Vec::new())
}

/// A parsed binary operator: combines two `A`s into one. Used by
/// [`joinedBy`](joined_by)'s third overload (folded into [`folded_by`]/
/// [`rfolded_by`]) and by the [operator table builder](crate::operator).
pub type BinOp<'a, A> = Arc<dyn Fn(A, A) -> A + Send + Sync + 'a>;

/**
 * `foldedBy(p, sep)` — left-associative: parses `p`, then zero or more
 * `(sep, p)` pairs, left-folding the trailing pairs into the initial value
 * using each `sep`'s operator.
 */
pub fn folded_by<'a, S, A>(p: Parser<'a, S, A>, sep: Parser<'a, S, BinOp<'a, A>>) -> Parser<'a, S, A>
where
    S: ?Sized + Sequence + 'a,
    A: 'a,
{
    let pair = zip(sep, p.clone(), |f, v| (f, v));
    let rest = many(pair);
    zip(p, rest, |first, rest: Vec<(BinOp<'a, A>, A)>| {
        rest.into_iter().fold(first, |acc, (f, v)| f(acc, v))
    })
}

/**
 * `rfoldedBy(p, sep)` — right-associative. Given values `v0 (f1 v1) (f2 v2)
 * ... (fn vn)`, the result is `f1(v0, f2(v1, f3(v2, ... fn(vn-1, vn)...)))`.
 */
pub fn rfolded_by<'a, S, A>(p: Parser<'a, S, A>, sep: Parser<'a, S, BinOp<'a, A>>) -> Parser<'a, S, A>
where
    S: ?Sized + Sequence + 'a,
    A: 'a,
{
    let pair = zip(sep, p.clone(), |f, v| (f, v));
    let rest = many(pair);
    zip(p, rest, |first, rest: Vec<(BinOp<'a, A>, A)>| {
        if rest.is_empty() {
            return first;
        }
        let mut values = vec![first];
        let mut funcs = Vec::with_capacity(rest.len());
        for (f, v) in rest {
            funcs.push(f);
            values.push(v);
        }
        let mut acc = values.pop().expect("values always has at least one element");
        while let Some(f) = funcs.pop() {
            let v = values.pop().expect("funcs/values stay in lock-step");
            acc = f(v, acc);
        }
        acc
    })
}
