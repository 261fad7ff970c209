//! `zip`/`sequence`: running parsers one after another over the same input.
//!
//! Since `Parser<'a, S, R>` already erases its closure behind an
//! `Arc<dyn Fn>`, one `zip` plus one n-ary `sequence` cover every arity
//! with no per-arity type or macro needed.

use std::sync::Arc;

use crate::input::Sequence;
use crate::result::ParseResult;
use crate::Parser;

/**
 * `zip(p, q, f)`. Runs `p` at the input; on success, runs `q` at `p`'s
 * `rest`; on success, returns `f(p_value, q_value)` at `q`'s `rest`. Any
 * `NoSuccess` from either sub-parser is returned verbatim.
 */
pub fn zip<'a, S, A, B, R>(
    p: Parser<'a, S, A>,
    q: Parser<'a, S, B>,
    f: impl Fn(A, B) -> R + Send + Sync + 'a,
) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    A: 'a,
    B: 'a,
    R: 'a,
{
    let description: Arc<str> = format!("zip({}, {})", p.description(), q.description()).into();
    Parser::new(description, move |source| match p.invoke(source) {
        ParseResult::Success {
            rest: rest_p,
            value: a,
        } => match q.invoke(rest_p) {
            ParseResult::Success {
                rest: rest_q,
                value: b,
            } => ParseResult::Success {
                rest: rest_q,
                value: f(a, b),
            },
            ParseResult::Failure { expected, at } => ParseResult::Failure { expected, at },
            ParseResult::Error { expected, at } => ParseResult::Error { expected, at },
        },
        ParseResult::Failure { expected, at } => ParseResult::Failure { expected, at },
        ParseResult::Error { expected, at } => ParseResult::Error { expected, at },
    })
}

/// Ternary sugar over nested `zip`: `zip3(p, q, r, f)` == `zip(zip(p, q, |a,b| (a,b)), r, |(a,b), c| f(a,b,c))`.
pub fn zip3<'a, S, A, B, C, R>(
    p: Parser<'a, S, A>,
    q: Parser<'a, S, B>,
    r: Parser<'a, S, C>,
    f: impl Fn(A, B, C) -> R + Send + Sync + 'a,
) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    A: 'a,
    B: 'a,
    C: 'a,
    R: 'a,
{
    let pq = zip(p, q, |a, b| (a, b));
    zip(pq, r, move |(a, b), c| f(a, b, c))
}

/**
 * N-ary `sequence`: runs each parser in `parsers` in order over the same
 * thread of input, collecting their values into a `Vec` in order.
 *
 * Empty `parsers` succeeds with `vec![]` at the unchanged `Source`.
 * Otherwise the result's `rest` equals the `rest` of the last sub-parser.
 */
pub fn sequence<'a, S, R>(parsers: Vec<Parser<'a, S, R>>) -> Parser<'a, S, Vec<R>>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    let description: Arc<str> = format!("sequence({} parsers)", parsers.len()).into();
    Parser::new(description, move |source| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut current = source;
        for parser in &parsers {
            match parser.invoke(current) {
                ParseResult::Success { rest, value } => {
                    values.push(value);
                    current = rest;
                }
                ParseResult::Failure { expected, at } => {
                    return ParseResult::Failure { expected, at }
                }
                ParseResult::Error { expected, at } => return ParseResult::Error { expected, at },
            }
        }
        ParseResult::Success {
            rest: current,
            value: values,
        }
    })
}
