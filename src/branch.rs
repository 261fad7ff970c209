//! `choice`/`oneOf`: try alternatives left-to-right over the same input.
//!
//! Because `Parser` already erases its closure, alternatives can live in a
//! plain `Vec` of one type with no arity limit. The tie-break on an
//! all-`Failure` outcome is the *last* attempted alternative, not the
//! deepest one — see `choice`'s doc comment.

use std::sync::Arc;

use crate::input::Sequence;
use crate::result::ParseResult;
use crate::Parser;

/**
 * `choice(p1, .., pn)`. Tries each alternative left-to-right, all starting
 * at the same input `Source` (no input is consumed across alternatives).
 * Stops at the first `Success` or `Error` and returns it.
 *
 * If every alternative returns `Failure`, returns the **last** one — the
 * most-recently-attempted alternative's diagnostic is taken to be the most
 * useful to a human reader, in contrast to a "furthest progress" heuristic.
 *
 * An empty alternative set yields `Failure` with `expected = "<empty
 * choice>"` at the input location.
 */
pub fn choice<'a, S, R>(parsers: Vec<Parser<'a, S, R>>) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    let description: Arc<str> = format!("choice({} alternatives)", parsers.len()).into();
    Parser::new(description, move |source| {
        if parsers.is_empty() {
            return ParseResult::failure("<empty choice>", source.location());
        }
        let mut last_failure = None;
        for parser in &parsers {
            match parser.invoke(source) {
                success @ ParseResult::Success { .. } => return success,
                error @ ParseResult::Error { .. } => return error,
                failure @ ParseResult::Failure { .. } => last_failure = Some(failure),
            }
        }
        last_failure.expect("non-empty parsers always sets last_failure or returns earlier")
    })
}

/// Convenience macro: `choice!(p, q, r)` == `choice(vec![p, q, r])`.
#[macro_export]
macro_rules! choice {
    ($($parser:expr),+ $(,)?) => {
        $crate::choice(vec![$($parser),+])
    };
}
