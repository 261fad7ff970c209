//! Atom parsers shared by the integration tests. Not part of the crate's
//! public surface — callers are expected to supply their own token-level
//! primitives, per the crate's design notes on what it does and doesn't ship.

use parsekit::{ParseResult, Parser, Source};

/// A single decimal digit, parsed to its numeric value.
pub fn digit<'a>() -> Parser<'a, str, i64> {
    Parser::new("digit", |source: Source<'a, str>| match source.head() {
        Some(c) if c.is_ascii_digit() => {
            ParseResult::success(source.advance(), c.to_digit(10).unwrap() as i64)
        }
        _ => ParseResult::failure("digit", source.location()),
    })
}

/// A specific character token, discarding its value.
pub fn char_tok<'a>(expected: char) -> Parser<'a, str, ()> {
    Parser::new(
        format!("'{}'", expected),
        move |source: Source<'a, str>| match source.head() {
            Some(c) if c == expected => ParseResult::success(source.advance(), ()),
            _ => ParseResult::failure(format!("'{}'", expected), source.location()),
        },
    )
}
