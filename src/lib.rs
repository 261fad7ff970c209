//! > Parsekit. A composable parser combinator library.
//!
//! Parsekit builds parsers as ordinary, cheaply-cloneable values: a
//! [`Parser<'a, S, R>`] is a pure function from a [`Source`] to a
//! [`ParseResult`], plus a description used only for diagnostics. There is
//! no trait to implement and no macro to invoke per grammar rule — every
//! combinator below is a function (or a method on `Parser`) that takes
//! parsers and returns a parser.
//!
//! All of these are parsers, built from the primitives in this crate and a
//! pair of atom parsers `DIGIT`/`CHAR(c)` a caller supplies (this crate
//! deliberately does not ship token-level literal helpers — see the
//! `Non-goals` in its design notes):
//!
//!| Parser | Input | Parsing | Output | `rest` after parsing |
//!| - | - | - | - | - |
//!| `DIGIT` | `"7ab"` | `DIGIT.invoke(source)` | `Success(7)` | `"ab"` |
//!| `DIGIT` | `"ab"` | `DIGIT.invoke(source)` | `Failure("digit", 0)` | `"ab"` |
//!| `many(DIGIT)` | `"12a"` | `.invoke(source)` | `Success([1,2])` | `"a"` |
//!| `many(DIGIT)` | `""` | `.invoke(source)` | `Success([])` | `""` |
//!| `DIGIT.or_not()` | `"a"` | `.invoke(source)` | `Success(None)` | `"a"` |
//!| `DIGIT.must()` | `"a"` | `.invoke(source)` | `Error("digit", 0)` | n/a |
//!
//! These combine with [`zip`], [`choice`], [`recursive`], and
//! [`operator_table`] into full grammars, including operator-precedence
//! parsers with mixed associativity (see [`operator`] for the `1+2*3`
//! example worked out in the crate's tests).
//!
//! Some of the combinator shapes here — particularly the fixpoint gadget
//! in [`recursion`] and the precedence-table layering in [`operator`] —
//! follow the well-known pattern used by combinator libraries like
//! chumsky and nom; the primitive algebra (the `Success`/`Failure`/`Error`
//! three-way split and its absorption rules) follows scala-parser-
//! combinators' `Parsers` trait.

pub mod branch;
pub mod combinator;
pub mod input;
pub mod location;
pub mod operator;
pub mod parser;
pub mod recursion;
pub mod repeat;
pub mod result;
pub mod sequence;

pub use branch::choice;
pub use combinator::{chain, filter, map, multi, must, or_else, or_not};
pub use input::{Sequence, Source};
pub use location::Location;
pub use operator::{operator_table, Assoc, OperatorTable, DEFAULT_PRIORITY};
pub use parser::Parser;
pub use recursion::{defer, recursive};
pub use repeat::{folded_by, joined_by, joined_by_flat, many, many_one, repeated, rfolded_by, BinOp};
pub use result::{NoSuccess, ParseResult};
pub use sequence::{sequence, zip, zip3};

/// `orNot`'s better-known alias; identical to [`or_not`].
pub fn maybe<'a, S, R>(p: Parser<'a, S, R>) -> Parser<'a, S, Option<R>>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    or_not(p)
}

/**
 * `parse(charSequence)`: runs `parser` against a `&str`. Always invokes the
 * parser exactly once; returns its raw [`ParseResult`].
 */
pub fn parse_str<'a, R>(parser: &Parser<'a, str, R>, input: &'a str) -> ParseResult<'a, str, R> {
    parser.invoke(Source::new("<input>", input))
}

/**
 * `parse(listOfTokens)`: runs `parser` against a `&[T]`. Always invokes the
 * parser exactly once; returns its raw [`ParseResult`].
 */
pub fn parse_slice<'a, T, R>(parser: &Parser<'a, [T], R>, input: &'a [T]) -> ParseResult<'a, [T], R>
where
    T: Clone,
{
    parser.invoke(Source::new("<input>", input))
}

/**
 * `parse(arrayOfTokens)`: runs `parser` against a `&[T; N]`, by reborrowing
 * it as a slice and delegating to [`parse_slice`].
 */
pub fn parse_array<'a, T, R, const N: usize>(
    parser: &Parser<'a, [T], R>,
    input: &'a [T; N],
) -> ParseResult<'a, [T], R>
where
    T: Clone,
{
    parse_slice(parser, input.as_slice())
}
