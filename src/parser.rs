//! The [`Parser`] abstraction: a pure function `Source -> ParseResult`,
//! plus a human-readable description used only in diagnostics.

use std::sync::Arc;

use crate::input::{Sequence, Source};
use crate::result::ParseResult;

type RunFn<'a, S, R> = dyn Fn(Source<'a, S>) -> ParseResult<'a, S, R> + Send + Sync + 'a;

/**
 * A parser over input `S` (typically `str` or `[T]`) producing values of
 * type `R`.
 *
 * A `Parser` is a thin, cheaply-cloneable wrapper around a boxed closure:
 * cloning copies an `Arc`, not the closure's captured state. Invoking the
 * same `Parser` on equal `Source`s always produces equal `ParseResult`s,
 * provided any closures the caller supplied to `map`/`filter`/`chain`/
 * operator-table mappings are themselves pure.
 */
pub struct Parser<'a, S: ?Sized + Sequence, R> {
    description: Arc<str>,
    run: Arc<RunFn<'a, S, R>>,
}

impl<'a, S: ?Sized + Sequence, R> Clone for Parser<'a, S, R> {
    fn clone(&self) -> Self {
        Parser {
            description: self.description.clone(),
            run: self.run.clone(),
        }
    }
}

impl<'a, S: ?Sized + Sequence + 'a, R: 'a> Parser<'a, S, R> {
    /// Builds a parser from its description and its invocation closure.
    pub fn new(
        description: impl Into<Arc<str>>,
        run: impl Fn(Source<'a, S>) -> ParseResult<'a, S, R> + Send + Sync + 'a,
    ) -> Self {
        Parser {
            description: description.into(),
            run: Arc::new(run),
        }
    }

    /// Human-readable description, for diagnostics only — never parsed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Runs the parser against `source`.
    pub fn invoke(&self, source: Source<'a, S>) -> ParseResult<'a, S, R> {
        (self.run)(source)
    }

    /// `map(p, f)`: transforms the value of a `Success`; passes `NoSuccess` through.
    pub fn map<R2: 'a>(self, f: impl Fn(R) -> R2 + Send + Sync + 'a) -> Parser<'a, S, R2> {
        let description: Arc<str> = format!("map({})", self.description).into();
        Parser::new(description, move |source| self.invoke(source).map(&f))
    }

    /**
     * `filter(p, pred)`: accepts `Success` only if `pred(value)` holds,
     * otherwise converts to `Failure` at the *original* input location
     * (not `rest`). `NoSuccess` passes through.
     */
    pub fn filter(self, pred: impl Fn(&R) -> bool + Send + Sync + 'a) -> Parser<'a, S, R> {
        let description: Arc<str> = format!("filter({})", self.description).into();
        Parser::new(description, move |source| match self.invoke(source) {
            ParseResult::Success { rest, value } => {
                if pred(&value) {
                    ParseResult::Success { rest, value }
                } else {
                    ParseResult::failure("filter", source.location())
                }
            }
            other => other,
        })
    }

    /**
     * `orElse(p, default)`: if `p` yields `Success` or `Error`, returns it
     * unchanged. If `Failure`, returns `Success(input, default)` at the
     * unchanged input `Source`. Never returns `Failure` (totality).
     */
    pub fn or_else(self, default: R) -> Parser<'a, S, R>
    where
        R: Clone,
    {
        let description: Arc<str> = format!("orElse({})", self.description).into();
        Parser::new(description, move |source| match self.invoke(source) {
            ParseResult::Failure { .. } => ParseResult::Success {
                rest: source,
                value: default.clone(),
            },
            other => other,
        })
    }

    /// `orNot(p)` == `orElse(p, None)`, wrapping the success value in `Some`.
    pub fn or_not(self) -> Parser<'a, S, Option<R>> {
        let description: Arc<str> = format!("orNot({})", self.description).into();
        let mapped = self.map(Some);
        Parser::new(description, move |source| match mapped.invoke(source) {
            ParseResult::Failure { .. } => ParseResult::Success {
                rest: source,
                value: None,
            },
            other => other,
        })
    }

    /**
     * `chain(p, k)`: runs `p`; on success calls `k(value)` to build a new
     * parser, and runs that parser at `p`'s `rest`. Propagates `NoSuccess`.
     */
    pub fn chain<R2: 'a>(
        self,
        k: impl Fn(R) -> Parser<'a, S, R2> + Send + Sync + 'a,
    ) -> Parser<'a, S, R2> {
        let description: Arc<str> = format!("chain({})", self.description).into();
        Parser::new(description, move |source| match self.invoke(source) {
            ParseResult::Success { rest, value } => k(value).invoke(rest),
            ParseResult::Failure { expected, at } => ParseResult::Failure { expected, at },
            ParseResult::Error { expected, at } => ParseResult::Error { expected, at },
        })
    }

    /**
     * `must(p)`: commits. If `p` returns `Failure`, re-emits it as `Error`
     * at the same location with the same `expected` string. `Success` and
     * `Error` pass through unchanged.
     */
    pub fn must(self) -> Parser<'a, S, R> {
        let description: Arc<str> = format!("must({})", self.description).into();
        Parser::new(description, move |source| self.invoke(source).commit())
    }

    /**
     * `multi(base, aux)`: look-ahead conjunction. Runs `base` at `source`;
     * if it succeeds, re-runs `aux` at the *original* `source` (not
     * `base`'s `rest`). If `aux` is a `NoSuccess`, propagates it. Otherwise
     * returns `base`'s `Success` unchanged — `aux` never contributes input
     * consumption.
     */
    pub fn multi<Aux: 'a>(self, aux: Parser<'a, S, Aux>) -> Parser<'a, S, R> {
        let description: Arc<str> = format!("multi({}, {})", self.description, aux.description).into();
        Parser::new(description, move |source| match self.invoke(source) {
            ParseResult::Success { rest, value } => match aux.invoke(source) {
                ParseResult::Success { .. } => ParseResult::Success { rest, value },
                ParseResult::Failure { expected, at } => ParseResult::Failure { expected, at },
                ParseResult::Error { expected, at } => ParseResult::Error { expected, at },
            },
            other => other,
        })
    }

    /// `many(p)`: see [`crate::many`].
    pub fn many(self) -> Parser<'a, S, Vec<R>>
    where
        R: 'a,
    {
        crate::repeat::many(self)
    }

    /// `manyOne(p)`: see [`crate::many_one`].
    pub fn many_one(self) -> Parser<'a, S, Vec<R>>
    where
        R: 'a,
    {
        crate::repeat::many_one(self)
    }

    /// `repeated(p, range)`: see [`crate::repeated`].
    pub fn repeated(self, range: std::ops::RangeInclusive<usize>) -> Parser<'a, S, Vec<R>>
    where
        R: 'a,
    {
        crate::repeat::repeated(self, range)
    }
}
