//! Free-function aliases over [`Parser`]'s combinator methods. Each one is a
//! one-line delegation; they exist so callers can write `map(p, f)` as
//! readily as `p.map(f)`, giving a functional-style entry point alongside
//! the fluent method for the same operation.

use crate::input::Sequence;
use crate::Parser;

/// `map(p, f)`. See [`Parser::map`].
pub fn map<'a, S, R, R2>(
    p: Parser<'a, S, R>,
    f: impl Fn(R) -> R2 + Send + Sync + 'a,
) -> Parser<'a, S, R2>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
    R2: 'a,
{
    p.map(f)
}

/// `filter(p, pred)`. See [`Parser::filter`].
pub fn filter<'a, S, R>(
    p: Parser<'a, S, R>,
    pred: impl Fn(&R) -> bool + Send + Sync + 'a,
) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    p.filter(pred)
}

/// `orElse(p, default)`. See [`Parser::or_else`].
pub fn or_else<'a, S, R>(p: Parser<'a, S, R>, default: R) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    R: Clone + 'a,
{
    p.or_else(default)
}

/// `orNot(p)` / `maybe(p)`. See [`Parser::or_not`].
pub fn or_not<'a, S, R>(p: Parser<'a, S, R>) -> Parser<'a, S, Option<R>>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    p.or_not()
}

/// `chain(p, k)`. See [`Parser::chain`].
pub fn chain<'a, S, R, R2>(
    p: Parser<'a, S, R>,
    k: impl Fn(R) -> Parser<'a, S, R2> + Send + Sync + 'a,
) -> Parser<'a, S, R2>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
    R2: 'a,
{
    p.chain(k)
}

/// `must(p)`. See [`Parser::must`].
pub fn must<'a, S, R>(p: Parser<'a, S, R>) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    p.must()
}

/// `multi(base, aux)`. See [`Parser::multi`].
pub fn multi<'a, S, R, Aux>(base: Parser<'a, S, R>, aux: Parser<'a, S, Aux>) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
    Aux: 'a,
{
    base.multi(aux)
}
