//! `defer` and `recursive`: referencing a parser that doesn't exist yet at
//! construction time.
//!
//! Since a grammar is built out of `Parser` values rather than types the
//! compiler resolves per call site, a self-referential or forward-
//! referencing rule needs an explicit tie-the-knot primitive.
//! `std::sync::OnceLock` gives one-time initialization with a
//! happens-before barrier for safe concurrent first invocation, without
//! unsafe code.

use std::sync::{Arc, OnceLock};

use crate::input::Sequence;
use crate::Parser;

/**
 * `defer(thunk)`: wraps a zero-argument producer of a `Parser`. `thunk` is
 * memoized — it runs at most once, on the first actual invocation, not at
 * construction time. Used when a parser expression needs to reference
 * another parser not yet defined in construction order.
 */
pub fn defer<'a, S, R>(thunk: impl Fn() -> Parser<'a, S, R> + Send + Sync + 'a) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    let cell: Arc<OnceLock<Parser<'a, S, R>>> = Arc::new(OnceLock::new());
    Parser::new("defer(..)", move |source| {
        let parser = cell.get_or_init(&thunk);
        parser.invoke(source)
    })
}

/**
 * `recursive(f)`: the fixpoint gadget. Builds `P` such that `P = f(P)`:
 * `f` receives a handle to `P` itself and is only ever called once, lazily,
 * on the first actual parse — never during construction — so `f` can
 * freely embed its own argument in the parser expression it returns
 * without looping forever while being built.
 *
 * `f`'s argument is only safe to *invoke* at points in the grammar that
 * are not reached before some input has already been consumed; this crate
 * does not (and, as a bottom-up combinator library, cannot) detect true
 * left recursion.
 */
pub fn recursive<'a, S, R>(
    f: impl Fn(Parser<'a, S, R>) -> Parser<'a, S, R> + Send + Sync + 'a,
) -> Parser<'a, S, R>
where
    S: ?Sized + Sequence + 'a,
    R: 'a,
{
    let cell: Arc<OnceLock<Parser<'a, S, R>>> = Arc::new(OnceLock::new());
    let cell_for_ref = cell.clone();
    let self_ref: Parser<'a, S, R> = Parser::new("recursive(self)", move |source| {
        cell_for_ref
            .get()
            .expect("recursive: self-reference invoked before the fixpoint finished construction")
            .invoke(source)
    });
    Parser::new("recursive(..)", move |source| {
        let parser = cell.get_or_init(|| f(self_ref.clone()));
        parser.invoke(source)
    })
}
