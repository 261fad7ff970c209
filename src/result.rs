//! The four-variant outcome of one parser invocation.

use std::fmt;
use std::sync::Arc;

use crate::input::Sequence;
use crate::location::Location;
use crate::Source;

/**
 * The outcome of invoking a single [`Parser`](crate::Parser).
 *
 * `Failure` is recoverable (an enclosing [`choice`](crate::choice) may try
 * the next alternative); `Error` is not, and is absorbing under every
 * combinator in this crate, including `choice`.
 */
#[derive(Debug)]
pub enum ParseResult<'a, S: ?Sized + Sequence, R> {
    /// Parsed `value`; parsing continues from `rest`.
    Success { rest: Source<'a, S>, value: R },
    /// Recoverable: the position where the attempt began, and what it expected.
    Failure { expected: Arc<str>, at: Location },
    /// Non-recoverable: a grammar commit point was violated.
    Error { expected: Arc<str>, at: Location },
}

impl<'a, S: ?Sized + Sequence, R> ParseResult<'a, S, R> {
    pub fn success(rest: Source<'a, S>, value: R) -> Self {
        ParseResult::Success { rest, value }
    }

    pub fn failure(expected: impl Into<Arc<str>>, at: Location) -> Self {
        ParseResult::Failure {
            expected: expected.into(),
            at,
        }
    }

    pub fn error(expected: impl Into<Arc<str>>, at: Location) -> Self {
        ParseResult::Error {
            expected: expected.into(),
            at,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ParseResult::Error { .. })
    }

    /**
     * Transforms the value of a `Success`. Every other variant passes
     * through untouched, per spec: `map` exists on `Success` only.
     */
    pub fn map<R2>(self, f: impl FnOnce(R) -> R2) -> ParseResult<'a, S, R2> {
        match self {
            ParseResult::Success { rest, value } => ParseResult::Success {
                rest,
                value: f(value),
            },
            ParseResult::Failure { expected, at } => ParseResult::Failure { expected, at },
            ParseResult::Error { expected, at } => ParseResult::Error { expected, at },
        }
    }

    /// Re-tags a recoverable `Failure` as a committed `Error`, leaving
    /// `Success`/`Error` untouched. Used by [`must`](crate::must).
    pub fn commit(self) -> Self {
        match self {
            ParseResult::Failure { expected, at } => ParseResult::Error { expected, at },
            other => other,
        }
    }

    /// Splits off the non-success payload, if any, as a [`NoSuccess`].
    pub fn no_success(&self) -> Option<NoSuccess> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { expected, at } => Some(NoSuccess::Failure {
                expected: expected.clone(),
                at: *at,
            }),
            ParseResult::Error { expected, at } => Some(NoSuccess::Error {
                expected: expected.clone(),
                at: *at,
            }),
        }
    }
}

/**
 * Convenience union of [`ParseResult::Failure`] and [`ParseResult::Error`],
 * for code that wants to pattern-match "anything but success" without
 * re-deriving the `rest`/`value` fields that don't apply.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoSuccess {
    Failure { expected: Arc<str>, at: Location },
    Error { expected: Arc<str>, at: Location },
}

impl NoSuccess {
    pub fn expected(&self) -> &str {
        match self {
            NoSuccess::Failure { expected, .. } => expected,
            NoSuccess::Error { expected, .. } => expected,
        }
    }

    pub fn at(&self) -> Location {
        match self {
            NoSuccess::Failure { at, .. } => *at,
            NoSuccess::Error { at, .. } => *at,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, NoSuccess::Error { .. })
    }
}

impl fmt::Display for NoSuccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_error() { "error" } else { "failure" };
        write!(f, "{} at {}: expected {}", kind, self.at(), self.expected())
    }
}

impl std::error::Error for NoSuccess {}
