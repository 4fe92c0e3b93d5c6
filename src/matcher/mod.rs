//! Match function contract
//!
//! A matcher looks at the sequence starting at a cursor and reports whether
//! a run beginning there should be elided, and where that run ends:
//!
//! - `None`: nothing to elide at this position
//! - `Some(q)`: elide everything from the cursor up to (excluding) `q`
//!
//! `q` must be reachable from the cursor by zero or more advances without
//! crossing the sentinel. `q == cursor` is a zero-length match. Called at
//! the sentinel, a matcher must return `None`.

mod builtin;

pub use builtin::{delimited, literal, repeats, run_of, Delimited, Literal, Repeats, RunOf};

use crate::cursor::{Cursor, Sentinel};
use crate::ViewError;

/// Decides how many elements to elide at a position
pub trait Matcher<C, S> {
    /// Report the end of the run starting at `at`, if one matches
    fn find_match(&self, at: &C, end: &S) -> Option<C>;
}

/// Lifts a per-element predicate into a [`Matcher`]
///
/// Matches exactly the current element whenever the predicate holds.
#[derive(Debug, Clone, Copy)]
pub struct ElementPredicate<F>(F);

impl<F> ElementPredicate<F> {
    /// Wrap `pred`
    pub fn new(pred: F) -> Self {
        Self(pred)
    }
}

impl<C, S, F> Matcher<C, S> for ElementPredicate<F>
where
    C: Cursor,
    S: Sentinel<C>,
    F: Fn(C::Item) -> bool,
{
    fn find_match(&self, at: &C, end: &S) -> Option<C> {
        if end.is_end(at) || !(self.0)(at.get()) {
            return None;
        }
        let mut next = at.clone();
        next.advance();
        Some(next)
    }
}

/// Native run matcher taking `(cursor, sentinel)`
#[derive(Debug, Clone, Copy)]
pub struct RunMatch<F>(F);

impl<F> RunMatch<F> {
    /// Wrap `fun`
    pub fn new(fun: F) -> Self {
        Self(fun)
    }
}

impl<C, S, F> Matcher<C, S> for RunMatch<F>
where
    F: Fn(&C, &S) -> Option<C>,
{
    #[inline]
    fn find_match(&self, at: &C, end: &S) -> Option<C> {
        (self.0)(at, end)
    }
}

/// Check a matcher result against the contract
///
/// Walks a copy of `at` toward `to`, returning the number of elements the
/// match consumes. Fails if the sentinel is reached first, or once the walk
/// exhausts [`Cursor::max_advances`].
///
/// Only terminates when the walk is bounded: by a sentinel that is actually
/// reached (a fixed-length or delimited source) or by a cursor that knows
/// its remaining length. A `RawCursor` paired with [`Unreachable`] and a
/// backwards `to` never stops.
///
/// [`Unreachable`]: crate::cursor::Unreachable
pub fn validate_match<C, S>(at: &C, to: &C, end: &S) -> Result<usize, ViewError>
where
    C: Cursor,
    S: Sentinel<C>,
{
    let limit = at.max_advances();
    let mut walk = at.clone();
    let mut scanned = 0;
    loop {
        if walk == *to {
            return Ok(scanned);
        }
        if end.is_end(&walk) || limit.is_some_and(|max| scanned >= max) {
            return Err(ViewError::UnreachableMatch { scanned });
        }
        walk.advance();
        scanned += 1;
    }
}
