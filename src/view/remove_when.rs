//! Elision view
//!
//! Wraps a source view and a [`Matcher`], and exposes only the elements
//! that no match covers. Runs are skipped lazily: the first surviving
//! position is found on the first `begin()` and cached, and every later
//! step skips at most the runs that follow the element just left.
//!
//! ## Zero-length matches
//!
//! A match ending where it started elides nothing. The cursor records it in
//! a zero flag and stays put, so the element survives. The next advance
//! clears the flag and skips matching for that one step, which guarantees
//! forward progress without re-reporting the empty match.
//!
//! ## Sharing
//!
//! The matcher and the source sentinel live behind one `Rc` owned by the
//! view. Cursors hold a handle to it, so cloning a cursor or calling
//! `begin()` never copies the matcher.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use super::View;
use crate::cursor::{Cursor, Sentinel};
use crate::matcher::{validate_match, ElementPredicate, Matcher, RunMatch};
use crate::ViewError;

/// When matcher results are checked against the match contract
///
/// A check walks from the cursor to the reported position, so it only
/// terminates when the source is bounded: a fixed-length or delimited view,
/// or a cursor that reports [`Cursor::max_advances`]. Over an open-ended
/// `RawCursor` source a backwards match hangs the check instead of failing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Never check
    Off,
    /// Check in debug builds only
    #[default]
    Debug,
    /// Always check
    Always,
}

impl Validation {
    #[inline]
    fn enabled(self) -> bool {
        match self {
            Validation::Off => false,
            Validation::Debug => cfg!(debug_assertions),
            Validation::Always => true,
        }
    }
}

/// View removing every run reported by a matcher
pub struct RemoveWhen<V: View, M> {
    base: V,
    shared: Rc<Shared<V::Sentinel, M>>,
    validation: Validation,
    begin: OnceCell<RemoveWhenCursor<V::Cursor, V::Sentinel, M>>,
}

// State every cursor of one view reads but never changes.
struct Shared<S, M> {
    end: S,
    matcher: M,
}

/// Remove every element for which `pred` holds
pub fn remove_if<V, F>(base: V, pred: F) -> RemoveWhen<V, ElementPredicate<F>>
where
    V: View,
    F: Fn(<V::Cursor as Cursor>::Item) -> bool,
{
    RemoveWhen::new(base, ElementPredicate::new(pred))
}

/// Remove every run reported by the run matcher `fun`
///
/// `fun` receives the current cursor and the source sentinel and returns
/// the end of the run to elide, or `None`.
pub fn remove_when<V, F>(base: V, fun: F) -> RemoveWhen<V, RunMatch<F>>
where
    V: View,
    F: Fn(&V::Cursor, &V::Sentinel) -> Option<V::Cursor>,
{
    RemoveWhen::new(base, RunMatch::new(fun))
}

impl<V: View, M> RemoveWhen<V, M> {
    /// Wrap `base`, eliding the runs reported by `matcher`
    pub fn new(base: V, matcher: M) -> Self {
        let end = base.end();
        Self {
            base,
            shared: Rc::new(Shared { end, matcher }),
            validation: Validation::default(),
            begin: OnceCell::new(),
        }
    }

    /// Set the matcher validation policy
    ///
    /// Discards any cached begin position.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self.begin = OnceCell::new();
        self
    }

    /// The wrapped view
    pub fn base(&self) -> &V {
        &self.base
    }

    /// The matcher
    pub fn matcher(&self) -> &M {
        &self.shared.matcher
    }

    /// Whether the first surviving position has been computed
    pub fn is_cached(&self) -> bool {
        self.begin.get().is_some()
    }

    /// Unwrap the source view
    pub fn into_base(self) -> V {
        self.base
    }
}

impl<V, M> RemoveWhen<V, M>
where
    V: View,
    M: Matcher<V::Cursor, V::Sentinel>,
{
    fn cache_begin(&self) -> &RemoveWhenCursor<V::Cursor, V::Sentinel, M> {
        self.begin.get_or_init(|| {
            let mut cursor = RemoveWhenCursor {
                base: self.base.begin(),
                zero: false,
                shared: Rc::clone(&self.shared),
                validation: self.validation,
            };
            cursor.satisfy();
            tracing::trace!(zero = cursor.zero, "cached begin cursor");
            cursor
        })
    }
}

impl<V, M> View for RemoveWhen<V, M>
where
    V: View,
    M: Matcher<V::Cursor, V::Sentinel>,
{
    type Cursor = RemoveWhenCursor<V::Cursor, V::Sentinel, M>;
    type Sentinel = RemoveWhenEnd<V::Sentinel>;

    fn begin(&self) -> Self::Cursor {
        self.cache_begin().clone()
    }

    fn end(&self) -> Self::Sentinel {
        RemoveWhenEnd(self.base.end())
    }
}

// A clone starts with an empty cache but shares the matcher.
impl<V, M> Clone for RemoveWhen<V, M>
where
    V: View + Clone,
{
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            shared: Rc::clone(&self.shared),
            validation: self.validation,
            begin: OnceCell::new(),
        }
    }
}

impl<V, M> fmt::Debug for RemoveWhen<V, M>
where
    V: View + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoveWhen")
            .field("base", &self.base)
            .field("validation", &self.validation)
            .field("cached", &self.is_cached())
            .finish_non_exhaustive()
    }
}

/// Cursor of a [`RemoveWhen`] view
///
/// Always rests at the sentinel or at a surviving element.
pub struct RemoveWhenCursor<C, S, M> {
    base: C,
    zero: bool,
    shared: Rc<Shared<S, M>>,
    validation: Validation,
}

impl<C: Clone, S, M> Clone for RemoveWhenCursor<C, S, M> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            zero: self.zero,
            shared: Rc::clone(&self.shared),
            validation: self.validation,
        }
    }
}

impl<C, S, M> RemoveWhenCursor<C, S, M> {
    /// Position in the source view
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwrap the source position
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C, S, M> RemoveWhenCursor<C, S, M>
where
    C: Cursor,
    S: Sentinel<C>,
    M: Matcher<C, S>,
{
    /// Skip matched runs until the cursor rests on a survivor
    fn satisfy(&mut self) {
        if self.zero {
            self.zero = false;
            return;
        }

        let Shared { end, matcher } = &*self.shared;
        while !end.is_end(&self.base) {
            let Some(to) = matcher.find_match(&self.base, end) else {
                break;
            };
            if self.validation.enabled() {
                if let Err(err) = validate_match(&self.base, &to, end) {
                    tracing::trace!(%err, "matcher broke its contract");
                    panic!("{}", err);
                }
            }
            if to == self.base {
                tracing::debug!("zero-length match, element survives");
                self.zero = true;
                break;
            }
            self.base = to;
        }
    }
}

impl<C, S, M> Cursor for RemoveWhenCursor<C, S, M>
where
    C: Cursor,
    S: Sentinel<C>,
    M: Matcher<C, S>,
{
    type Item = C::Item;

    #[inline]
    fn get(&self) -> C::Item {
        self.base.get()
    }

    fn advance(&mut self) {
        debug_assert!(!self.shared.end.is_end(&self.base), "{}", ViewError::PastEnd);
        self.base.advance();
        self.satisfy();
    }

    #[inline]
    fn max_advances(&self) -> Option<usize> {
        self.base.max_advances()
    }
}

impl<C: PartialEq, S, M> PartialEq for RemoveWhenCursor<C, S, M> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<C: fmt::Debug, S, M> fmt::Debug for RemoveWhenCursor<C, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoveWhenCursor")
            .field("base", &self.base)
            .field("zero", &self.zero)
            .finish_non_exhaustive()
    }
}

/// Sentinel of a [`RemoveWhen`] view; the source sentinel, unchanged
#[derive(Debug, Clone, Copy)]
pub struct RemoveWhenEnd<S>(S);

impl<S> RemoveWhenEnd<S> {
    /// The source sentinel
    pub fn base(&self) -> &S {
        &self.0
    }
}

impl<C, S, M> Sentinel<RemoveWhenCursor<C, S, M>> for RemoveWhenEnd<S>
where
    S: Sentinel<C>,
{
    #[inline]
    fn is_end(&self, cursor: &RemoveWhenCursor<C, S, M>) -> bool {
        self.0.is_end(&cursor.base)
    }
}
