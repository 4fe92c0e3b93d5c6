//! Termination-sequence views
//!
//! The end of a delimited view is not stored anywhere. Each end check
//! tests the element under the cursor, so an open-ended buffer can be
//! traversed without scanning for its length first.
//!
//! Over an [`Unreachable`](crate::cursor::Unreachable) base the traversal
//! stops only when the terminator is found. If it never is, traversal does
//! not terminate; bounding it is the caller's job.

use std::borrow::Borrow;

use super::View;
use crate::cursor::{Cursor, Sentinel};

/// Per-element termination test
pub trait Terminator<I> {
    /// Returns `true` if `item` ends the sequence
    fn terminates(&self, item: I) -> bool;
}

impl<I, F> Terminator<I> for F
where
    F: Fn(I) -> bool,
{
    #[inline]
    fn terminates(&self, item: I) -> bool {
        self(item)
    }
}

/// Terminates on elements equal to a fixed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equals<T>(pub T);

impl<I, T> Terminator<I> for Equals<T>
where
    I: Borrow<T>,
    T: PartialEq,
{
    #[inline]
    fn terminates(&self, item: I) -> bool {
        Borrow::<T>::borrow(&item) == &self.0
    }
}

/// View ending at the first element accepted by a [`Terminator`]
#[derive(Debug, Clone, Copy)]
pub struct Delimit<V, P> {
    base: V,
    pred: P,
}

/// Sentinel of a [`Delimit`] view
#[derive(Debug, Clone, Copy)]
pub struct DelimitEnd<S, P> {
    base: S,
    pred: P,
}

/// End `base` at the first element for which `pred` holds
pub fn delimit_with<V, P>(base: V, pred: P) -> Delimit<V, P>
where
    V: View,
    P: Terminator<<V::Cursor as Cursor>::Item>,
{
    Delimit { base, pred }
}

/// End `base` at the first element equal to `value`
pub fn delimit<V, T>(base: V, value: T) -> Delimit<V, Equals<T>>
where
    V: View,
    Equals<T>: Terminator<<V::Cursor as Cursor>::Item>,
{
    Delimit {
        base,
        pred: Equals(value),
    }
}

impl<V, P> Delimit<V, P> {
    /// The wrapped view
    pub fn base(&self) -> &V {
        &self.base
    }
}

impl<V, P> View for Delimit<V, P>
where
    V: View,
    P: Terminator<<V::Cursor as Cursor>::Item> + Clone,
{
    type Cursor = V::Cursor;
    type Sentinel = DelimitEnd<V::Sentinel, P>;

    fn begin(&self) -> V::Cursor {
        self.base.begin()
    }

    fn end(&self) -> Self::Sentinel {
        DelimitEnd {
            base: self.base.end(),
            pred: self.pred.clone(),
        }
    }
}

impl<C, S, P> Sentinel<C> for DelimitEnd<S, P>
where
    C: Cursor,
    S: Sentinel<C>,
    P: Terminator<C::Item>,
{
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        self.base.is_end(cursor) || self.pred.terminates(cursor.get())
    }
}
