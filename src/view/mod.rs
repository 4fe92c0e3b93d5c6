//! Views and the generic traversal skeleton
//!
//! A view is a cheap, non-owning value exposing a begin cursor and an end
//! sentinel. Adapters wrap another view and change how its cursors move;
//! [`Iter`] turns any cursor/sentinel pair into a standard iterator.

mod c_str;
mod delimit;
mod remove_when;
mod subrange;

pub use c_str::{c_str, c_str_array, c_str_checked, c_str_ptr, CStrView, CharLike, RawCStrView};
pub use delimit::{delimit, delimit_with, Delimit, DelimitEnd, Equals, Terminator};
pub use remove_when::{
    remove_if, remove_when, RemoveWhen, RemoveWhenCursor, RemoveWhenEnd, Validation,
};
pub use subrange::Subrange;

use std::iter::FusedIterator;

use crate::cursor::{Cursor, Sentinel};

/// Lazily traversable sequence
pub trait View {
    /// Cursor type handed out by [`View::begin`]
    type Cursor: Cursor;

    /// Sentinel type handed out by [`View::end`]
    type Sentinel: Sentinel<Self::Cursor>;

    /// Cursor at the first element
    fn begin(&self) -> Self::Cursor;

    /// Sentinel marking the end of traversal
    fn end(&self) -> Self::Sentinel;

    /// Iterate over the elements of the view
    fn iter(&self) -> Iter<Self::Cursor, Self::Sentinel> {
        Iter::new(self.begin(), self.end())
    }
}

impl<V: View + ?Sized> View for &V {
    type Cursor = V::Cursor;
    type Sentinel = V::Sentinel;

    fn begin(&self) -> Self::Cursor {
        (**self).begin()
    }

    fn end(&self) -> Self::Sentinel {
        (**self).end()
    }
}

/// Iterator over a cursor/sentinel pair
#[derive(Debug, Clone)]
pub struct Iter<C, S> {
    cursor: C,
    end: S,
}

impl<C, S> Iter<C, S> {
    /// Traverse from `cursor` until `end` reports completion
    pub fn new(cursor: C, end: S) -> Self {
        Self { cursor, end }
    }

    /// Position of the next element to be yielded
    pub fn cursor(&self) -> &C {
        &self.cursor
    }
}

impl<C, S> Iterator for Iter<C, S>
where
    C: Cursor,
    S: Sentinel<C>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.end.is_end(&self.cursor) {
            return None;
        }
        let item = self.cursor.get();
        self.cursor.advance();
        Some(item)
    }
}

impl<C, S> FusedIterator for Iter<C, S>
where
    C: Cursor,
    S: Sentinel<C>,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_is_fused() {
        let data = [1, 2];
        let view = Subrange::from_slice(&data);
        let mut iter = view.iter();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.cursor().index(), 2);
    }

    #[test]
    fn test_view_by_reference() {
        let data = [3, 4, 5];
        let view = Subrange::from_slice(&data);
        let borrowed = &view;
        assert_eq!(borrowed.iter().count(), 3);
        assert_eq!(view.iter().count(), 3);
    }
}
