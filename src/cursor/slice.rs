use std::fmt;
use std::ptr;

use super::{Cursor, Sentinel};
use crate::ViewError;

/// Index-based cursor into a borrowed slice
///
/// Doubles as its own sentinel: a cursor at `data.len()` is the end of a
/// fixed-length view. The slice itself bounds `get`, so dereferencing past
/// the data panics instead of reading out of bounds.
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element
    pub fn new(data: &'a [T]) -> Self {
        Self::at(data, 0)
    }

    /// Cursor one past the last element
    pub fn end(data: &'a [T]) -> Self {
        Self::at(data, data.len())
    }

    /// Cursor at an arbitrary index
    ///
    /// # Panics
    /// Panics if `index > data.len()`.
    pub fn at(data: &'a [T], index: usize) -> Self {
        assert!(
            index <= data.len(),
            "cursor index {} out of bounds for slice of length {}",
            index,
            data.len()
        );
        Self { data, index }
    }

    /// Current offset from the start of the slice
    pub fn index(&self) -> usize {
        self.index
    }

    /// Elements from the cursor to the end of the slice
    pub fn remaining(&self) -> &'a [T] {
        self.data.get(self.index..).unwrap_or(&[])
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && ptr::eq(self.data.as_ptr(), other.data.as_ptr())
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        match self.data.get(self.index) {
            Some(item) => item,
            None => panic!("{}", ViewError::PastEnd),
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.index += 1;
    }

    #[inline]
    fn max_advances(&self) -> Option<usize> {
        Some(self.data.len().saturating_sub(self.index))
    }
}

impl<'a, T> Sentinel<SliceCursor<'a, T>> for SliceCursor<'a, T> {
    #[inline]
    fn is_end(&self, cursor: &SliceCursor<'a, T>) -> bool {
        cursor == self
    }
}
