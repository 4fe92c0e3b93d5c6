use super::View;
use crate::cursor::{Cursor, Sentinel, SliceCursor};

/// A begin cursor and an end sentinel, nothing more
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subrange<C, S> {
    begin: C,
    end: S,
}

impl<C, S> Subrange<C, S> {
    /// Pair a cursor with its sentinel
    pub fn new(begin: C, end: S) -> Self {
        Self { begin, end }
    }
}

impl<'a, T> Subrange<SliceCursor<'a, T>, SliceCursor<'a, T>> {
    /// View over a whole slice
    pub fn from_slice(data: &'a [T]) -> Self {
        Self::new(SliceCursor::new(data), SliceCursor::end(data))
    }
}

impl<'a, T> From<&'a [T]> for Subrange<SliceCursor<'a, T>, SliceCursor<'a, T>> {
    fn from(data: &'a [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<C, S> View for Subrange<C, S>
where
    C: Cursor,
    S: Sentinel<C> + Clone,
{
    type Cursor = C;
    type Sentinel = S;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> S {
        self.end.clone()
    }
}
