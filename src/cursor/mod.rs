//! Sequence position protocol
//!
//! A cursor is a position into a sequence: dereference it, step it forward
//! by one, compare it against a sentinel. Every view in this crate is
//! written against these two traits only.
//!
//! Sentinels never advance. They are either a cursor of the same type
//! (fixed-length sequences) or a marker that relies on the element under
//! the cursor to decide termination.

mod raw;
mod slice;

pub use raw::RawCursor;
pub use slice::SliceCursor;

use crate::ViewError;

/// Position into a sequence
pub trait Cursor: Clone + PartialEq {
    /// Element reference produced by dereferencing
    type Item;

    /// Dereference the current position
    ///
    /// Calling this at the sentinel is a contract violation.
    fn get(&self) -> Self::Item;

    /// Step forward by exactly one element
    fn advance(&mut self);

    /// Most advances left before the cursor runs off its storage, if known
    ///
    /// Cursors over unbounded or foreign memory return `None`.
    #[inline]
    fn max_advances(&self) -> Option<usize> {
        None
    }
}

/// End-of-traversal test for cursors of type `C`
pub trait Sentinel<C> {
    /// Returns `true` when `cursor` has reached the end
    fn is_end(&self, cursor: &C) -> bool;
}

/// Sentinel that no cursor ever reaches
///
/// Pair it with a per-element termination test (see
/// [`delimit`](crate::view::delimit)) or bound the traversal externally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unreachable;

impl<C> Sentinel<C> for Unreachable {
    #[inline]
    fn is_end(&self, _cursor: &C) -> bool {
        false
    }
}

/// Advance `cursor` unless it already sits at `end`
pub fn try_advance<C, S>(cursor: &mut C, end: &S) -> Result<(), ViewError>
where
    C: Cursor,
    S: Sentinel<C>,
{
    if end.is_end(cursor) {
        return Err(ViewError::PastEnd);
    }
    cursor.advance();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_never_ends() {
        let data = [0u8; 4];
        let mut cursor = SliceCursor::new(&data);
        for _ in 0..data.len() {
            assert!(!Unreachable.is_end(&cursor));
            cursor.advance();
        }
        assert!(!Unreachable.is_end(&cursor));
    }

    #[test]
    fn test_try_advance_stops_at_end() {
        let data = [1, 2];
        let end = SliceCursor::end(&data);
        let mut cursor = SliceCursor::new(&data);

        assert_eq!(try_advance(&mut cursor, &end), Ok(()));
        assert_eq!(try_advance(&mut cursor, &end), Ok(()));
        assert_eq!(try_advance(&mut cursor, &end), Err(ViewError::PastEnd));
        assert_eq!(cursor.index(), 2);
    }
}
