use std::fmt;
use std::marker::PhantomData;

use super::Cursor;

/// Pointer cursor for buffers of unknown length
///
/// Used for foreign null-terminated data where only a start pointer is
/// available. Advancing is always safe; dereferencing relies on the
/// guarantees given to [`RawCursor::new`].
pub struct RawCursor<'a, T> {
    ptr: *const T,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> RawCursor<'a, T> {
    /// Wrap a start pointer
    ///
    /// # Safety
    /// `ptr` must be non-null and aligned, and every position the cursor is
    /// dereferenced at must lie inside one allocation that stays alive and
    /// unmodified for `'a`.
    pub unsafe fn new(ptr: *const T) -> Self {
        debug_assert!(!ptr.is_null(), "RawCursor::new called with a null pointer");
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Current pointer value
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }
}

impl<T> Clone for RawCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursor<'_, T> {}

impl<T> PartialEq for RawCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for RawCursor<'_, T> {}

impl<T> fmt::Debug for RawCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawCursor").field(&self.ptr).finish()
    }
}

impl<'a, T: 'a> Cursor for RawCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        // SAFETY: upheld by the contract of `RawCursor::new`.
        unsafe { &*self.ptr }
    }

    #[inline]
    fn advance(&mut self) {
        self.ptr = self.ptr.wrapping_add(1);
    }
}
