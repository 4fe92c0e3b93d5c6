//! Null-terminated buffers as views

use super::{delimit, Delimit, Equals, Subrange};
use crate::cursor::{RawCursor, SliceCursor, Unreachable};
use crate::ViewError;

/// Character-like element with a zero terminator value
pub trait CharLike: Copy + PartialEq + 'static {
    /// The terminator
    const NUL: Self;
}

macro_rules! impl_char_like {
    ($($ty:ty => $nul:expr),* $(,)?) => {
        $(
            impl CharLike for $ty {
                const NUL: Self = $nul;
            }
        )*
    };
}

impl_char_like! {
    u8 => 0,
    i8 => 0,
    u16 => 0,
    u32 => 0,
    char => '\0',
}

/// View over a slice that stops at the first terminator
pub type CStrView<'a, T> = Delimit<Subrange<SliceCursor<'a, T>, Unreachable>, Equals<T>>;

/// View over a foreign buffer that stops at the first terminator
pub type RawCStrView<'a, T> = Delimit<Subrange<RawCursor<'a, T>, Unreachable>, Equals<T>>;

/// View `buf` up to its first terminator
///
/// The slice length is not consulted when deciding where the view ends;
/// it only bounds dereferencing. Traversing a buffer with no terminator
/// panics when the cursor runs off the slice. Use [`c_str_checked`] to
/// reject such buffers up front.
pub fn c_str<T: CharLike>(buf: &[T]) -> CStrView<'_, T> {
    delimit(Subrange::new(SliceCursor::new(buf), Unreachable), T::NUL)
}

/// Like [`c_str`], but fails if `buf` contains no terminator
pub fn c_str_checked<T: CharLike>(buf: &[T]) -> Result<CStrView<'_, T>, ViewError> {
    if !buf.contains(&T::NUL) {
        return Err(ViewError::Unterminated { len: buf.len() });
    }
    Ok(c_str(buf))
}

/// View a fixed-size character array, dropping its final element
///
/// The array is assumed to hold a string literal whose last element is the
/// terminator. Interior terminators are kept.
pub fn c_str_array<T: CharLike, const N: usize>(
    buf: &[T; N],
) -> Subrange<SliceCursor<'_, T>, SliceCursor<'_, T>> {
    Subrange::from_slice(&buf[..N.saturating_sub(1)])
}

/// View a foreign null-terminated buffer starting at `ptr`
///
/// # Safety
/// `ptr` must point to a readable, properly aligned buffer containing a
/// terminator, valid and unmodified for `'a`.
pub unsafe fn c_str_ptr<'a, T: CharLike>(ptr: *const T) -> RawCStrView<'a, T> {
    delimit(Subrange::new(RawCursor::new(ptr), Unreachable), T::NUL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;

    #[test]
    fn test_c_str_bytes() {
        let buf = b"hello\0world\0";
        let text: Vec<u8> = c_str(buf).iter().copied().collect();
        assert_eq!(text, b"hello");
    }

    #[test]
    fn test_c_str_checked_rejects_unterminated() {
        assert_eq!(
            c_str_checked(b"abc").err(),
            Some(ViewError::Unterminated { len: 3 })
        );
        assert!(c_str_checked(&[0u16]).unwrap().iter().next().is_none());
    }

    #[test]
    fn test_c_str_array_keeps_interior_nul() {
        let buf = *b"ab\0c\0";
        let text: Vec<u8> = c_str_array(&buf).iter().copied().collect();
        assert_eq!(text, b"ab\0c");
    }

    #[test]
    fn test_c_str_ptr() {
        let wide: Vec<u32> = "hi".chars().map(|c| c as u32).chain([0]).collect();
        // SAFETY: `wide` ends with a terminator and outlives the view.
        let view = unsafe { c_str_ptr(wide.as_ptr()) };
        assert_eq!(view.iter().count(), 2);
    }
}
