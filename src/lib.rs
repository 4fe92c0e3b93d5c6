//! # Lazy Sequence Views
//!
//! Non-owning adapters over existing sequences. A view never copies or
//! materializes elements: it hands out cursors, and traversal happens one
//! step at a time as the caller pulls.
//!
//! ## Building blocks
//!
//! 1. **Cursor protocol**: a position that can be dereferenced and advanced,
//!    paired with a sentinel that decides when traversal stops
//! 2. **Delimited views**: open-ended sequences whose end is discovered by
//!    testing each element (e.g. a null-terminated buffer)
//! 3. **Matchers**: caller-supplied functions reporting how many elements,
//!    starting at a position, should be elided
//! 4. **Elision view**: skips every run reported by a matcher, including
//!    zero-length runs, caching its first surviving position
//!
//! ## Usage Example
//!
//! ```
//! use seqview::{remove_if, Subrange, View};
//!
//! let data = [1, 2, 3, 4, 5];
//! let odd = remove_if(Subrange::from_slice(&data), |x: &i32| x % 2 == 0);
//! assert_eq!(odd.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod cursor;  // Position protocol and concrete cursors
pub mod matcher; // Match function contract and built-in matchers
pub mod view;    // View trait and adapters

// Re-exports for convenience
pub use cursor::{try_advance, Cursor, RawCursor, Sentinel, SliceCursor, Unreachable};
pub use matcher::{validate_match, ElementPredicate, Matcher, RunMatch};
pub use view::{
    c_str, c_str_array, c_str_checked, c_str_ptr, delimit, delimit_with, remove_if, remove_when,
    Delimit, DelimitEnd, Iter, RemoveWhen, RemoveWhenCursor, RemoveWhenEnd, Subrange, Validation,
    View,
};

use thiserror::Error;

/// Contract violations detected by checked operations
///
/// Unchecked traversal treats these as programmer errors and panics with the
/// same messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A cursor was advanced while already at its sentinel
    #[error("cursor advanced past the end of its view")]
    PastEnd,

    /// A matcher reported an end position that cannot be reached by
    /// advancing from the match start without crossing the sentinel
    #[error("matcher returned an unreachable position (scanned {scanned} elements before the end)")]
    UnreachableMatch {
        /// Elements walked before the sentinel was hit
        scanned: usize,
    },

    /// A buffer expected to be null-terminated contains no terminator
    #[error("buffer of {len} elements has no terminator")]
    Unterminated {
        /// Length of the buffer that was searched
        len: usize,
    },
}
