//! Ready-made run matchers

use std::borrow::Borrow;

use super::Matcher;
use crate::cursor::{Cursor, Sentinel};

/// Maximal non-empty run of elements satisfying a predicate
#[derive(Debug, Clone, Copy)]
pub struct RunOf<P>(P);

/// Match the longest run of consecutive elements for which `pred` holds
pub fn run_of<P>(pred: P) -> RunOf<P> {
    RunOf(pred)
}

impl<C, S, P> Matcher<C, S> for RunOf<P>
where
    C: Cursor,
    S: Sentinel<C>,
    P: Fn(C::Item) -> bool,
{
    fn find_match(&self, at: &C, end: &S) -> Option<C> {
        let mut scan = at.clone();
        while !end.is_end(&scan) && (self.0)(scan.get()) {
            scan.advance();
        }
        (scan != *at).then_some(scan)
    }
}

/// Run of equal adjacent elements of at least `min_len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeats {
    min_len: usize,
}

/// Match maximal runs of equal adjacent elements no shorter than `min_len`
///
/// A `min_len` of zero is treated as one, which matches every element.
pub fn repeats(min_len: usize) -> Repeats {
    Repeats {
        min_len: min_len.max(1),
    }
}

impl<C, S> Matcher<C, S> for Repeats
where
    C: Cursor,
    C::Item: PartialEq,
    S: Sentinel<C>,
{
    fn find_match(&self, at: &C, end: &S) -> Option<C> {
        if end.is_end(at) {
            return None;
        }
        let first = at.get();
        let mut scan = at.clone();
        scan.advance();
        let mut len = 1;
        while !end.is_end(&scan) && scan.get() == first {
            scan.advance();
            len += 1;
        }
        (len >= self.min_len).then_some(scan)
    }
}

/// Exact subsequence
#[derive(Debug, Clone, Copy)]
pub struct Literal<'n, T> {
    needle: &'n [T],
}

/// Match occurrences of `needle`
///
/// An empty needle produces a zero-length match at every position.
pub fn literal<T>(needle: &[T]) -> Literal<'_, T> {
    Literal { needle }
}

impl<C, S, T> Matcher<C, S> for Literal<'_, T>
where
    C: Cursor,
    C::Item: Borrow<T>,
    S: Sentinel<C>,
    T: PartialEq,
{
    fn find_match(&self, at: &C, end: &S) -> Option<C> {
        if end.is_end(at) {
            return None;
        }
        match_literal(at, end, self.needle)
    }
}

/// Span from an opening literal through the next closing literal
#[derive(Debug, Clone, Copy)]
pub struct Delimited<'n, T> {
    open: &'n [T],
    close: &'n [T],
}

/// Match spans such as `/* ... */`, delimiters included
///
/// A span whose closing delimiter never appears runs to the sentinel.
pub fn delimited<'n, T>(open: &'n [T], close: &'n [T]) -> Delimited<'n, T> {
    Delimited { open, close }
}

impl<C, S, T> Matcher<C, S> for Delimited<'_, T>
where
    C: Cursor,
    C::Item: Borrow<T>,
    S: Sentinel<C>,
    T: PartialEq,
{
    fn find_match(&self, at: &C, end: &S) -> Option<C> {
        if end.is_end(at) {
            return None;
        }
        let mut scan = match_literal(at, end, self.open)?;
        loop {
            if end.is_end(&scan) {
                return Some(scan);
            }
            if let Some(after) = match_literal(&scan, end, self.close) {
                return Some(after);
            }
            scan.advance();
        }
    }
}

fn match_literal<C, S, T>(at: &C, end: &S, needle: &[T]) -> Option<C>
where
    C: Cursor,
    C::Item: Borrow<T>,
    S: Sentinel<C>,
    T: PartialEq,
{
    let mut scan = at.clone();
    for expected in needle {
        if end.is_end(&scan) {
            return None;
        }
        let item = scan.get();
        if Borrow::<T>::borrow(&item) != expected {
            return None;
        }
        scan.advance();
    }
    Some(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;

    #[test]
    fn test_run_of_is_maximal() {
        let data = b"   x";
        let end = SliceCursor::end(data);
        let spaces = run_of(|b: &u8| *b == b' ');

        let to = spaces.find_match(&SliceCursor::new(data), &end).unwrap();
        assert_eq!(to.index(), 3);
        assert!(spaces.find_match(&to, &end).is_none());
    }

    #[test]
    fn test_repeats_respects_min_len() {
        let data = [1, 1, 1, 2, 3];
        let end = SliceCursor::end(&data);

        let to = repeats(2).find_match(&SliceCursor::new(&data), &end).unwrap();
        assert_eq!(to.index(), 3);
        assert!(repeats(2).find_match(&to, &end).is_none());
        assert!(repeats(4).find_match(&SliceCursor::new(&data), &end).is_none());
    }

    #[test]
    fn test_literal_and_empty_needle() {
        let data = b"abcabc";
        let end = SliceCursor::end(data);
        let at = SliceCursor::at(data, 3);

        assert_eq!(literal(b"abc").find_match(&at, &end).unwrap().index(), 6);
        assert!(literal(b"abd").find_match(&at, &end).is_none());
        assert_eq!(literal::<u8>(&[]).find_match(&at, &end), Some(at));
        assert!(literal::<u8>(&[]).find_match(&end, &end).is_none());
    }

    #[test]
    fn test_delimited_span() {
        let data = b"a/*b*/c/*d";
        let end = SliceCursor::end(data);
        let comment = delimited(b"/*", b"*/");

        let closed = comment.find_match(&SliceCursor::at(data, 1), &end).unwrap();
        assert_eq!(closed.index(), 6);

        let unclosed = comment.find_match(&SliceCursor::at(data, 7), &end).unwrap();
        assert_eq!(unclosed, end);

        assert!(comment.find_match(&SliceCursor::new(data), &end).is_none());
    }
}
