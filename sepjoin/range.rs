//! Sequences delimited by a pair of cursors
//!
//! A [`Span`] walks from a start cursor until it reaches an end cursor, so any container that can
//! hand out cursors can be joined without knowing its concrete type.
//!
//! ```
//! use sepjoin::range::{SliceCursor, write_span};
//!
//! let xs = [1, 2, 3];
//! let mut out = String::new();
//! write_span(&mut out, SliceCursor::begin(&xs), SliceCursor::end(&xs), " , ").unwrap();
//! assert_eq!(out, "1 , 2 , 3");
//! ```

use crate::join::{Strategy, write_joined};
use std::{
    fmt::{self, Display, Write},
    iter::FusedIterator,
    ptr,
};

/// Position in a forward-traversable sequence
pub trait Cursor: Clone + PartialEq {
    /// Element the cursor points at
    type Item;

    /// Element at the current position. Must not be called on a past-the-end cursor.
    fn get(&self) -> Self::Item;

    /// Move one element forward
    fn advance(&mut self);

    /// Check if the cursor left the underlying sequence, [`Span`] stops there regardless of its
    /// end cursor. Unbounded cursors never are.
    fn is_past_end(&self) -> bool {
        false
    }
}

/// Half-open range `[start, end)` between two cursors
///
/// Iteration stops when the cursor reaches `end` or leaves the underlying sequence. For unbounded
/// cursors such as [`Counter`], `end` must be reachable from `start`, otherwise iteration does
/// not terminate.
#[derive(Debug, Clone)]
pub struct Span<C> {
    current: C,
    end: C,
}

impl<C> Span<C>
where
    C: Cursor,
{
    #[allow(missing_docs)]
    pub const fn new(start: C, end: C) -> Self {
        Span {
            current: start,
            end,
        }
    }

    /// Check if there are no elements left
    pub fn is_empty(&self) -> bool {
        self.current == self.end || self.current.is_past_end()
    }
}

impl<'a, T> Span<SliceCursor<'a, T>> {
    /// Span over a whole slice
    pub const fn over(slice: &'a [T]) -> Self {
        Span {
            current: SliceCursor::begin(slice),
            end: SliceCursor::end(slice),
        }
    }
}

impl<C> Iterator for Span<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        let item = self.current.get();
        self.current.advance();
        Some(item)
    }
}

impl<C> FusedIterator for Span<C> where C: Cursor {}

/// Write elements between `start` and `end` separated by `delimiter`
///
/// # Errors
/// When writing or an element's [`Display`] fails
pub fn write_span<W, C>(w: &mut W, start: C, end: C, delimiter: &str) -> fmt::Result
where
    W: Write + ?Sized,
    C: Cursor,
    C::Item: Display,
{
    write_joined(w, Span::new(start, end), delimiter, Strategy::default())
}

/// Cursor into a slice
///
/// Cursors are equal only when they point into the same slice at the same position.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element
    pub const fn begin(slice: &'a [T]) -> Self {
        SliceCursor { slice, position: 0 }
    }

    /// Past-the-end cursor
    pub const fn end(slice: &'a [T]) -> Self {
        SliceCursor {
            slice,
            position: slice.len(),
        }
    }

    /// Cursor at given index, clamped to the past-the-end position
    pub fn at(slice: &'a [T], position: usize) -> Self {
        SliceCursor {
            slice,
            position: position.min(slice.len()),
        }
    }

    #[allow(missing_docs)]
    pub const fn position(&self) -> usize {
        self.position
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
        ptr::eq(self.slice, other.slice) && self.position == other.position
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> &'a T {
        &self.slice[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn is_past_end(&self) -> bool {
        self.position >= self.slice.len()
    }
}

/// Cursor over an arithmetic progression, not backed by any container
///
/// Counters compare by their current value only, the step of the end cursor is irrelevant.
/// The end value must be hit exactly, e.g. counting by 2 from 0 never reaches 9.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    value: i64,
    step: i64,
}

impl Counter {
    /// Counter starting at `value` moving by one
    pub const fn new(value: i64) -> Self {
        Counter { value, step: 1 }
    }

    /// Counter starting at `value` moving by `step`
    pub const fn with_step(value: i64, step: i64) -> Self {
        Counter { value, step }
    }
}

impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Counter {}

impl Cursor for Counter {
    type Item = i64;

    fn get(&self) -> i64 {
        self.value
    }

    fn advance(&mut self) {
        self.value += self.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::format_joined;
    use std::collections::VecDeque;

    #[test]
    fn span_matches_container() {
        let xs = vec![1, 2, 3];
        let mut out = String::new();
        write_span(&mut out, SliceCursor::begin(&xs), SliceCursor::end(&xs), " , ").unwrap();
        assert_eq!(out, "1 , 2 , 3");

        let deque = xs.iter().copied().collect::<VecDeque<_>>();
        assert_eq!(out, format_joined(&deque, " , ").unwrap());
        assert_eq!(out, format_joined(&xs, " , ").unwrap());
    }

    #[test]
    fn sub_span() {
        let xs = ["a", "b", "c", "d"];
        let span = Span::new(SliceCursor::at(&xs, 1), SliceCursor::at(&xs, 3));
        assert_eq!(format_joined(span, "/").unwrap(), "b/c");

        let past_end = SliceCursor::at(&xs, 10);
        assert_eq!(past_end, SliceCursor::end(&xs));
    }

    #[test]
    fn empty_span() {
        let xs: [u8; 0] = [];
        let span = Span::over(&xs);
        assert!(span.is_empty());
        assert_eq!(format_joined(span, " , ").unwrap(), "");

        let ys = [1, 2];
        let span = Span::new(SliceCursor::at(&ys, 1), SliceCursor::at(&ys, 1));
        assert_eq!(span.count(), 0);
    }

    #[test]
    fn cursors_of_different_slices_differ() {
        let xs = [1, 2];
        let ys = [1, 2];
        assert_ne!(SliceCursor::begin(&xs), SliceCursor::begin(&ys));
        assert_eq!(SliceCursor::begin(&xs), SliceCursor::at(&xs, 0));
    }

    #[test]
    fn counter_span() {
        let mut out = String::new();
        write_span(&mut out, Counter::new(1), Counter::new(4), ", ").unwrap();
        assert_eq!(out, "1, 2, 3");

        let evens = Span::new(Counter::with_step(0, 2), Counter::with_step(10, 2));
        assert_eq!(format_joined(evens, " ").unwrap(), "0 2 4 6 8");
    }

    #[test]
    fn reversed_slice_cursors_stop_at_slice_end() {
        let xs = ["a", "b", "c", "d"];
        let span = Span::new(SliceCursor::at(&xs, 3), SliceCursor::at(&xs, 1));
        assert_eq!(span.clone().take(10).count(), 1);
        assert_eq!(format_joined(span, ", ").unwrap(), "d");

        let ys = ["x"];
        let foreign = Span::new(SliceCursor::begin(&xs), SliceCursor::end(&ys));
        assert_eq!(format_joined(foreign, "").unwrap(), "abcd");
    }

    #[test]
    fn counter_end_ignores_step() {
        let evens = Span::new(Counter::with_step(0, 2), Counter::new(10));
        assert_eq!(format_joined(evens, " ").unwrap(), "0 2 4 6 8");
        assert_eq!(Counter::with_step(3, 5), Counter::new(3));
    }

    #[test]
    fn span_is_fused() {
        let xs = [7];
        let mut span = Span::over(&xs);
        assert_eq!(span.next(), Some(&7));
        assert_eq!(span.next(), None);
        assert_eq!(span.next(), None);
    }
}
