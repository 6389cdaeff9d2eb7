use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::error::CursorError;
use crate::source::{Source, SourceMut};

/// Traversal order of a [`Cursor`].
pub trait Direction {
    /// Sentinel position before the first step.
    fn start(length: usize) -> isize;

    /// Sentinel position once every element has been visited.
    fn end(length: usize) -> isize;

    /// Position after one step from `position`.
    fn step(position: isize) -> isize;

    /// Number of elements not yet visited.
    fn remaining(position: isize, length: usize) -> usize;
}

/// Walks from the first element to the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forwards;

/// Walks from the last element to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backwards;

impl Direction for Forwards {
    fn start(_length: usize) -> isize {
        -1
    }

    fn end(length: usize) -> isize {
        signed(length)
    }

    fn step(position: isize) -> isize {
        position + 1
    }

    fn remaining(position: isize, length: usize) -> usize {
        let visited = usize::try_from(position + 1).unwrap_or(0);
        length.saturating_sub(visited)
    }
}

impl Direction for Backwards {
    fn start(length: usize) -> isize {
        signed(length)
    }

    fn end(_length: usize) -> isize {
        -1
    }

    fn step(position: isize) -> isize {
        position - 1
    }

    fn remaining(position: isize, _length: usize) -> usize {
        usize::try_from(position).unwrap_or(0)
    }
}

// Slice lengths never exceed `isize::MAX`.
fn signed(length: usize) -> isize {
    isize::try_from(length).unwrap_or(isize::MAX)
}

/// A position-tracking traversal handle with its own sticky error.
///
/// A fresh cursor sits before its first element. [`Cursor::advance`] moves it
/// one step and reports whether it landed on an element; [`Cursor::value`]
/// reads the element under it. Reading while the cursor is not on an element
/// records [`CursorError::OutOfBounds`], after which the cursor stops moving
/// and every read yields the default value.
///
/// The error is independent of whatever container produced the cursor.
///
/// ```
/// # use seqcursor::Combined;
/// let data = [1, 2, 3];
/// let mut cursor = Combined::new(&data).reverse();
///
/// let mut seen = Vec::new();
/// while cursor.advance() {
///     seen.push(cursor.value());
/// }
/// assert_eq!(seen, [3, 2, 1]);
///
/// // Exhausted: reading now fails and the failure sticks.
/// assert_eq!(cursor.value(), 0);
/// assert!(cursor.error().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<S, D> {
    source: S,
    position: isize,
    error: Option<CursorError>,
    direction: PhantomData<D>,
}

/// Forward cursor borrowing its sequence.
pub type Forward<'a, T> = Cursor<&'a [T], Forwards>;
/// Reverse cursor borrowing its sequence.
pub type Reverse<'a, T> = Cursor<&'a [T], Backwards>;
/// Forward cursor with in-place access to the elements.
pub type ForwardMut<'a, T> = Cursor<&'a mut [T], Forwards>;
/// Reverse cursor with in-place access to the elements.
pub type ReverseMut<'a, T> = Cursor<&'a mut [T], Backwards>;
/// Forward cursor over its own copy of the sequence.
pub type ReadonlyForward<T> = Cursor<Vec<T>, Forwards>;
/// Reverse cursor over its own copy of the sequence.
pub type ReadonlyReverse<T> = Cursor<Vec<T>, Backwards>;

impl<S: Source, D: Direction> Cursor<S, D> {
    /// Creates a cursor positioned before the first element of `source`.
    pub fn new(source: S) -> Self {
        let position = D::start(source.as_slice().len());
        Self {
            source,
            position,
            error: None,
            direction: PhantomData,
        }
    }

    /// Returns the recorded error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&CursorError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Length of the traversed sequence.
    #[must_use]
    pub fn length(&self) -> usize {
        self.source.as_slice().len()
    }

    /// Moves one step and returns whether the cursor is now on an element.
    ///
    /// Once exhausted the position stays on the end sentinel. A failed cursor
    /// does not move.
    pub fn advance(&mut self) -> bool {
        if self.error.is_some() {
            return false;
        }
        if self.position == D::end(self.length()) {
            return false;
        }
        self.position = D::step(self.position);
        self.current_index().is_some()
    }

    /// Returns the cursor to its starting sentinel. Does nothing on a failed cursor.
    pub fn reset(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.position = D::start(self.length());
    }

    fn current_index(&self) -> Option<usize> {
        usize::try_from(self.position)
            .ok()
            .filter(|&index| index < self.length())
    }

    fn fail(&mut self) {
        if self.error.is_none() {
            let error = CursorError::OutOfBounds {
                position: self.position,
                length: self.length(),
            };
            log_debug!("cursor failed: {}", error);
            self.error = Some(error);
        }
    }
}

impl<S, D> Cursor<S, D>
where
    S: Source,
    S::Item: Clone + Default,
    D: Direction,
{
    /// Returns the element under the cursor.
    ///
    /// Records [`CursorError::OutOfBounds`] and returns the default value when
    /// the cursor has not been advanced onto an element, is exhausted, or has
    /// already failed.
    pub fn value(&mut self) -> S::Item {
        if self.error.is_some() {
            return S::Item::default();
        }
        match self.current_index() {
            Some(index) => self.source.as_slice()[index].clone(),
            None => {
                self.fail();
                S::Item::default()
            }
        }
    }
}

impl<S: SourceMut, D: Direction> Cursor<S, D> {
    /// Returns a mutable reference to the element under the cursor.
    ///
    /// Records [`CursorError::OutOfBounds`] and returns `None` under the same
    /// conditions as [`Cursor::value`].
    pub fn value_mut(&mut self) -> Option<&mut S::Item> {
        if self.error.is_some() {
            return None;
        }
        match self.current_index() {
            Some(index) => self.source.as_mut_slice().get_mut(index),
            None => {
                self.fail();
                None
            }
        }
    }
}

impl<T: Clone, D: Direction> Cursor<Vec<T>, D> {
    /// Creates a cursor over a private copy of `data`.
    ///
    /// Later changes to `data` are never observed by the cursor.
    #[must_use]
    pub fn snapshot(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<S, D> Iterator for Cursor<S, D>
where
    S: Source,
    S::Item: Clone + Default,
    D: Direction,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() {
            return None;
        }
        Some(self.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.error.is_some() {
            0
        } else {
            D::remaining(self.position, self.length())
        };
        (remaining, Some(remaining))
    }
}

impl<S, D> ExactSizeIterator for Cursor<S, D>
where
    S: Source,
    S::Item: Clone + Default,
    D: Direction,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_forward_starts_before_first() {
        let data = [10, 20];
        let cursor = Forward::new(&data[..]);
        assert_eq!(cursor.position(), -1);
        assert_eq!(cursor.length(), 2);
    }

    #[test]
    fn test_reverse_starts_after_last() {
        let data = [10, 20];
        let cursor = Reverse::new(&data[..]);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_value_before_advance_fails() {
        let data = [10, 20];
        let mut cursor = Forward::new(&data[..]);
        assert_eq!(cursor.value(), 0);
        assert_eq!(
            cursor.error(),
            Some(&CursorError::OutOfBounds {
                position: -1,
                length: 2
            })
        );
    }

    #[test]
    fn test_failed_cursor_stops_moving() {
        let data = [10, 20];
        let mut cursor = Forward::new(&data[..]);
        let _ = cursor.value();
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), -1);
        cursor.reset();
        assert_eq!(cursor.position(), -1);
        assert!(cursor.error().is_some());
    }

    #[test]
    fn test_position_saturates_when_exhausted() {
        let data = [1];
        let mut cursor = Forward::new(&data[..]);
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 1);

        let mut cursor = Reverse::new(&data[..]);
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), -1);
    }

    #[test]
    fn test_reset_returns_to_sentinel() {
        let data = [1, 2, 3];
        let mut cursor = Reverse::new(&data[..]);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.value(), 2);
        cursor.reset();
        assert_eq!(cursor.position(), 3);
        assert!(cursor.advance());
        assert_eq!(cursor.value(), 3);
    }

    #[test]
    fn test_value_mut_doubles_in_place() {
        let mut data = vec![2, 3, 4];
        let mut cursor = ForwardMut::new(&mut data[..]);
        while cursor.advance() {
            if let Some(value) = cursor.value_mut() {
                *value *= 2;
            }
        }
        assert!(cursor.value_mut().is_none());
        assert!(cursor.error().is_some());
        assert_eq!(data, [4, 6, 8]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut data = vec![1, 2];
        let cursor = ReadonlyForward::snapshot(&data);
        data.push(3);
        data[0] = 100;
        let seen: Vec<_> = cursor.collect();
        assert_eq!(seen, [1, 2]);
    }

    #[test]
    fn test_empty_sequence() {
        let data: [u8; 0] = [];
        let mut forward = Forward::new(&data[..]);
        let mut reverse = Reverse::new(&data[..]);
        assert!(!forward.advance());
        assert!(!reverse.advance());
        assert_eq!(forward.size_hint(), (0, Some(0)));
        assert_eq!(reverse.size_hint(), (0, Some(0)));
    }
}
