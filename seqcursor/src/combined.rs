use crate::cursor::{Forward, ForwardMut, ReadonlyForward, ReadonlyReverse, Reverse, ReverseMut};

/// Hands out cursors over a borrowed sequence.
///
/// Containers return this from `iterating()` so callers pick the direction
/// and the kind of cursor they need.
#[derive(Debug)]
pub struct Combined<'a, T> {
    data: &'a [T],
}

impl<'a, T> Combined<'a, T> {
    #[must_use]
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn forward(&self) -> Forward<'a, T> {
        Forward::new(self.data)
    }

    #[must_use]
    pub fn reverse(&self) -> Reverse<'a, T> {
        Reverse::new(self.data)
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.data.len()
    }
}

impl<T: Clone> Combined<'_, T> {
    /// Forward cursor over a copy of the sequence taken now.
    #[must_use]
    pub fn readonly_forward(&self) -> ReadonlyForward<T> {
        ReadonlyForward::snapshot(self.data)
    }

    /// Reverse cursor over a copy of the sequence taken now.
    #[must_use]
    pub fn readonly_reverse(&self) -> ReadonlyReverse<T> {
        ReadonlyReverse::snapshot(self.data)
    }
}

/// Hands out a single cursor with in-place access to a mutably borrowed sequence.
#[derive(Debug)]
pub struct CombinedMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> CombinedMut<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn forward(self) -> ForwardMut<'a, T> {
        ForwardMut::new(self.data)
    }

    #[must_use]
    pub fn reverse(self) -> ReverseMut<'a, T> {
        ReverseMut::new(self.data)
    }
}
