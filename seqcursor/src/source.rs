use alloc::vec::Vec;

/// A sequence a cursor can traverse.
///
/// Implemented for shared borrows, mutable borrows and owned vectors so that
/// one cursor type covers borrowing and snapshotting traversal alike.
pub trait Source {
    type Item;

    fn as_slice(&self) -> &[Self::Item];
}

/// A sequence whose elements can be modified through the cursor.
pub trait SourceMut: Source {
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<'a, T> Source for &'a [T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<'a, T> Source for &'a mut [T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<'a, T> SourceMut for &'a mut [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

// Owned sources back the read-only cursors, so there is no `SourceMut` here.
impl<T> Source for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}
