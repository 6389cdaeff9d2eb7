//! Mutex-guarded containers.
//!
//! Each method takes the lock, does the same work as the single-threaded
//! container and releases the lock before returning. Use
//! [`Synchronized::with`] when several steps must happen under one lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use seqcursor::{ReadonlyForward, ReadonlyReverse};

use crate::error::ContainerError;
use crate::guard::{Capacity, Distinct, Guard, Unbounded};
use crate::storage::{Dynamic, Fixed, Storage, Unique};

/// A [`Storage`] shared between threads.
#[derive(Debug)]
pub struct Synchronized<T, G = Unbounded> {
    inner: Mutex<Storage<T, G>>,
}

pub type SyncDynamic<T> = Synchronized<T, Unbounded>;
pub type SyncFixed<T> = Synchronized<T, Capacity>;
pub type SyncUnique<T> = Synchronized<T, Distinct>;

/// Container operations never leave the storage half-updated, so a poisoned
/// lock still guards valid data.
pub(crate) fn acquire<S>(mutex: &Mutex<S>) -> MutexGuard<'_, S> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T, G> Synchronized<T, G> {
    #[must_use]
    pub fn new(storage: Storage<T, G>) -> Self {
        Self {
            inner: Mutex::new(storage),
        }
    }

    /// Runs `f` with exclusive access to the storage.
    pub fn with<R>(&self, f: impl FnOnce(&mut Storage<T, G>) -> R) -> R {
        f(&mut acquire(&self.inner))
    }

    #[must_use]
    pub fn into_inner(self) -> Storage<T, G> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn error(&self) -> Option<ContainerError> {
        acquire(&self.inner).error().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        acquire(&self.inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        acquire(&self.inner).is_empty()
    }
}

impl<T: Clone, G> Synchronized<T, G> {
    /// Returns a copy of the backing sequence.
    #[must_use]
    pub fn native(&self) -> Vec<T> {
        acquire(&self.inner).native().to_vec()
    }

    /// Forward cursor over a copy taken under the lock.
    #[must_use]
    pub fn forward(&self) -> ReadonlyForward<T> {
        acquire(&self.inner).iterating().readonly_forward()
    }

    /// Reverse cursor over a copy taken under the lock.
    #[must_use]
    pub fn reverse(&self) -> ReadonlyReverse<T> {
        acquire(&self.inner).iterating().readonly_reverse()
    }
}

impl<T, G> Synchronized<T, G>
where
    T: Clone + Default + PartialEq,
    G: Guard<T>,
{
    pub fn append<I>(&self, values: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        acquire(&self.inner).append(values)
    }

    pub fn push(&self, value: T) -> T {
        acquire(&self.inner).push(value)
    }

    pub fn fill(&self, value: T, count: usize) -> Vec<T> {
        acquire(&self.inner).fill(value, count)
    }

    pub fn at(&self, index: isize) -> T {
        acquire(&self.inner).at(index)
    }

    pub fn find(&self, target: &T) -> T {
        acquire(&self.inner).find(target)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        acquire(&self.inner).contains(value)
    }

    pub fn set(&self, value: T, index: isize) -> T {
        acquire(&self.inner).set(value, index)
    }

    pub fn delete(&self, index: isize) -> T {
        acquire(&self.inner).delete(index)
    }

    pub fn insert(&self, index: isize, value: T) -> T {
        acquire(&self.inner).insert(index, value)
    }

    pub fn front(&self) -> T {
        acquire(&self.inner).front()
    }

    pub fn back(&self) -> T {
        acquire(&self.inner).back()
    }

    pub fn pop(&self) -> T {
        acquire(&self.inner).pop()
    }

    pub fn clear(&self) {
        acquire(&self.inner).clear();
    }

    pub fn grow(&self, capacity: usize) {
        acquire(&self.inner).grow(capacity);
    }
}

impl<T: std::fmt::Display, G> Synchronized<T, G> {
    #[must_use]
    pub fn format(&self) -> String {
        acquire(&self.inner).format()
    }
}

impl<T: std::fmt::Display, G> std::fmt::Display for Synchronized<T, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&*acquire(&self.inner), f)
    }
}

impl<T, G> From<Storage<T, G>> for Synchronized<T, G> {
    fn from(storage: Storage<T, G>) -> Self {
        Self::new(storage)
    }
}

impl<T> Default for SyncDynamic<T> {
    fn default() -> Self {
        Self::new(Dynamic::new())
    }
}

impl<T: PartialEq> Default for SyncUnique<T> {
    fn default() -> Self {
        Self::new(Unique::new())
    }
}

impl<T> SyncFixed<T> {
    /// See [`Fixed::new`] for how construction failures are reported.
    #[must_use]
    pub fn with_capacity(capacity: isize) -> Self {
        Self::new(Fixed::with_capacity(capacity))
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        acquire(&self.inner).capacity()
    }
}
