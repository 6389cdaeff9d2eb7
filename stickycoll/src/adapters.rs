//! Stack and queue views over [`Storage`].
//!
//! Both adapters share their storage's error slot, so a failure seen through
//! the adapter is the same failure reported by [`Lifo::error`] or
//! [`Fifo::error`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use seqcursor::Combined;

use crate::error::ContainerError;
use crate::guard::{Capacity, Distinct, Guard, Unbounded};
use crate::storage::{Dynamic, Fixed, Storage, Unique};

macro_rules! delegate_common {
    ($adapter:ident) => {
        impl<T, G> $adapter<T, G> {
            #[must_use]
            pub fn error(&self) -> Option<&ContainerError> {
                self.storage.error()
            }

            #[must_use]
            pub fn native(&self) -> &[T] {
                self.storage.native()
            }

            #[must_use]
            pub fn len(&self) -> usize {
                self.storage.len()
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.storage.is_empty()
            }

            #[must_use]
            pub fn iterating(&self) -> Combined<'_, T> {
                self.storage.iterating()
            }

            /// Unwraps the adapter, keeping the storage and its error.
            #[must_use]
            pub fn into_storage(self) -> Storage<T, G> {
                self.storage
            }
        }

        impl<T, G> $adapter<T, G>
        where
            T: Clone + Default + PartialEq,
            G: Guard<T>,
        {
            /// Adds `value` at the tail and returns it, or the default value if it was refused.
            pub fn push(&mut self, value: T) -> T {
                self.storage.push(value)
            }

            /// Adds `values` at the tail and returns the ones actually added.
            pub fn append<I>(&mut self, values: I) -> Vec<T>
            where
                I: IntoIterator<Item = T>,
            {
                self.storage.append(values)
            }

            /// Removes and returns the tail element.
            pub fn pop(&mut self) -> T {
                self.storage.pop()
            }

            pub fn clear(&mut self) {
                self.storage.clear();
            }
        }

        impl<T: Display, G> $adapter<T, G> {
            #[must_use]
            pub fn format(&self) -> String {
                self.storage.format()
            }
        }

        impl<T: Display, G> Display for $adapter<T, G> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.storage, f)
            }
        }

        impl<T, G> From<Storage<T, G>> for $adapter<T, G> {
            fn from(storage: Storage<T, G>) -> Self {
                Self { storage }
            }
        }
    };
}

/// Last-in, first-out stack.
#[derive(Debug, Clone)]
pub struct Lifo<T, G = Unbounded> {
    storage: Storage<T, G>,
}

/// Queue with access to both ends.
///
/// [`Fifo::pop`] removes the newest element, like [`Lifo::pop`]; use
/// [`Fifo::dequeue`] to take the oldest one.
#[derive(Debug, Clone)]
pub struct Fifo<T, G = Unbounded> {
    storage: Storage<T, G>,
}

delegate_common!(Lifo);
delegate_common!(Fifo);

pub type DynamicLifo<T> = Lifo<T, Unbounded>;
pub type DynamicFifo<T> = Fifo<T, Unbounded>;
pub type UniqueLifo<T> = Lifo<T, Distinct>;
pub type UniqueFifo<T> = Fifo<T, Distinct>;
pub type FixedLifo<T> = Lifo<T, Capacity>;
pub type FixedFifo<T> = Fifo<T, Capacity>;

impl<T, G> Lifo<T, G>
where
    T: Clone + Default + PartialEq,
    G: Guard<T>,
{
    /// Returns the most recently pushed element. Records `EmptyCollection` when empty.
    pub fn top(&mut self) -> T {
        self.storage.back()
    }
}

impl<T, G> Fifo<T, G>
where
    T: Clone + Default + PartialEq,
    G: Guard<T>,
{
    /// Returns the oldest element. Records `EmptyCollection` when empty.
    pub fn front(&mut self) -> T {
        self.storage.front()
    }

    /// Returns the newest element. Records `EmptyCollection` when empty.
    pub fn back(&mut self) -> T {
        self.storage.back()
    }

    /// Removes and returns the oldest element. Records `EmptyCollection` when empty.
    pub fn dequeue(&mut self) -> T {
        self.storage.shift()
    }
}

macro_rules! constructors {
    ($adapter:ident) => {
        impl<T> $adapter<T, Unbounded> {
            #[must_use]
            pub fn new() -> Self {
                Self::from(Dynamic::new())
            }

            #[must_use]
            pub fn from_vec(elements: Vec<T>) -> Self {
                Self::from(Dynamic::from_vec(elements))
            }
        }

        impl<T> Default for $adapter<T, Unbounded> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: PartialEq> $adapter<T, Distinct> {
            #[must_use]
            pub fn new() -> Self {
                Self::from(Unique::new())
            }

            /// Keeps the first occurrence of each value in `elements`.
            #[must_use]
            pub fn from_vec(elements: Vec<T>) -> Self {
                Self::from(Unique::from_vec(elements))
            }
        }

        impl<T: PartialEq> Default for $adapter<T, Distinct> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> $adapter<T, Capacity> {
            /// See [`Fixed::new`] for how construction failures are reported.
            #[must_use]
            pub fn new(capacity: isize, elements: Vec<T>) -> Self {
                Self::from(Fixed::new(capacity, elements))
            }

            #[must_use]
            pub fn with_capacity(capacity: isize) -> Self {
                Self::from(Fixed::with_capacity(capacity))
            }

            #[must_use]
            pub fn capacity(&self) -> usize {
                self.storage.capacity()
            }

            #[must_use]
            pub fn is_full(&self) -> bool {
                self.storage.is_full()
            }
        }
    };
}

constructors!(Lifo);
constructors!(Fifo);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_lifo_top_and_pop() {
        let mut lifo = DynamicLifo::new();
        lifo.push(1);
        lifo.push(2);
        assert_eq!(lifo.top(), 2);
        assert_eq!(lifo.pop(), 2);
        assert_eq!(lifo.top(), 1);
        assert_eq!(lifo.len(), 1);
    }

    #[test]
    fn test_fifo_ends() {
        let mut fifo = DynamicFifo::from_vec(vec!['a', 'b', 'c']);
        assert_eq!(fifo.front(), 'a');
        assert_eq!(fifo.back(), 'c');
        assert_eq!(fifo.pop(), 'c');
        assert_eq!(fifo.dequeue(), 'a');
        assert_eq!(fifo.native(), ['b']);
    }

    #[test]
    fn test_dequeue_empty_fails() {
        let mut fifo: DynamicFifo<u8> = DynamicFifo::new();
        assert_eq!(fifo.dequeue(), 0);
        assert_eq!(fifo.error(), Some(&ContainerError::EmptyCollection));
        fifo.push(1);
        assert!(fifo.is_empty());
    }

    #[test]
    fn test_unique_lifo_refuses_duplicates() {
        let mut lifo = UniqueLifo::from_vec(vec![1, 1, 2]);
        assert_eq!(lifo.native(), [1, 2]);
        assert_eq!(lifo.push(2), 0);
        assert_eq!(lifo.push(3), 3);
        assert_eq!(lifo.native(), [1, 2, 3]);
        assert!(lifo.error().is_none());
    }

    #[test]
    fn test_fixed_fifo_capacity() {
        let mut fifo = FixedFifo::with_capacity(1);
        fifo.push(10);
        assert!(fifo.is_full());
        fifo.push(11);
        assert_eq!(
            fifo.error(),
            Some(&ContainerError::CapacityExceeded {
                capacity: 1,
                requested: 2
            })
        );
        assert_eq!(fifo.native(), [10]);
    }
}
