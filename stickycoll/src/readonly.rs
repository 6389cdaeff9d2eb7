//! Read-only, mutex-guarded views.
//!
//! The contents are fixed at construction. Lookups can still fail, and the
//! first failure is kept just like on the mutable containers.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::sync::Mutex;

use seqcursor::{ReadonlyForward, ReadonlyReverse};

use crate::error::ContainerError;
use crate::map::DynamicMap;
use crate::storage::Dynamic;
use crate::sync::acquire;

/// A sequence that can be read from several threads but never modified.
#[derive(Debug)]
pub struct ReadonlySlice<T> {
    inner: Mutex<Dynamic<T>>,
}

impl<T> ReadonlySlice<T> {
    #[must_use]
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            inner: Mutex::new(Dynamic::from_vec(elements)),
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<ContainerError> {
        acquire(&self.inner).error().cloned()
    }

    /// Number of elements; zero once a lookup has failed.
    #[must_use]
    pub fn len(&self) -> usize {
        let storage = acquire(&self.inner);
        if storage.error().is_some() {
            return 0;
        }
        storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Default + PartialEq> ReadonlySlice<T> {
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

    pub fn front(&self) -> T {
        acquire(&self.inner).front()
    }

    pub fn back(&self) -> T {
        acquire(&self.inner).back()
    }

    #[must_use]
    pub fn native(&self) -> Vec<T> {
        acquire(&self.inner).native().to_vec()
    }

    #[must_use]
    pub fn forward(&self) -> ReadonlyForward<T> {
        acquire(&self.inner).iterating().readonly_forward()
    }

    #[must_use]
    pub fn reverse(&self) -> ReadonlyReverse<T> {
        acquire(&self.inner).iterating().readonly_reverse()
    }
}

impl<T: Display> ReadonlySlice<T> {
    #[must_use]
    pub fn format(&self) -> String {
        acquire(&self.inner).format()
    }
}

impl<T: Display> Display for ReadonlySlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*acquire(&self.inner), f)
    }
}

impl<T> From<Vec<T>> for ReadonlySlice<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

/// A map that can be read from several threads but never modified.
#[derive(Debug)]
pub struct ReadonlyMap<K, V> {
    inner: Mutex<DynamicMap<K, V>>,
}

impl<K, V> ReadonlyMap<K, V> {
    #[must_use]
    pub fn new(entries: BTreeMap<K, V>) -> Self {
        Self {
            inner: Mutex::new(DynamicMap::from_map(entries)),
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<ContainerError> {
        acquire(&self.inner).error().cloned()
    }

    /// Number of entries; zero once a lookup has failed.
    #[must_use]
    pub fn len(&self) -> usize {
        let map = acquire(&self.inner);
        if map.error().is_some() {
            return 0;
        }
        map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> ReadonlyMap<K, V>
where
    K: Ord + Clone + Default,
    V: Clone + Default,
{
    #[must_use]
    pub fn exists(&self, key: &K) -> bool {
        acquire(&self.inner).exists(key)
    }

    pub fn get(&self, key: &K) -> V {
        acquire(&self.inner).get(key)
    }

    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        acquire(&self.inner).keys()
    }

    #[must_use]
    pub fn values(&self) -> Vec<V> {
        acquire(&self.inner).values()
    }

    /// Copies the entries under the lock, in ascending key order.
    #[must_use]
    pub fn snapshot(&self) -> ReadonlyForward<(K, V)> {
        let map = acquire(&self.inner);
        let entries: Vec<(K, V)> = map
            .iterating()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        ReadonlyForward::new(entries)
    }
}

impl<K: Display, V: Display> ReadonlyMap<K, V> {
    #[must_use]
    pub fn format(&self) -> String {
        acquire(&self.inner).format()
    }
}

impl<K: Display, V: Display> Display for ReadonlyMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*acquire(&self.inner), f)
    }
}

impl<K, V> From<BTreeMap<K, V>> for ReadonlyMap<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::new(entries)
    }
}
