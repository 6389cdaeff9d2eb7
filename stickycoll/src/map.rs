use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use seqcursor::MapCursor;

use crate::error::ContainerError;
use crate::format::{format_entries, write_entries};
use crate::guard::{Bound, Capacity, Unbounded};

/// A key-ordered map with a sticky error slot.
///
/// Follows the same rules as [`crate::Storage`]: after the first error every
/// operation returns the default value and changes nothing.
#[derive(Debug, Clone)]
pub struct Map<K, V, B = Unbounded> {
    entries: BTreeMap<K, V>,
    error: Option<ContainerError>,
    bound: B,
}

pub type DynamicMap<K, V> = Map<K, V, Unbounded>;
pub type FixedMap<K, V> = Map<K, V, Capacity>;

impl<K, V, B> Map<K, V, B> {
    fn from_parts(entries: BTreeMap<K, V>, error: Option<ContainerError>, bound: B) -> Self {
        Self {
            entries,
            error,
            bound,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ContainerError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn native(&self) -> &BTreeMap<K, V> {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a cursor over the entries in ascending key order.
    #[must_use]
    pub fn iterating(&self) -> MapCursor<'_, K, V> {
        MapCursor::new(&self.entries)
    }

    fn record(&mut self, error: ContainerError) {
        if self.error.is_none() {
            log_debug!("map failed: {}", error);
            self.error = Some(error);
        }
    }
}

impl<K, V, B> Map<K, V, B>
where
    K: Ord + Clone + Default,
    V: Clone + Default,
    B: Bound,
{
    /// Reports whether `key` is present. Always `false` on a failed map.
    #[must_use]
    pub fn exists(&self, key: &K) -> bool {
        self.error.is_none() && self.entries.contains_key(key)
    }

    /// Inserts a new entry and returns it.
    ///
    /// Records `KeyAlreadyExists` if `key` is present and `CapacityExceeded`
    /// on a full fixed map.
    pub fn add(&mut self, key: K, value: V) -> (K, V) {
        if self.error.is_some() {
            return Default::default();
        }
        if self.entries.contains_key(&key) {
            self.record(ContainerError::KeyAlreadyExists);
            return Default::default();
        }
        if let Err(error) = self.bound.check_growth(self.entries.len(), 1) {
            self.record(error);
            return Default::default();
        }
        self.entries.insert(key.clone(), value.clone());
        (key, value)
    }

    /// Replaces the value of an existing entry and returns the new entry.
    ///
    /// Records `KeyNotFound` if `key` is absent; never creates an entry.
    pub fn set(&mut self, key: K, value: V) -> (K, V) {
        if self.error.is_some() {
            return Default::default();
        }
        match self.entries.get_mut(&key) {
            Some(slot) => {
                slot.clone_from(&value);
                (key, value)
            }
            None => {
                self.record(ContainerError::KeyNotFound);
                Default::default()
            }
        }
    }

    /// Returns the value stored under `key`. Records `KeyNotFound` if absent.
    ///
    /// Returns only the value, not a `(key, value)` pair.
    pub fn get(&mut self, key: &K) -> V {
        if self.error.is_some() {
            return V::default();
        }
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => {
                self.record(ContainerError::KeyNotFound);
                V::default()
            }
        }
    }

    /// Removes the entry under `key` and returns its value. Records `KeyNotFound` if absent.
    ///
    /// The removed value is returned, not the key.
    pub fn delete(&mut self, key: &K) -> V {
        if self.error.is_some() {
            return V::default();
        }
        match self.entries.remove(key) {
            Some(value) => value,
            None => {
                self.record(ContainerError::KeyNotFound);
                V::default()
            }
        }
    }

    /// Keys in ascending order; empty on a failed map.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        if self.error.is_some() {
            return Vec::new();
        }
        self.entries.keys().cloned().collect()
    }

    /// Values in ascending key order; empty on a failed map.
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        if self.error.is_some() {
            return Vec::new();
        }
        self.entries.values().cloned().collect()
    }

    pub fn clear(&mut self) {
        if self.error.is_none() {
            self.entries.clear();
        }
    }
}

impl<K: Display, V: Display, B> Map<K, V, B> {
    /// Renders one `  key: value` line per entry inside braces; a failed map
    /// renders as an empty string.
    #[must_use]
    pub fn format(&self) -> String {
        if self.error.is_some() {
            return String::new();
        }
        format_entries(&self.entries)
    }
}

impl<K: Display, V: Display, B> Display for Map<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.is_some() {
            return Ok(());
        }
        write_entries(f, &self.entries)
    }
}

impl<K, V> DynamicMap<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(BTreeMap::new(), None, Unbounded)
    }

    #[must_use]
    pub fn from_map(entries: BTreeMap<K, V>) -> Self {
        Self::from_parts(entries, None, Unbounded)
    }

    /// Wraps an optional backing store; `None` yields a map failed with `NilBackingStore`.
    #[must_use]
    pub fn from_store(store: Option<BTreeMap<K, V>>) -> Self {
        match store {
            Some(entries) => Self::from_map(entries),
            None => Self::from_parts(
                BTreeMap::new(),
                Some(ContainerError::NilBackingStore),
                Unbounded,
            ),
        }
    }
}

impl<K, V> Default for DynamicMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<BTreeMap<K, V>> for DynamicMap<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::from_map(entries)
    }
}

impl<K, V> FixedMap<K, V> {
    /// Creates a fixed map holding `entries`.
    ///
    /// A negative `capacity` or more entries than `capacity` yields an empty
    /// map that has already failed.
    #[must_use]
    pub fn new(capacity: isize, entries: BTreeMap<K, V>) -> Self {
        match Self::try_new(capacity, entries) {
            Ok(map) => map,
            Err(error) => {
                log_debug!("fixed map rejected at construction: {}", error);
                let bound = Capacity::new(capacity).unwrap_or(Capacity::ZERO);
                Self::from_parts(BTreeMap::new(), Some(error), bound)
            }
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: isize) -> Self {
        Self::new(capacity, BTreeMap::new())
    }

    /// # Errors
    ///
    /// Returns `ContainerError::NegativeCapacity` for a negative capacity and
    /// `ContainerError::CapacityExceeded` when `entries` does not fit.
    pub fn try_new(capacity: isize, entries: BTreeMap<K, V>) -> Result<Self, ContainerError> {
        let bound = Capacity::new(capacity)?;
        bound.check_growth(0, entries.len())?;
        Ok(Self::from_parts(entries, None, bound))
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bound.get()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.bound.get()
    }
}
