use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::CursorError;

/// Forward cursor over the entries of a map, in ascending key order.
///
/// Follows the same protocol as [`crate::Cursor`]: it starts before the first
/// entry, and reading a key or value off an entry records
/// [`CursorError::OutOfBounds`].
#[derive(Debug, Clone)]
pub struct MapCursor<'a, K, V> {
    entries: Vec<(&'a K, &'a V)>,
    position: isize,
    error: Option<CursorError>,
}

impl<'a, K, V> MapCursor<'a, K, V> {
    #[must_use]
    pub fn new(map: &'a BTreeMap<K, V>) -> Self {
        Self {
            entries: map.iter().collect(),
            position: -1,
            error: None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&CursorError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> isize {
        self.position
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    fn end(&self) -> isize {
        isize::try_from(self.entries.len()).unwrap_or(isize::MAX)
    }

    pub fn advance(&mut self) -> bool {
        if self.error.is_some() || self.position == self.end() {
            return false;
        }
        self.position += 1;
        self.current().is_some()
    }

    pub fn reset(&mut self) {
        if self.error.is_none() {
            self.position = -1;
        }
    }

    fn current(&self) -> Option<(&'a K, &'a V)> {
        let index = usize::try_from(self.position).ok()?;
        self.entries.get(index).copied()
    }

    /// Returns the entry under the cursor, recording a failure when there is none.
    fn entry(&mut self) -> Option<(&'a K, &'a V)> {
        if self.error.is_some() {
            return None;
        }
        let entry = self.current();
        if entry.is_none() {
            let error = CursorError::OutOfBounds {
                position: self.position,
                length: self.entries.len(),
            };
            log_debug!("map cursor failed: {}", error);
            self.error = Some(error);
        }
        entry
    }
}

impl<K: Clone + Default, V: Clone + Default> MapCursor<'_, K, V> {
    /// Returns the key of the current entry, or the default key on failure.
    pub fn key(&mut self) -> K {
        self.entry().map(|(key, _)| key.clone()).unwrap_or_default()
    }

    /// Returns the value of the current entry, or the default value on failure.
    pub fn value(&mut self) -> V {
        self.entry()
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }
}

impl<'a, K, V> Iterator for MapCursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() {
            return None;
        }
        self.current()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.error.is_some() {
            0
        } else {
            let visited = usize::try_from(self.position + 1).unwrap_or(0);
            self.entries.len().saturating_sub(visited)
        };
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for MapCursor<'_, K, V> {}
