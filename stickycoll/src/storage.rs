use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::iter;
use core::mem;

use seqcursor::{Combined, CombinedMut};

use crate::error::ContainerError;
use crate::format::{format_sequence, write_sequence};
use crate::guard::{Bound, Capacity, Distinct, Guard, Unbounded};

/// An indexed sequence with a sticky error slot.
///
/// Every operation first checks the error slot. On a failed container it
/// returns the default value of `T` (or an empty vector/string) and changes
/// nothing. Otherwise it does its work and may record the first error.
///
/// The guard `G` decides how the sequence may grow; see [`crate::guard`].
#[derive(Debug, Clone)]
pub struct Storage<T, G = Unbounded> {
    elements: Vec<T>,
    error: Option<ContainerError>,
    guard: G,
}

/// Growable sequence with no guard.
pub type Dynamic<T> = Storage<T, Unbounded>;
/// Sequence that never holds more than its capacity.
pub type Fixed<T> = Storage<T, Capacity>;
/// Sequence that never holds two equal elements.
pub type Unique<T> = Storage<T, Distinct>;

impl<T, G> Storage<T, G> {
    pub(crate) fn from_parts(elements: Vec<T>, error: Option<ContainerError>, guard: G) -> Self {
        Self {
            elements,
            error,
            guard,
        }
    }

    /// Returns the recorded error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ContainerError> {
        self.error.as_ref()
    }

    /// Returns the backing sequence.
    #[must_use]
    pub fn native(&self) -> &[T] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a factory for cursors borrowing the sequence.
    #[must_use]
    pub fn iterating(&self) -> Combined<'_, T> {
        Combined::new(&self.elements)
    }

    /// Records `error` unless an earlier one is already stored.
    pub(crate) fn record(&mut self, error: ContainerError) {
        if self.error.is_none() {
            log_debug!("container failed: {}", error);
            self.error = Some(error);
        }
    }

    fn checked_index(&self, index: isize, upper: usize) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < upper)
    }

    fn out_of_bounds(&self, index: isize) -> ContainerError {
        ContainerError::IndexOutOfBounds {
            index,
            length: self.elements.len(),
        }
    }
}

impl<T, G> Storage<T, G>
where
    T: Clone + Default + PartialEq,
    G: Guard<T>,
{
    /// Appends `values` to the end and returns the ones actually appended.
    ///
    /// A fixed container appends all or nothing. A unique container skips
    /// values already present, including repeats within `values`.
    pub fn append<I>(&mut self, values: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        if self.error.is_some() {
            return Vec::new();
        }
        let mut admitted: Vec<T> = Vec::new();
        for value in values {
            if !self.guard.admits(&self.elements, &value) || !self.guard.admits(&admitted, &value) {
                log_trace!("duplicate value refused");
                continue;
            }
            // Stop pulling from `values` at the first value that does not fit.
            if let Err(error) = self
                .guard
                .check_growth(self.elements.len(), admitted.len() + 1)
            {
                self.record(error);
                return Vec::new();
            }
            admitted.push(value);
        }
        self.elements.extend(admitted.iter().cloned());
        admitted
    }

    /// Appends a single value and returns it, or the default value if it was not appended.
    pub fn push(&mut self, value: T) -> T {
        self.append(iter::once(value))
            .pop()
            .unwrap_or_default()
    }

    /// Appends `count` copies of `value`.
    ///
    /// A fixed container checks `count` against its capacity before copying
    /// anything; a unique container adds at most one copy.
    pub fn fill(&mut self, value: T, count: usize) -> Vec<T> {
        if self.error.is_some() {
            return Vec::new();
        }
        if let Err(error) = self.guard.check_growth(self.elements.len(), count) {
            self.record(error);
            return Vec::new();
        }
        let copies = self.guard.copies(count);
        self.append(iter::repeat(value).take(copies))
    }

    /// Returns the element at `index`.
    ///
    /// Records `IndexOutOfBounds` if `index` is outside `0..len`.
    pub fn at(&mut self, index: isize) -> T {
        if self.error.is_some() {
            return T::default();
        }
        match self.checked_index(index, self.elements.len()) {
            Some(i) => self.elements[i].clone(),
            None => {
                self.record(self.out_of_bounds(index));
                T::default()
            }
        }
    }

    /// Returns the first element equal to `target`, scanning front to back.
    ///
    /// Records `ElementNotFound` if there is none.
    pub fn find(&mut self, target: &T) -> T {
        if self.error.is_some() {
            return T::default();
        }
        if let Some(found) = self.iterating().forward().find(|value| value == target) {
            return found;
        }
        self.record(ContainerError::ElementNotFound);
        T::default()
    }

    /// Reports whether `value` is present. Always `false` on a failed container.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.error.is_none() && self.elements.contains(value)
    }

    /// Overwrites the element at `index` and returns the value it replaced.
    ///
    /// Records `IndexOutOfBounds` if `index` is outside `0..len`. A unique
    /// container ignores a value that equals a different element.
    pub fn set(&mut self, value: T, index: isize) -> T {
        if self.error.is_some() {
            return T::default();
        }
        let Some(i) = self.checked_index(index, self.elements.len()) else {
            self.record(self.out_of_bounds(index));
            return T::default();
        };
        if !self.guard.admits_at(&self.elements, i, &value) {
            log_trace!("duplicate value refused at index {}", i);
            return T::default();
        }
        mem::replace(&mut self.elements[i], value)
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// Records `IndexOutOfBounds` if `index` is outside `0..len`.
    pub fn delete(&mut self, index: isize) -> T {
        if self.error.is_some() {
            return T::default();
        }
        match self.checked_index(index, self.elements.len()) {
            Some(i) => self.elements.remove(i),
            None => {
                self.record(self.out_of_bounds(index));
                T::default()
            }
        }
    }

    /// Places `value` at `index`, shifting the element there and later ones right.
    ///
    /// `index == len` appends. Records `IndexOutOfBounds` outside `0..=len` and
    /// `CapacityExceeded` on a full fixed container. A unique container ignores
    /// a value already present.
    pub fn insert(&mut self, index: isize, value: T) -> T {
        if self.error.is_some() {
            return T::default();
        }
        let Some(i) = self.checked_index(index, self.elements.len() + 1) else {
            self.record(self.out_of_bounds(index));
            return T::default();
        };
        if !self.guard.admits(&self.elements, &value) {
            log_trace!("duplicate value refused at index {}", i);
            return T::default();
        }
        if let Err(error) = self.guard.check_growth(self.elements.len(), 1) {
            self.record(error);
            return T::default();
        }
        self.elements.insert(i, value.clone());
        value
    }

    /// Returns the first element. Records `EmptyCollection` when empty.
    pub fn front(&mut self) -> T {
        if self.error.is_some() {
            return T::default();
        }
        match self.elements.first() {
            Some(value) => value.clone(),
            None => {
                self.record(ContainerError::EmptyCollection);
                T::default()
            }
        }
    }

    /// Returns the last element. Records `EmptyCollection` when empty.
    pub fn back(&mut self) -> T {
        if self.error.is_some() {
            return T::default();
        }
        match self.elements.last() {
            Some(value) => value.clone(),
            None => {
                self.record(ContainerError::EmptyCollection);
                T::default()
            }
        }
    }

    /// Removes and returns the last element. Records `EmptyCollection` when empty.
    pub fn pop(&mut self) -> T {
        if self.error.is_some() {
            return T::default();
        }
        match self.elements.pop() {
            Some(value) => value,
            None => {
                self.record(ContainerError::EmptyCollection);
                T::default()
            }
        }
    }

    /// Removes and returns the first element. Records `EmptyCollection` when empty.
    pub(crate) fn shift(&mut self) -> T {
        if self.error.is_some() {
            return T::default();
        }
        if self.elements.is_empty() {
            self.record(ContainerError::EmptyCollection);
            return T::default();
        }
        self.elements.remove(0)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        if self.error.is_none() {
            self.elements.clear();
        }
    }

    /// Makes room for at least `capacity` elements in total.
    ///
    /// A fixed container never reserves past its own capacity.
    pub fn grow(&mut self, capacity: usize) {
        if self.error.is_some() {
            return;
        }
        let target = self.guard.limit().map_or(capacity, |limit| capacity.min(limit));
        self.elements
            .reserve(target.saturating_sub(self.elements.len()));
    }
}

impl<T: Display, G> Storage<T, G> {
    /// Renders the sequence as `[e1, e2, ...]`; a failed container renders as an empty string.
    #[must_use]
    pub fn format(&self) -> String {
        if self.error.is_some() {
            return String::new();
        }
        format_sequence(&self.elements)
    }
}

impl<T: Display, G> Display for Storage<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.is_some() {
            return Ok(());
        }
        write_sequence(f, &self.elements)
    }
}

impl<T> Dynamic<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), None, Unbounded)
    }

    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_parts(elements, None, Unbounded)
    }

    /// Wraps an optional backing store; `None` yields a container failed with `NilBackingStore`.
    #[must_use]
    pub fn from_store(store: Option<Vec<T>>) -> Self {
        match store {
            Some(elements) => Self::from_vec(elements),
            None => Self::from_parts(Vec::new(), Some(ContainerError::NilBackingStore), Unbounded),
        }
    }

    /// Returns a factory for cursors that can modify elements in place.
    ///
    /// A failed container hands out cursors over an empty sequence.
    pub fn iterating_mut(&mut self) -> CombinedMut<'_, T> {
        mutable_view(&mut self.elements, self.error.is_some())
    }
}

impl<T> Default for Dynamic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Dynamic<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> Fixed<T> {
    /// Creates a fixed container holding `elements`.
    ///
    /// Validation happens here: a negative `capacity` or more elements than
    /// `capacity` yields an empty container that has already failed with
    /// `NegativeCapacity` or `CapacityExceeded`.
    #[must_use]
    pub fn new(capacity: isize, elements: Vec<T>) -> Self {
        match Self::try_new(capacity, elements) {
            Ok(fixed) => fixed,
            Err(error) => {
                log_debug!("fixed container rejected at construction: {}", error);
                let guard = Capacity::new(capacity).unwrap_or(Capacity::ZERO);
                Self::from_parts(Vec::new(), Some(error), guard)
            }
        }
    }

    /// Creates an empty fixed container.
    #[must_use]
    pub fn with_capacity(capacity: isize) -> Self {
        Self::new(capacity, Vec::new())
    }

    /// Like [`Fixed::new`] but reports a construction failure as `Err`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::NegativeCapacity` for a negative capacity and
    /// `ContainerError::CapacityExceeded` when `elements` does not fit.
    pub fn try_new(capacity: isize, elements: Vec<T>) -> Result<Self, ContainerError> {
        let guard = Capacity::new(capacity)?;
        guard.check_growth(0, elements.len())?;
        Ok(Self::from_parts(elements, None, guard))
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.guard.get()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.guard.get()
    }

    /// Returns a factory for cursors that can modify elements in place.
    ///
    /// A failed container hands out cursors over an empty sequence.
    pub fn iterating_mut(&mut self) -> CombinedMut<'_, T> {
        mutable_view(&mut self.elements, self.error.is_some())
    }
}

impl<T: PartialEq> Unique<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), None, Distinct)
    }

    /// Creates a unique container from `elements`, keeping the first
    /// occurrence of each value.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_parts(Guard::prepare(&Distinct, elements), None, Distinct)
    }
}

impl<T: PartialEq> Default for Unique<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> From<Vec<T>> for Unique<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

fn mutable_view<T>(elements: &mut [T], failed: bool) -> CombinedMut<'_, T> {
    let visible = if failed { 0 } else { elements.len() };
    CombinedMut::new(&mut elements[..visible])
}
