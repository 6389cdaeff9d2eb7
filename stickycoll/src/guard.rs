//! Policies injected into [`Storage`](crate::Storage) and [`Map`](crate::Map).
//!
//! A policy adds one guard clause to the shared storage operations:
//!
//! - [`Unbounded`]: no guard.
//! - [`Capacity`]: growth past a ceiling fails with
//!   [`ContainerError::CapacityExceeded`] and mutates nothing.
//! - [`Distinct`]: inserting a value that is already present is a silent
//!   no-op, never an error.

use alloc::vec::Vec;

use crate::error::ContainerError;

/// Growth limit shared by sequences and maps.
pub trait Bound {
    /// Checks that a collection holding `length` items may take `additional` more.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::CapacityExceeded` if the result would not fit.
    fn check_growth(&self, length: usize, additional: usize) -> Result<(), ContainerError>;

    /// The ceiling, if there is one.
    fn limit(&self) -> Option<usize>;
}

/// Admission rules for sequence elements.
pub trait Guard<T>: Bound {
    /// Whether `value` may be added to `elements`. A refusal is silent.
    fn admits(&self, _elements: &[T], _value: &T) -> bool {
        true
    }

    /// Whether `value` may overwrite `elements[index]`.
    fn admits_at(&self, _elements: &[T], _index: usize, _value: &T) -> bool {
        true
    }

    /// Normalizes the initial contents of a new container.
    fn prepare(&self, elements: Vec<T>) -> Vec<T> {
        elements
    }

    /// How many of `count` copies of one value may be added together.
    fn copies(&self, count: usize) -> usize {
        count
    }
}

/// No limit, no admission check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl Bound for Unbounded {
    fn check_growth(&self, _length: usize, _additional: usize) -> Result<(), ContainerError> {
        Ok(())
    }

    fn limit(&self) -> Option<usize> {
        None
    }
}

impl<T> Guard<T> for Unbounded {}

/// A fixed element ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    limit: usize,
}

impl Capacity {
    pub(crate) const ZERO: Self = Self { limit: 0 };

    /// Validates a requested capacity.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::NegativeCapacity` if `capacity` is negative.
    pub fn new(capacity: isize) -> Result<Self, ContainerError> {
        usize::try_from(capacity)
            .map(|limit| Self { limit })
            .map_err(|_| ContainerError::NegativeCapacity { capacity })
    }

    #[must_use]
    pub fn get(&self) -> usize {
        self.limit
    }
}

impl Bound for Capacity {
    fn check_growth(&self, length: usize, additional: usize) -> Result<(), ContainerError> {
        let requested = length.saturating_add(additional);
        if requested > self.limit {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.limit,
                requested,
            });
        }
        Ok(())
    }

    fn limit(&self) -> Option<usize> {
        Some(self.limit)
    }
}

impl<T> Guard<T> for Capacity {}

/// No two equal elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distinct;

impl Bound for Distinct {
    fn check_growth(&self, _length: usize, _additional: usize) -> Result<(), ContainerError> {
        Ok(())
    }

    fn limit(&self) -> Option<usize> {
        None
    }
}

impl<T: PartialEq> Guard<T> for Distinct {
    fn admits(&self, elements: &[T], value: &T) -> bool {
        !elements.contains(value)
    }

    fn admits_at(&self, elements: &[T], index: usize, value: &T) -> bool {
        elements
            .iter()
            .enumerate()
            .all(|(i, element)| i == index || element != value)
    }

    /// Keeps the first occurrence of every value, in original order.
    fn prepare(&self, elements: Vec<T>) -> Vec<T> {
        let mut unique = Vec::with_capacity(elements.len());
        for element in elements {
            if !unique.contains(&element) {
                unique.push(element);
            }
        }
        unique
    }

    fn copies(&self, count: usize) -> usize {
        count.min(1)
    }
}
