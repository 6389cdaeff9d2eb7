use thiserror::Error;

/// Error types recorded by containers
///
/// A container keeps the first of these it encounters; see the crate docs.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ContainerError {
    /// Index is outside the valid range for the operation
    #[error("Index out of bounds: index {index} is outside collection of length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: isize,
        /// Length of the collection at the time
        length: usize,
    },
    /// A linear search completed without a match
    #[error("Element not found")]
    ElementNotFound,
    /// Operation needs at least one element
    #[error("Operation on empty collection")]
    EmptyCollection,
    /// Mutation would grow the collection past its capacity
    #[error("Capacity exceeded: at most {capacity} elements allowed, {requested} requested")]
    CapacityExceeded {
        /// Maximum number of elements
        capacity: usize,
        /// Number of elements the mutation would have produced
        requested: usize,
    },
    /// Negative capacity passed to a fixed-capacity constructor
    #[error("Negative capacity: {capacity}")]
    NegativeCapacity {
        /// Requested capacity
        capacity: isize,
    },
    /// `add` on a key that is already present
    #[error("Key already exists")]
    KeyAlreadyExists,
    /// Key lookup on a key that is absent
    #[error("Key not found")]
    KeyNotFound,
    /// Container was built without a backing store
    #[error("Container has no backing store")]
    NilBackingStore,
}
