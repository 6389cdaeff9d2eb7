use thiserror::Error;

/// Error types for cursor operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CursorError {
    /// A value was requested while the cursor was not on an element
    #[error("Cursor out of bounds: position {position} is outside a sequence of length {length}")]
    OutOfBounds {
        /// Position the cursor was at
        position: isize,
        /// Length of the traversed sequence
        length: usize,
    },
}
