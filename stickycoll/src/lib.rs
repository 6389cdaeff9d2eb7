#![cfg_attr(not(feature = "std"), no_std)]

//! `stickycoll`: collections that record their first error instead of panicking.
//!
//! Every container carries an error slot. An operation that fails (an index
//! out of range, a missing key, a full fixed container) stores the error and
//! returns the default value of the element type. From then on the container
//! is *failed*: every operation returns the default value, changes nothing and
//! leaves the first error in place.
//!
//! ```
//! # use stickycoll::{ContainerError, Dynamic};
//! let mut numbers = Dynamic::new();
//! numbers.append([1, 2, 3]);
//! assert_eq!((numbers.len(), numbers.front(), numbers.back()), (3, 1, 3));
//! assert_eq!(numbers.pop(), 3);
//!
//! assert_eq!(numbers.at(10), 0);
//! assert_eq!(numbers.pop(), 0);
//! assert_eq!(numbers.native(), [1, 2]);
//! assert_eq!(
//!     numbers.error(),
//!     Some(&ContainerError::IndexOutOfBounds { index: 10, length: 2 })
//! );
//! ```
//!
//! # Variants
//!
//! All sequences are one type, [`Storage`], with a guard policy from [`guard`]:
//!
//! - [`Dynamic`]: grows without limit.
//! - [`Fixed`]: refuses to grow past its capacity with
//!   [`ContainerError::CapacityExceeded`], leaving its elements untouched.
//! - [`Unique`]: silently ignores values that are already present.
//!
//! ```
//! # use stickycoll::{Fixed, Unique};
//! let mut fixed = Fixed::new(2, vec![1, 2]);
//! fixed.append([3]);
//! assert_eq!(fixed.native(), [1, 2]);
//! assert!(fixed.error().is_some());
//!
//! let mut unique = Unique::from_vec(vec![2, 2, 3]);
//! assert_eq!(unique.native(), [2, 3]);
//! assert!(unique.append([3]).is_empty());
//! assert!(unique.error().is_none());
//! ```
//!
//! [`Lifo`] and [`Fifo`] wrap any of the three as a stack or queue.
//! [`DynamicMap`] and [`FixedMap`] apply the same rules to key-ordered maps.
//!
//! # Traversal
//!
//! Containers hand out cursors from the `seqcursor` crate, re-exported here.
//!
//! ```
//! # use stickycoll::Dynamic;
//! let mut numbers = Dynamic::from_vec(vec![2, 3, 4]);
//! let mut cursor = numbers.iterating_mut().forward();
//! while cursor.advance() {
//!     if let Some(value) = cursor.value_mut() {
//!         *value *= 2;
//!     }
//! }
//! assert_eq!(numbers.native(), [4, 6, 8]);
//! assert_eq!(numbers.iterating().reverse().collect::<Vec<_>>(), [8, 6, 4]);
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` for [`ContainerError`] and the
//!   mutex-guarded [`Synchronized`], [`ReadonlySlice`] and [`ReadonlyMap`].
//!   Without it the crate is `no_std` and needs only `alloc`.
//! - `log`: reports the first error of each container through the `log`
//!   facade at debug level.
//!
//! The logging paths have their own tests, built only with the feature on:
//! ```text
//! cargo test --features log
//! ```

extern crate alloc;

#[macro_use]
mod logging;

mod adapters;
mod error;
mod format;
pub mod guard;
mod map;
mod merge;
#[cfg(feature = "std")]
mod readonly;
mod storage;
#[cfg(feature = "std")]
mod sync;

pub use adapters::{
    DynamicFifo, DynamicLifo, Fifo, FixedFifo, FixedLifo, Lifo, UniqueFifo, UniqueLifo,
};
pub use error::ContainerError;
pub use format::{format_entries, format_sequence};
pub use map::{DynamicMap, FixedMap, Map};
#[cfg(feature = "std")]
pub use readonly::{ReadonlyMap, ReadonlySlice};
pub use storage::{Dynamic, Fixed, Storage, Unique};
#[cfg(feature = "std")]
pub use sync::{SyncDynamic, SyncFixed, SyncUnique, Synchronized};

pub use seqcursor::{
    Combined, CombinedMut, CursorError, Forward, ForwardMut, MapCursor, ReadonlyForward,
    ReadonlyReverse, Reverse, ReverseMut,
};
