#![cfg_attr(not(feature = "std"), no_std)]

//! `seqcursor`: position-tracking cursors over indexed sequences.
//!
//! A cursor starts *before* its first element, moves with [`Cursor::advance`]
//! and reads with [`Cursor::value`]. Misuse never panics: reading while the
//! cursor is not on an element records a sticky [`CursorError`] that can be
//! inspected afterwards.
//!
//! # Cursor kinds
//!
//! | Kind | Source | Extra access |
//! |------|--------|--------------|
//! | [`Forward`], [`Reverse`] | `&[T]` | none |
//! | [`ForwardMut`], [`ReverseMut`] | `&mut [T]` | [`Cursor::value_mut`] |
//! | [`ReadonlyForward`], [`ReadonlyReverse`] | owned copy | none |
//!
//! Read-only cursors copy the sequence when they are created, so they can
//! outlive any lock or borrow on the original.
//!
//! # Combined factory
//!
//! Containers expose traversal through [`Combined`] (and [`CombinedMut`] for
//! in-place mutation):
//!
//! ```
//! # use seqcursor::{Combined, CombinedMut};
//! let mut data = vec![2, 3, 4];
//!
//! let mut cursor = CombinedMut::new(&mut data).forward();
//! while cursor.advance() {
//!     if let Some(value) = cursor.value_mut() {
//!         *value *= 2;
//!     }
//! }
//! assert_eq!(data, [4, 6, 8]);
//!
//! let reversed: Vec<_> = Combined::new(&data).reverse().collect();
//! assert_eq!(reversed, [8, 6, 4]);
//! ```
//!
//! # Map cursor
//!
//! [`MapCursor`] walks a `BTreeMap` in key order with [`MapCursor::key`] and
//! [`MapCursor::value`].
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`CursorError`].
//!   Without it the crate is `no_std` and needs only `alloc`.
//! - `log`: reports cursor failures through the `log` facade at debug level.
//!
//! The logging paths have their own tests, built only with the feature on:
//! ```text
//! cargo test --features log
//! ```

extern crate alloc;

#[macro_use]
mod logging;

mod combined;
mod cursor;
mod error;
mod map;
mod source;

pub use combined::{Combined, CombinedMut};
pub use cursor::{
    Backwards, Cursor, Direction, Forward, ForwardMut, Forwards, ReadonlyForward,
    ReadonlyReverse, Reverse, ReverseMut,
};
pub use error::CursorError;
pub use map::MapCursor;
pub use source::{Source, SourceMut};
