//! Error types for [`CowLinkedMap`](crate::CowLinkedMap).
//!
//! Every fallible operation validates its preconditions before touching the
//! storage, so an `Err` always means the map is exactly as it was before the
//! call: same entries, same order, same sharing.

use thiserror::Error;

/// Errors returned by the fallible map operations.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The operation needs at least one entry and the map has none.
    #[error("map is empty")]
    EmptyContainer,

    /// An insert used a key that is already present.
    #[error("map already contains an entry with the given key")]
    DuplicateKey,

    /// A lookup, removal or anchor referenced a key that is not present.
    #[error("map does not contain an entry with the given key")]
    KeyNotFound,
}

/// A `Result` alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
