//! Insertion-ordered map with copy-on-write value semantics.
//!
//! This crate provides [`CowLinkedMap`], a map that keeps its entries in the
//! order they were placed (not in key order) and that is cheap to copy:
//! clones share one storage instance until one of them is mutated.
//!
//! - [`insert_front`](CowLinkedMap::insert_front) / [`insert_after`](CowLinkedMap::insert_after) -
//!   place an entry first, or directly after an existing anchor key
//! - [`remove_front`](CowLinkedMap::remove_front) / [`remove`](CowLinkedMap::remove) -
//!   drop the first entry, or an entry by key
//! - [`read`](CowLinkedMap::read) / [`read_mut`](CowLinkedMap::read_mut) - O(log n) lookups
//! - [`cursor_front`](CowLinkedMap::cursor_front) - a [`Cursor`] pinned to the storage it was
//!   created from
//!
//! # Example
//!
//! ```
//! use cow_linked_map::CowLinkedMap;
//!
//! let mut notes = CowLinkedMap::new();
//! notes.insert_front("b", 2).unwrap();
//! notes.insert_front("a", 1).unwrap();
//! notes.insert_after(&"a", "c", 3).unwrap();
//!
//! let order: Vec<_> = notes.keys().copied().collect();
//! assert_eq!(order, ["a", "c", "b"]);
//!
//! // Copies share storage until one side changes.
//! let mut copy = notes.clone();
//! assert!(copy.shares_storage_with(&notes));
//!
//! *copy.read_mut(&"c").unwrap() = 30;
//! assert!(!copy.shares_storage_with(&notes));
//! assert_eq!(notes.read(&"c"), Ok(&3));
//! ```
//!
//! # Copy-on-write
//!
//! Every mutation first asks whether the map is the only owner of its storage. If it
//! is, the edit happens in place; otherwise the storage is deep-cloned and the clone
//! is edited, leaving every other map (and every outstanding [`Cursor`]) untouched.
//!
//! A map that has handed out a mutable value reference is marked *exposed*. Cloning an
//! exposed map deep-copies immediately instead of sharing.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`serde`** - `Serialize`/`Deserialize` as an ordered map
//!
//! # Implementation
//!
//! Entries live in an arena as a doubly-linked list addressed by stable slot handles,
//! with a `BTreeMap` index from key to handle. Removing an entry never moves another.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
mod raw;

pub mod cow_linked_map;

pub use cow_linked_map::{CowLinkedMap, Cursor};
pub use error::{Error, Result};
