use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::borrow::Borrow;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use crate::error::{Error, Result};

/// The storage engine backing `CowLinkedMap`.
///
/// Knows nothing about sharing: every method edits `self` directly. Every
/// fallible method checks its preconditions before the first write, so an
/// `Err` leaves the sequence and the index untouched.
pub(crate) struct RawLinkedMap<K, V> {
    /// Arena storing the linked entries.
    nodes: Arena<Node<K, V>>,
    /// Key to slot index; mirrors the linked sequence exactly.
    index: BTreeMap<K, Handle>,
    /// First entry in insertion order.
    head: Option<Handle>,
    /// Last entry in insertion order.
    tail: Option<Handle>,
}

impl<K, V> RawLinkedMap<K, V> {
    /// Creates a new, empty storage instance.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            index: BTreeMap::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of entries.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) const fn head(&self) -> Option<Handle> {
        self.head
    }

    pub(crate) const fn tail(&self) -> Option<Handle> {
        self.tail
    }

    /// Returns the entry stored at `handle`.
    #[inline]
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), node.value())
    }

    #[inline]
    pub(crate) fn next(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).next()
    }

    #[inline]
    pub(crate) fn prev(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).prev()
    }

    /// Moves every entry out in sequence order.
    pub(crate) fn into_vec(mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut current = self.head;
        while let Some(handle) = current {
            let node = self.nodes.take(handle);
            current = node.next();
            entries.push(node.into_entry());
        }
        entries
    }
}

impl<K: Ord + Clone, V> RawLinkedMap<K, V> {
    /// Looks up the slot of `key`.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.index.get(key).copied()
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.index.contains_key(key)
    }

    /// Fails with `DuplicateKey` if `key` is already indexed.
    pub(crate) fn check_vacant(&self, key: &K) -> Result<()> {
        if self.index.contains_key(key) {
            return Err(Error::DuplicateKey);
        }
        Ok(())
    }

    /// Resolves the anchor for an insertion after `anchor`, checking `key` first.
    pub(crate) fn check_insert_after<Q>(&self, anchor: &Q, key: &K) -> Result<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.check_vacant(key)?;
        self.find(anchor).ok_or(Error::KeyNotFound)
    }

    /// Prepends an entry.
    pub(crate) fn insert_front(&mut self, key: K, value: V) -> Result<()> {
        self.check_vacant(&key)?;
        self.link(key, value, None, self.head);
        Ok(())
    }

    /// Appends an entry.
    pub(crate) fn insert_back(&mut self, key: K, value: V) -> Result<()> {
        self.check_vacant(&key)?;
        self.link(key, value, self.tail, None);
        Ok(())
    }

    /// Inserts an entry directly after the entry keyed by `anchor`.
    pub(crate) fn insert_after<Q>(&mut self, anchor: &Q, key: K, value: V) -> Result<()>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let prev = self.check_insert_after(anchor, &key)?;
        let next = self.nodes.get(prev).next();
        self.link(key, value, Some(prev), next);
        Ok(())
    }

    /// Removes the first entry in sequence order.
    pub(crate) fn remove_front(&mut self) -> Result<(K, V)> {
        let head = self.head.ok_or(Error::EmptyContainer)?;
        Ok(self.unlink(head))
    }

    /// Removes the entry keyed by `key`.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(key).ok_or(Error::KeyNotFound)?;
        Ok(self.unlink(handle))
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(key).ok_or(Error::KeyNotFound)?;
        Ok(self.nodes.get(handle).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(key).ok_or(Error::KeyNotFound)?;
        Ok(self.nodes.get_mut(handle).value_mut())
    }

    /// Allocates a node between `prev` and `next` and indexes it.
    ///
    /// The caller has already checked that `key` is vacant and that `prev`
    /// and `next` are adjacent.
    fn link(&mut self, key: K, value: V, prev: Option<Handle>, next: Option<Handle>) -> Handle {
        let handle = self.nodes.insert(Node::new(key.clone(), value, prev, next));

        match prev {
            Some(prev) => self.nodes.get_mut(prev).set_next(Some(handle)),
            None => self.head = Some(handle),
        }
        match next {
            Some(next) => self.nodes.get_mut(next).set_prev(Some(handle)),
            None => self.tail = Some(handle),
        }

        self.index.insert(key, handle);
        handle
    }

    /// Detaches the node at `handle` from the sequence and the index.
    fn unlink(&mut self, handle: Handle) -> (K, V) {
        let node = self.nodes.take(handle);
        let (prev, next) = (node.prev(), node.next());

        match prev {
            Some(prev) => self.nodes.get_mut(prev).set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes.get_mut(next).set_prev(prev),
            None => self.tail = prev,
        }

        let (key, value) = node.into_entry();
        self.index.remove(&key);
        (key, value)
    }
}

impl<K: Ord + Clone, V: Clone> Clone for RawLinkedMap<K, V> {
    /// Deep-copies the sequence in order and rebuilds the index from scratch.
    ///
    /// Slots are compacted, so handles of the source mean nothing in the copy.
    fn clone(&self) -> Self {
        let mut copy = Self {
            nodes: Arena::with_capacity(self.len()),
            index: BTreeMap::new(),
            head: None,
            tail: None,
        };

        let mut current = self.head;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            copy.link(node.key().clone(), node.value().clone(), copy.tail, None);
            current = node.next();
        }
        copy
    }
}
