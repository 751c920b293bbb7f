use alloc::rc::Rc;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use tracing::trace;

use crate::error::{Error, Result};
use crate::raw::{Handle, RawLinkedMap};

mod cursor;
#[cfg(feature = "serde")]
mod serde;

pub use cursor::Cursor;

/// An insertion-ordered map with copy-on-write value semantics.
///
/// Entries are kept in the order they were placed with [`insert_front`],
/// [`insert_after`] and [`insert_back`]; keys are unique and looked up in
/// O(log n) through a key index. The order is never re-sorted by key.
///
/// A `CowLinkedMap` behaves like a value: a clone is a logically independent
/// map. Physically, clones share one storage instance. The first mutation
/// through a map whose storage is shared deep-copies it, so other maps never
/// observe the change. A map that is the sole owner of its storage mutates it
/// in place.
///
/// Handing out a mutable value reference ([`read_mut`], [`get_mut`]) marks
/// the map *exposed*. Cloning an exposed map deep-copies at once instead of
/// sharing. The mark is cleared by the next successful insert or removal.
///
/// The map has no storage at all while empty; removing the last entry
/// releases it.
///
/// Storage is reference counted with [`Rc`], so a `CowLinkedMap` is neither
/// `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use cow_linked_map::{CowLinkedMap, Error};
///
/// let mut chapters = CowLinkedMap::new();
/// chapters.insert_front("intro", 1).unwrap();
/// chapters.insert_after(&"intro", "setup", 2).unwrap();
/// chapters.insert_back("outro", 9).unwrap();
///
/// assert_eq!(chapters.insert_front("intro", 0), Err(Error::DuplicateKey));
/// assert_eq!(chapters.read(&"setup"), Ok(&2));
///
/// let snapshot = chapters.clone();
/// chapters.remove(&"setup").unwrap();
///
/// assert_eq!(chapters.len(), 2);
/// assert_eq!(snapshot.len(), 3);
/// ```
///
/// [`insert_front`]: CowLinkedMap::insert_front
/// [`insert_after`]: CowLinkedMap::insert_after
/// [`insert_back`]: CowLinkedMap::insert_back
/// [`read_mut`]: CowLinkedMap::read_mut
/// [`get_mut`]: CowLinkedMap::get_mut
pub struct CowLinkedMap<K, V> {
    /// `None` while the map is empty; never points at empty storage.
    raw: Option<Rc<RawLinkedMap<K, V>>>,
    /// Set once a mutable value reference has been handed out.
    exposed: bool,
}

/// An iterator over the entries of a `CowLinkedMap`, in insertion order.
///
/// This `struct` is created by the [`iter`] method on [`CowLinkedMap`].
///
/// [`iter`]: CowLinkedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    raw: Option<&'a RawLinkedMap<K, V>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the entries of a `CowLinkedMap`, in insertion order.
///
/// This `struct` is created by the [`into_iter`] method on [`CowLinkedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `CowLinkedMap`, in insertion order.
///
/// This `struct` is created by the [`keys`] method on [`CowLinkedMap`].
///
/// [`keys`]: CowLinkedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `CowLinkedMap`, in insertion order.
///
/// This `struct` is created by the [`values`] method on [`CowLinkedMap`].
///
/// [`values`]: CowLinkedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> CowLinkedMap<K, V> {
    /// Makes a new, empty `CowLinkedMap`.
    ///
    /// Does not allocate; storage is created by the first insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let map: CowLinkedMap<&str, i32> = CowLinkedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> CowLinkedMap<K, V> {
        CowLinkedMap { raw: None, exposed: false }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.as_deref().map_or(0, RawLinkedMap::len)
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_none()
    }

    /// Removes every entry and releases this map's share of the storage.
    ///
    /// Other maps sharing the storage are unaffected. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let mut a = CowLinkedMap::new();
    /// a.insert_front(1, "a").unwrap();
    /// let b = a.clone();
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(b.len(), 1);
    /// ```
    pub fn clear(&mut self) {
        if let Some(raw) = self.raw.take() {
            trace!(len = raw.len(), sharers = Rc::strong_count(&raw), "releasing storage on clear");
        }
        self.exposed = false;
    }

    /// Moves the contents out, leaving this map empty and unexposed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let mut a = CowLinkedMap::new();
    /// a.insert_front(1, "a").unwrap();
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.len(), 1);
    /// ```
    #[must_use = "use `clear` to drop the contents"]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Returns `true` if both maps currently read from the same storage instance.
    ///
    /// Two empty maps own no storage and never share.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let mut a = CowLinkedMap::new();
    /// a.insert_front(1, 10).unwrap();
    /// let mut b = a.clone();
    /// assert!(a.shares_storage_with(&b));
    ///
    /// b.insert_front(0, 0).unwrap();
    /// assert!(!a.shares_storage_with(&b));
    /// ```
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.raw, &other.raw) {
            (Some(ours), Some(theirs)) => Rc::ptr_eq(ours, theirs),
            _ => false,
        }
    }

    /// Returns `true` if a mutable value reference has been handed out since the
    /// last successful insert or removal.
    ///
    /// Cloning an exposed map deep-copies its storage.
    #[must_use]
    pub const fn is_exposed(&self) -> bool {
        self.exposed
    }

    /// Returns a cursor at the first entry of the current storage.
    ///
    /// The cursor keeps that storage alive and keeps reading it even after this
    /// map diverges from it. For an empty map this equals [`cursor_end`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let mut map = CowLinkedMap::new();
    /// map.insert_front(2, "two").unwrap();
    /// map.insert_front(1, "one").unwrap();
    ///
    /// let mut cursor = map.cursor_front();
    /// let end = map.cursor_end();
    /// let mut seen = Vec::new();
    /// while cursor != end {
    ///     seen.push(*cursor.value().unwrap());
    ///     cursor.move_next();
    /// }
    /// assert_eq!(seen, ["one", "two"]);
    /// ```
    ///
    /// [`cursor_end`]: CowLinkedMap::cursor_end
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<K, V> {
        let front = self.raw.as_deref().and_then(RawLinkedMap::head);
        Cursor::new(self.raw.clone(), front)
    }

    /// Returns the past-the-end cursor of the current storage.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<K, V> {
        Cursor::new(self.raw.clone(), None)
    }

    /// Gets an iterator over the entries of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let map = CowLinkedMap::try_from([(3, "c"), (1, "a"), (2, "b")]).unwrap();
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&3, &"c"), (&1, &"a"), (&2, &"b")]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; O(1) per step.
    pub fn iter(&self) -> Iter<'_, K, V> {
        match self.raw.as_deref() {
            Some(raw) => Iter {
                raw: Some(raw),
                front: raw.head(),
                back: raw.tail(),
                remaining: raw.len(),
            },
            None => Iter::default(),
        }
    }

    /// Gets an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn front(&self) -> Option<(&K, &V)> {
        let raw = self.raw.as_deref()?;
        raw.head().map(|handle| raw.entry(handle))
    }
}

impl<K: Ord + Clone, V> CowLinkedMap<K, V> {
    /// Returns a reference to the value stored under `key`.
    ///
    /// Never copies storage and never marks the map exposed.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the map is empty, [`Error::KeyNotFound`] if
    /// `key` is absent.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn read<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.as_deref().ok_or(Error::EmptyContainer)?.get(key)
    }

    /// Returns a reference to the value stored under `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let mut map = CowLinkedMap::new();
    /// map.insert_front(1, "a").unwrap();
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.read(key).ok()
    }

    /// Returns `true` if the map contains an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.as_deref().is_some_and(|raw| raw.contains_key(key))
    }
}

impl<K: Ord + Clone, V: Clone> CowLinkedMap<K, V> {
    /// Places a new entry at the front of the map.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if `key` is already present; the map is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(log n), plus O(n) to copy the storage if it is shared.
    pub fn insert_front(&mut self, key: K, value: V) -> Result<()> {
        if let Some(raw) = self.raw.as_deref() {
            raw.check_vacant(&key)?;
        }
        self.make_mut().insert_front(key, value)?;
        self.exposed = false;
        Ok(())
    }

    /// Places a new entry at the back of the map.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if `key` is already present; the map is left unchanged.
    pub fn insert_back(&mut self, key: K, value: V) -> Result<()> {
        if let Some(raw) = self.raw.as_deref() {
            raw.check_vacant(&key)?;
        }
        self.make_mut().insert_back(key, value)?;
        self.exposed = false;
        Ok(())
    }

    /// Places a new entry directly after the entry keyed by `anchor`.
    ///
    /// Relative order of all other entries is preserved.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if `key` is already present, otherwise
    /// [`Error::KeyNotFound`] if `anchor` is absent (always the case for an empty
    /// map). The map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::{CowLinkedMap, Error};
    ///
    /// let mut map = CowLinkedMap::new();
    /// map.insert_front("b", 2).unwrap();
    /// map.insert_front("a", 1).unwrap();
    /// map.insert_after(&"a", "c", 3).unwrap();
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "c", "b"]);
    ///
    /// assert_eq!(map.insert_after(&"x", "d", 4), Err(Error::KeyNotFound));
    /// ```
    pub fn insert_after<Q>(&mut self, anchor: &Q, key: K, value: V) -> Result<()>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.as_deref().ok_or(Error::KeyNotFound)?.check_insert_after(anchor, &key)?;
        self.make_mut().insert_after(anchor, key, value)?;
        self.exposed = false;
        Ok(())
    }

    /// Removes and returns the first entry.
    ///
    /// Removing the last entry releases the storage.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the map is empty.
    pub fn remove_front(&mut self) -> Result<(K, V)> {
        if self.raw.is_none() {
            return Err(Error::EmptyContainer);
        }
        let entry = self.make_mut().remove_front()?;
        self.release_if_empty();
        self.exposed = false;
        Ok(entry)
    }

    /// Removes and returns the entry keyed by `key`.
    ///
    /// Removing the last entry releases the storage.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the map is empty, [`Error::KeyNotFound`] if
    /// `key` is absent. A failed removal never copies shared storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::{CowLinkedMap, Error};
    ///
    /// let mut map = CowLinkedMap::new();
    /// assert_eq!(map.remove(&1), Err(Error::EmptyContainer));
    ///
    /// map.insert_front(1, "a").unwrap();
    /// assert_eq!(map.remove(&2), Err(Error::KeyNotFound));
    /// assert_eq!(map.remove(&1), Ok((1, "a")));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if !self.raw.as_deref().ok_or(Error::EmptyContainer)?.contains_key(key) {
            return Err(Error::KeyNotFound);
        }
        let entry = self.make_mut().remove(key)?;
        self.release_if_empty();
        self.exposed = false;
        Ok(entry)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// Copies shared storage first, then marks the map exposed so that the next
    /// clone of it is a deep copy.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the map is empty, [`Error::KeyNotFound`] if
    /// `key` is absent. A failed lookup neither copies nor marks.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let mut map = CowLinkedMap::new();
    /// map.insert_front("hits", 1).unwrap();
    /// *map.read_mut(&"hits").unwrap() += 1;
    /// assert_eq!(map.read(&"hits"), Ok(&2));
    /// assert!(map.is_exposed());
    /// ```
    pub fn read_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if !self.raw.as_deref().ok_or(Error::EmptyContainer)?.contains_key(key) {
            return Err(Error::KeyNotFound);
        }
        self.exposed = true;
        self.make_mut().get_mut(key)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    ///
    /// Same copy and exposure behaviour as [`read_mut`](CowLinkedMap::read_mut).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.read_mut(key).ok()
    }

    /// Returns storage this map may edit in place.
    ///
    /// Allocates storage for an empty map and deep-copies storage that any other
    /// map or cursor still references.
    fn make_mut(&mut self) -> &mut RawLinkedMap<K, V> {
        let raw = self.raw.get_or_insert_with(|| {
            trace!("allocating storage");
            Rc::new(RawLinkedMap::new())
        });
        if Rc::strong_count(raw) > 1 {
            trace!(len = raw.len(), sharers = Rc::strong_count(raw), "copying shared storage before mutation");
        }
        Rc::make_mut(raw)
    }

    fn release_if_empty(&mut self) {
        if self.raw.as_deref().is_some_and(RawLinkedMap::is_empty) {
            trace!("releasing empty storage");
            self.raw = None;
        }
    }
}

impl<K: Ord + Clone, V: Clone> Clone for CowLinkedMap<K, V> {
    /// Shares the storage, unless `self` is exposed, in which case the storage is
    /// deep-copied now. The clone is never exposed.
    fn clone(&self) -> Self {
        let raw = match &self.raw {
            Some(raw) if self.exposed => {
                trace!(len = raw.len(), "copying exposed storage on clone");
                Some(Rc::new(RawLinkedMap::clone(raw)))
            }
            raw => raw.clone(),
        };
        CowLinkedMap { raw, exposed: false }
    }
}

impl<K: Hash, V: Hash> Hash for CowLinkedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for CowLinkedMap<K, V> {
    /// Maps are equal when they hold equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other)
            || (self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b))
    }
}

impl<K: Eq, V: Eq> Eq for CowLinkedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CowLinkedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for CowLinkedMap<K, V> {
    fn default() -> Self {
        CowLinkedMap::new()
    }
}

impl<'a, K, V> IntoIterator for &'a CowLinkedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Ord + Clone, V: Clone> IntoIterator for CowLinkedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries, in insertion order.
    ///
    /// Storage still shared with another map or cursor is copied first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cow_linked_map::CowLinkedMap;
    ///
    /// let map = CowLinkedMap::try_from([(2, "b"), (1, "a")]).unwrap();
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((2, "b")));
    /// assert_eq!(iter.next_back(), Some((1, "a")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        let entries = self.raw.map(|raw| Rc::unwrap_or_clone(raw).into_vec()).unwrap_or_default();
        IntoIter {
            inner: entries.into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for CowLinkedMap<K, V>
where
    K: Borrow<Q> + Ord + Clone,
    Q: ?Sized + Ord,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord + Clone, V: Clone, const N: usize> TryFrom<[(K, V); N]> for CowLinkedMap<K, V> {
    type Error = Error;

    /// Builds a map holding the entries in array order.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if the array repeats a key.
    fn try_from(entries: [(K, V); N]) -> Result<Self> {
        let mut map = CowLinkedMap::new();
        for (key, value) in entries {
            map.insert_back(key, value)?;
        }
        Ok(map)
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let raw = self.raw?;
        let handle = self.front?;

        self.front = raw.next(handle);
        self.remaining -= 1;
        Some(raw.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let raw = self.raw?;
        let handle = self.back?;

        self.back = raw.prev(handle);
        self.remaining -= 1;
        Some(raw.entry(handle))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    /// Creates an empty `cow_linked_map::Iter`.
    ///
    /// ```
    /// # use cow_linked_map::cow_linked_map;
    /// let iter: cow_linked_map::Iter<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            raw: None,
            front: None,
            back: None,
            remaining: 0,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
