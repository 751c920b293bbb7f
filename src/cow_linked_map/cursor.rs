use alloc::rc::Rc;
use core::fmt;

use crate::raw::{Handle, RawLinkedMap};

/// A forward, read-only position in one specific storage instance of a
/// [`CowLinkedMap`](super::CowLinkedMap).
///
/// A cursor holds its own reference to the storage it was created from. When
/// the map it came from later copies its storage on write, the cursor keeps
/// walking the old instance: it is never invalidated, it just stops tracking
/// the map. While a cursor is alive, the next mutation of the map pays for
/// that copy.
///
/// Two cursors are equal when they point into the same storage instance at
/// the same position. All past-the-end cursors of one instance are equal, and
/// cursors of empty maps are always equal to each other.
///
/// # Examples
///
/// ```
/// use cow_linked_map::CowLinkedMap;
///
/// let mut map = CowLinkedMap::new();
/// map.insert_front('a', 1).unwrap();
///
/// let cursor = map.cursor_front();
/// map.insert_front('z', 26).unwrap();
///
/// // The cursor still reads the storage as it was when it was created.
/// assert_eq!(cursor.get(), Some((&'a', &1)));
/// assert_ne!(cursor, map.cursor_front());
/// ```
pub struct Cursor<K, V> {
    raw: Option<Rc<RawLinkedMap<K, V>>>,
    position: Option<Handle>,
}

impl<K, V> Cursor<K, V> {
    pub(crate) fn new(raw: Option<Rc<RawLinkedMap<K, V>>>, position: Option<Handle>) -> Self {
        Cursor { raw, position }
    }

    /// Returns the entry under the cursor, or `None` past the end.
    #[must_use]
    pub fn get(&self) -> Option<(&K, &V)> {
        let raw = self.raw.as_deref()?;
        self.position.map(|handle| raw.entry(handle))
    }

    /// Returns the key under the cursor, or `None` past the end.
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.get().map(|(key, _)| key)
    }

    /// Returns the value under the cursor, or `None` past the end.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.get().map(|(_, value)| value)
    }

    /// Returns `true` once the cursor has moved past the last entry.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Advances to the next entry in insertion order.
    ///
    /// Advancing a past-the-end cursor leaves it past the end.
    pub fn move_next(&mut self) {
        if let (Some(raw), Some(handle)) = (self.raw.as_deref(), self.position) {
            self.position = raw.next(handle);
        }
    }
}

impl<K, V> Clone for Cursor<K, V> {
    fn clone(&self) -> Self {
        Cursor {
            raw: self.raw.clone(),
            position: self.position,
        }
    }
}

impl<K, V> PartialEq for Cursor<K, V> {
    fn eq(&self, other: &Self) -> bool {
        let same_storage = match (&self.raw, &other.raw) {
            (Some(ours), Some(theirs)) => Rc::ptr_eq(ours, theirs),
            (None, None) => true,
            _ => false,
        };
        same_storage && self.position == other.position
    }
}

impl<K, V> Eq for Cursor<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("entry", &self.get()).finish()
    }
}
