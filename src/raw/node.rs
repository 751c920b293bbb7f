use super::handle::Handle;

// One entry of the insertion-ordered sequence, linked to its neighbours by handle.
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<Handle>,
    next: Option<Handle>,
}

impl<K, V> Node<K, V> {
    pub(crate) const fn new(key: K, value: V, prev: Option<Handle>, next: Option<Handle>) -> Self {
        Self { key, value, prev, next }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    pub(crate) const fn prev(&self) -> Option<Handle> {
        self.prev
    }

    #[inline]
    pub(crate) const fn next(&self) -> Option<Handle> {
        self.next
    }

    pub(crate) fn set_prev(&mut self, prev: Option<Handle>) {
        self.prev = prev;
    }

    pub(crate) fn set_next(&mut self, next: Option<Handle>) {
        self.next = next;
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
