//! Insertion-ordered storage keyed by hash code, shared by [`HashMap`](super::HashMap) and
//! [`HashSet`](super::HashSet).
//!
//! Payloads live in a list of slots kept in insertion order, with an index from hash code to slot.
//! Removing a payload leaves an empty slot behind rather than shifting everything after it, and
//! the slots are compacted once empty ones outnumber occupied ones. This keeps removal `O(1)`
//! amortized while preserving the relative order of everything that remains.

use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::{slice, vec};

use indexmap::IndexMap;

/// A payload in insertion order, or None if it has been removed since the last compaction.
pub(crate) type Slot<P> = Option<P>;

pub(crate) struct Store<C, P> {
    pub(crate) index: IndexMap<C, usize>,
    pub(crate) slots: Vec<Slot<P>>,
}

impl<C: Hash + Eq, P> Store<C, P> {
    pub(crate) fn new() -> Store<C, P> {
        Store {
            index: IndexMap::new(),
            slots: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Store<C, P> {
        Store {
            index: IndexMap::with_capacity(cap),
            slots: Vec::with_capacity(cap),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn reserve(&mut self, extra: usize) {
        self.index.reserve(extra);
        self.slots.reserve(extra);
    }

    /// Stores `payload` under `code`. An existing payload for the code is replaced in its current
    /// slot and returned, otherwise the payload is appended.
    pub(crate) fn insert(&mut self, code: C, payload: P) -> Option<P> {
        let existing = self.index.get(&code).copied();

        match existing {
            Some(slot) => self.slots[slot].replace(payload),
            None => {
                self.index.insert(code, self.slots.len());
                self.slots.push(Some(payload));
                None
            },
        }
    }

    pub(crate) fn get(&self, code: &C) -> Option<&P> {
        let slot = *self.index.get(code)?;
        self.slots[slot].as_ref()
    }

    pub(crate) fn get_mut(&mut self, code: &C) -> Option<&mut P> {
        let slot = *self.index.get(code)?;
        self.slots[slot].as_mut()
    }

    pub(crate) fn contains(&self, code: &C) -> bool {
        self.index.contains_key(code)
    }

    /// Removes and returns the payload stored under `code`, leaving an empty slot in its place.
    pub(crate) fn remove(&mut self, code: &C) -> Option<P> {
        // The index is unordered, so swapping is fine here.
        let slot = self.index.swap_remove(code)?;
        let removed = self.slots[slot].take();

        if self.slots.len() - self.len() > self.len() {
            self.compact();
        }

        removed
    }

    pub(crate) fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
    }

    /// Drops all empty slots, moving the occupied ones down without changing their order.
    fn compact(&mut self) {
        // The new position of every slot is the number of occupied slots before it.
        let mut moved_to = Vec::with_capacity(self.slots.len());
        let mut occupied = 0;
        for slot in &self.slots {
            moved_to.push(occupied);
            if slot.is_some() {
                occupied += 1;
            }
        }

        for slot in self.index.values_mut() {
            *slot = moved_to[*slot];
        }
        self.slots.retain(Option::is_some);
    }
}

impl<C, P> Store<C, P> {
    pub(crate) fn slots(&self) -> Slots<'_, P> {
        Slots {
            inner: self.slots.iter(),
            len: self.index.len(),
        }
    }

    pub(crate) fn slots_mut(&mut self) -> SlotsMut<'_, P> {
        SlotsMut {
            len: self.index.len(),
            inner: self.slots.iter_mut(),
        }
    }

    pub(crate) fn into_slots(self) -> IntoSlots<P> {
        IntoSlots {
            len: self.index.len(),
            inner: self.slots.into_iter(),
        }
    }
}

impl<C: Clone, P: Clone> Clone for Store<C, P> {
    fn clone(&self) -> Self {
        Store {
            index: self.index.clone(),
            slots: self.slots.clone(),
        }
    }
}

impl<C, P: Debug> Debug for Store<C, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots()).finish()
    }
}

/// Borrowed iteration over the occupied slots of a [`Store`], in insertion order.
pub(crate) struct Slots<'a, P> {
    pub(crate) inner: slice::Iter<'a, Slot<P>>,
    pub(crate) len: usize,
}

impl<'a, P> Iterator for Slots<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(None) = next {
            next = self.inner.next();
        }

        let item = next.and_then(Option::as_ref);
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<P> DoubleEndedIterator for Slots<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next_back();
        while let Some(None) = next {
            next = self.inner.next_back();
        }

        let item = next.and_then(Option::as_ref);
        if item.is_some() {
            self.len -= 1;
        }
        item
    }
}

impl<P> ExactSizeIterator for Slots<'_, P> {}

impl<P> FusedIterator for Slots<'_, P> {}

impl<P> Clone for Slots<'_, P> {
    fn clone(&self) -> Self {
        Slots {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

/// Mutable iteration over the occupied slots of a [`Store`], in insertion order.
pub(crate) struct SlotsMut<'a, P> {
    pub(crate) inner: slice::IterMut<'a, Slot<P>>,
    pub(crate) len: usize,
}

impl<'a, P> Iterator for SlotsMut<'a, P> {
    type Item = &'a mut P;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(None) = next {
            next = self.inner.next();
        }

        let item = next.and_then(Option::as_mut);
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<P> ExactSizeIterator for SlotsMut<'_, P> {}

impl<P> FusedIterator for SlotsMut<'_, P> {}

/// Owned iteration over the occupied slots of a [`Store`], in insertion order.
pub(crate) struct IntoSlots<P> {
    pub(crate) inner: vec::IntoIter<Slot<P>>,
    pub(crate) len: usize,
}

impl<P> Iterator for IntoSlots<P> {
    type Item = P;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(None) = next {
            next = self.inner.next();
        }

        let item = next.flatten();
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<P> DoubleEndedIterator for IntoSlots<P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next_back();
        while let Some(None) = next {
            next = self.inner.next_back();
        }

        let item = next.flatten();
        if item.is_some() {
            self.len -= 1;
        }
        item
    }
}

impl<P> ExactSizeIterator for IntoSlots<P> {}

impl<P> FusedIterator for IntoSlots<P> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(store: &Store<u32, u32>) -> Vec<u32> {
        store.slots().copied().collect()
    }

    #[test]
    fn test_remove_leaves_order() {
        let mut store = Store::new();
        for i in 0..10 {
            store.insert(i, i);
        }

        assert_eq!(store.remove(&3), Some(3));
        assert_eq!(store.remove(&3), None);
        assert_eq!(live(&store), [0, 1, 2, 4, 5, 6, 7, 8, 9]);
        assert_eq!(store.slots().len(), 9);
        assert_eq!(store.slots().rev().next(), Some(&9));
    }

    #[test]
    fn test_compaction_bounds_empty_slots() {
        let mut store = Store::new();
        for i in 0..1000 {
            store.insert(i, i);
        }

        for i in 0..990 {
            assert_eq!(store.remove(&i), Some(i));
            assert!(
                store.slots.len() <= 2 * store.len() + 1,
                "Empty slots should never outnumber occupied ones for long."
            );
        }

        assert_eq!(live(&store), (990..1000).collect::<Vec<_>>());
        for code in 990..1000 {
            assert_eq!(
                store.get(&code), Some(&code),
                "Compaction should keep the index pointing at the right slots."
            );
        }
    }

    #[test]
    fn test_replace_after_compaction_keeps_position() {
        let mut store = Store::new();
        for i in 0..8 {
            store.insert(i, i);
        }
        for i in 0..5 {
            store.remove(&i);
        }

        assert_eq!(store.insert(6, 60), Some(6), "Replacing should return the old payload.");
        store.insert(0, 0);
        assert_eq!(
            live(&store), [5, 60, 7, 0],
            "A replaced payload should stay in place and a re-added code should go last."
        );
    }

    #[test]
    fn test_into_slots_and_slots_mut() {
        let mut store = Store::new();
        for i in 0..4 {
            store.insert(i, i);
        }
        store.remove(&1);

        for payload in store.slots_mut() {
            *payload *= 10;
        }
        assert_eq!(store.slots_mut().len(), 3);
        assert_eq!(store.into_slots().rev().collect::<Vec<_>>(), [30, 20, 0]);
    }
}
