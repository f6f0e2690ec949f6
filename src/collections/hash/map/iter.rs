use std::iter::FusedIterator;

use super::{Entry, HashMap};
use crate::collections::hash::HashFn;
use crate::collections::hash::store::{IntoSlots, Slots, SlotsMut};

impl<K, V, F: HashFn<K>> IntoIterator for HashMap<K, V, F> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.store.into_slots())
    }
}

/// A type for owned iteration over a [`HashMap`]. Produces values of type `(K, V)`.
///
/// See [`HashMap::into_iter`].
pub struct IntoIter<K, V>(pub(crate) IntoSlots<Entry<K, V>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Entry::into_pair)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K, V, F: HashFn<K>> IntoIterator for &'a HashMap<K, V, F> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// A type for borrowed iteration over the entries of a [`HashMap`]. Produces values of type
/// `(&K, &V)`.
///
/// See [`HashMap::entries`].
pub struct Iter<'a, K, V>(pub(crate) Slots<'a, Entry<K, V>>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Entry::as_pair)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// A type for borrowed iteration over the keys of a [`HashMap`]. Produces values of type `&K`.
///
/// See [`HashMap::keys`].
pub struct Keys<'a, K, V>(pub(crate) Slots<'a, Entry<K, V>>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Entry::key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// A type for owned iteration over the keys of a [`HashMap`]. Produces values of type `K`.
///
/// See [`HashMap::into_keys`].
pub struct IntoKeys<K, V>(pub(crate) IntoSlots<Entry<K, V>>);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.into_pair().0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

/// A type for borrowed iteration over the values of a [`HashMap`]. Produces values of type `&V`.
///
/// See [`HashMap::values`].
pub struct Values<'a, K, V>(pub(crate) Slots<'a, Entry<K, V>>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Entry::value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A type for mutable iteration over the values of a [`HashMap`]. Produces values of type
/// `&mut V`.
///
/// See [`HashMap::values_mut`].
pub struct ValuesMut<'a, K, V>(pub(crate) SlotsMut<'a, Entry<K, V>>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::value_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// A type for owned iteration over the values of a [`HashMap`]. Produces values of type `V`.
///
/// See [`HashMap::into_values`].
pub struct IntoValues<K, V>(pub(crate) IntoSlots<Entry<K, V>>);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.into_pair().1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {}

impl<K, V> FusedIterator for IntoValues<K, V> {}
