use derive_more::From;

/// A key-value pair stored by a [`HashMap`](super::HashMap).
///
/// The key is only retained so that it can be enumerated. Once its hash code has been computed,
/// the key plays no part in lookups, which is also why no mutable access to it is provided.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new Entry.
    pub const fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    /// Returns a reference to the key of this Entry.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value of this Entry.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value of this Entry.
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the Entry, returning the key and value as a tuple.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) const fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    fn from(value: Entry<K, V>) -> Self {
        value.into_pair()
    }
}
