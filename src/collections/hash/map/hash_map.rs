use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use super::{Entry, IntoKeys, IntoValues, Iter, KeyNotFound, Keys, Values, ValuesMut};
use crate::collections::hash::store::Store;
use crate::collections::hash::{HashCollection, HashFn, HashPolicy};
use crate::util::result::ResultExtension;

/// A map of keys to values which identifies each key solely by the hash code produced by a
/// caller-supplied [`HashFn`].
///
/// Keys don't need to implement [`Eq`] or [`Hash`](std::hash::Hash). Instead, the hash function
/// reduces each key to a code and the map stores at most one [`Entry`] per code. Inserting a key
/// whose code is already present replaces the existing entry, including its key, so the previous
/// key and value are no longer observable. It is up to the caller to provide a hash function that
/// doesn't collide for keys which should be kept apart.
///
/// Entries are enumerated in the order their hash codes were first inserted. Replacing an entry
/// keeps its position, while removing one preserves the order of those remaining.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` / `set` | `O(1)`* |
/// | `get` | `O(1)` |
/// | `remove` / `delete` | `O(1)`* |
/// | `has` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, the underlying store may have to grow, or compact the gaps left by removed
/// entries.
pub struct HashMap<K, V, F: HashFn<K>> {
    pub(crate) policy: HashPolicy<F>,
    pub(crate) store: Store<F::Code, Entry<K, V>>,
}

impl<K, V, F: HashFn<K>> HashMap<K, V, F> {
    /// Creates a new, empty HashMap which identifies keys using `hash_key`.
    ///
    /// # Examples
    /// ```
    /// use hash_collections::collections::hash::HashMap;
    ///
    /// let mut map: HashMap<&str, u32, _> = HashMap::new(|key: &&str| key.len());
    /// map.set("one", 1).set("two", 2);
    /// assert_eq!(map.get(&"six"), Ok(&2));
    /// ```
    ///
    /// A `hash_key` that can't be called with a key doesn't compile:
    /// ```compile_fail
    /// use hash_collections::collections::hash::HashMap;
    ///
    /// let map = HashMap::<u32, u32, _>::new(42_u32);
    /// ```
    pub fn new(hash_key: F) -> HashMap<K, V, F> {
        HashMap {
            policy: HashPolicy::new(hash_key),
            store: Store::new(),
        }
    }

    /// Creates a new HashMap with the provided `cap`acity, allowing insertions without
    /// reallocation.
    pub fn with_cap(cap: usize, hash_key: F) -> HashMap<K, V, F> {
        HashMap {
            policy: HashPolicy::new(hash_key),
            store: Store::with_capacity(cap),
        }
    }

    /// Returns the number of entries in the HashMap.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the HashMap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the current capacity of the HashMap.
    pub fn cap(&self) -> usize {
        self.store.capacity()
    }

    /// Ensures that at least `extra` more entries can be inserted without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.store.reserve(extra);
    }

    /// Inserts the provided `key`-`value` pair into the HashMap. If another entry already exists
    /// for the key's hash code, it is replaced and returned.
    ///
    /// Unlike [`std::collections::HashMap`], the stored key is replaced as well as the value.
    pub fn insert(&mut self, key: K, value: V) -> Option<Entry<K, V>> {
        let code = self.policy.hash_code(&key);
        let replaced = self.store.insert(code, Entry::new(key, value));

        if replaced.is_some() {
            log::trace!("HashMap replaced an existing entry with a colliding hash code");
        }

        replaced
    }

    /// Associates `value` with `key`, replacing any entry with the same hash code. Returns the
    /// HashMap to allow chaining.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Returns a reference to the value associated with the hash code of `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for the hash code.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.get_entry(key)
            .map(Entry::value)
            .ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the hash code of `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for the hash code.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        let code = self.policy.hash_code(key);

        self.store.get_mut(&code)
            .map(Entry::value_mut)
            .ok_or(KeyNotFound)
    }

    /// Returns the entry stored for the hash code of `key`, or None if there is no entry. The
    /// stored key may be a different (but colliding) key to the one provided.
    pub fn get_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let code = self.policy.hash_code(key);
        self.store.get(&code)
    }

    /// Removes the entry associated with the hash code of `key`, returning it if it exists.
    pub fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        let code = self.policy.hash_code(key);
        self.store.remove(&code)
    }

    /// Removes the entry associated with the hash code of `key`. Returns true if an entry was
    /// removed.
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Returns true if there is an entry associated with the hash code of `key`.
    pub fn has(&self, key: &K) -> bool {
        let code = self.policy.hash_code(key);
        self.store.contains(&code)
    }

    /// Removes all entries from the HashMap, keeping the allocated capacity. Returns the HashMap
    /// to allow chaining.
    pub fn clear(&mut self) -> &mut Self {
        log::trace!("Clearing {} entries from HashMap", self.len());
        self.store.clear();
        self
    }

    /// Invokes `callback` with the key, value and a reference to this HashMap for every entry, in
    /// enumeration order.
    ///
    /// Any context the callback needs can be captured by the closure. Because the HashMap is
    /// borrowed for the duration of the call, the callback can't modify it.
    pub fn for_each<C>(&self, mut callback: C) -> &Self
    where
        C: FnMut(&K, &V, &Self),
    {
        for (key, value) in self.entries() {
            callback(key, value, self);
        }
        self
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn entries(&self) -> Iter<'_, K, V> {
        Iter(self.store.slots())
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references. An alias of
    /// [`entries`](HashMap::entries).
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.store.slots())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.store.into_slots())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.store.slots())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.store.slots_mut())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.store.into_slots())
    }
}

impl<K, V, F: HashFn<K>> HashCollection for HashMap<K, V, F> {
    type Key = K;

    type HashFn = F;

    fn policy(&self) -> &HashPolicy<F> {
        &self.policy
    }
}

impl<K, V, F: HashFn<K>> Index<&K> for HashMap<K, V, F> {
    type Output = V;

    /// Returns a reference to the value associated with the hash code of `key`.
    ///
    /// # Panics
    /// Panics if there is no entry for the hash code. See [`HashMap::get`] for a non-panicking
    /// alternative.
    fn index(&self, key: &K) -> &V {
        self.get(key).throw()
    }
}

impl<K, V, F: HashFn<K>> Extend<(K, V)> for HashMap<K, V, F> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, F> Clone for HashMap<K, V, F>
where
    K: Clone,
    V: Clone,
    F: HashFn<K> + Clone,
    F::Code: Clone,
{
    fn clone(&self) -> Self {
        HashMap {
            policy: self.policy.clone(),
            store: self.store.clone(),
        }
    }
}

impl<K: Debug, V: Debug, F: HashFn<K>> Debug for HashMap<K, V, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("entries", &self.store)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<K: Debug, V: Debug, F: HashFn<K>> Display for HashMap<K, V, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
