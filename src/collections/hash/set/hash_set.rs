use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::{Entries, Iter};
use crate::collections::hash::store::Store;
use crate::collections::hash::{HashCollection, HashFn, HashPolicy};
use crate::collections::traits::set::Set;

/// A set of items which are considered unique by the hash code produced by a caller-supplied
/// [`HashFn`].
///
/// Adding an item whose hash code is already present replaces the stored item with the new one,
/// in the same position. See [`HashMap`](crate::collections::hash::HashMap) for details on how
/// hash codes are used as identity.
///
/// # Time Complexity
/// Matches [`HashMap`](crate::collections::hash::HashMap): `add`, `has`, `take` and `delete` are
/// `O(1)`, amortized where the underlying store grows or compacts. `clear` is `O(n)`.
///
/// Unlike the map, iterating over a HashSet directly produces bare items rather than pairs.
/// [`HashSet::entries`] produces `(item, item)` pairs for code written against both collections.
pub struct HashSet<T, F: HashFn<T>> {
    pub(crate) policy: HashPolicy<F>,
    pub(crate) store: Store<F::Code, T>,
}

impl<T, F: HashFn<T>> HashSet<T, F> {
    /// Creates a new, empty HashSet which identifies items using `hash_key`.
    ///
    /// # Examples
    /// ```
    /// use hash_collections::collections::hash::HashSet;
    ///
    /// let mut set: HashSet<String, _> = HashSet::new(|item: &String| item.to_lowercase());
    /// set.add("Apple".into()).add("APPLE".into());
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// A `hash_key` that can't be called with an item doesn't compile:
    /// ```compile_fail
    /// use hash_collections::collections::hash::HashSet;
    ///
    /// let set = HashSet::<u32, _>::new(42_u32);
    /// ```
    pub fn new(hash_key: F) -> HashSet<T, F> {
        HashSet {
            policy: HashPolicy::new(hash_key),
            store: Store::new(),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity, allowing insertions without
    /// reallocation.
    pub fn with_cap(cap: usize, hash_key: F) -> HashSet<T, F> {
        HashSet {
            policy: HashPolicy::new(hash_key),
            store: Store::with_capacity(cap),
        }
    }

    /// Returns the number of items in the HashSet.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the HashSet contains no items.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the current capacity of the HashSet.
    pub fn cap(&self) -> usize {
        self.store.capacity()
    }

    /// Ensures that at least `extra` more items can be added without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.store.reserve(extra);
    }

    /// Adds `item` to the HashSet, returning the item it replaced if one had the same hash code.
    pub fn replace(&mut self, item: T) -> Option<T> {
        let code = self.policy.hash_code(&item);
        let replaced = self.store.insert(code, item);

        if replaced.is_some() {
            log::trace!("HashSet replaced an existing item with a colliding hash code");
        }

        replaced
    }

    /// Adds `item` to the HashSet, replacing any item with the same hash code. Returns the HashSet
    /// to allow chaining.
    pub fn add(&mut self, item: T) -> &mut Self {
        self.replace(item);
        self
    }

    /// Returns the stored item with the same hash code as `item`, if there is one.
    pub fn get(&self, item: &T) -> Option<&T> {
        let code = self.policy.hash_code(item);
        self.store.get(&code)
    }

    /// Removes and returns the stored item with the same hash code as `item`, if there is one.
    pub fn take(&mut self, item: &T) -> Option<T> {
        let code = self.policy.hash_code(item);
        self.store.remove(&code)
    }

    /// Removes the stored item with the same hash code as `item`. Returns true if an item was
    /// removed.
    pub fn delete(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Returns true if an item with the same hash code as `item` is stored.
    pub fn has(&self, item: &T) -> bool {
        let code = self.policy.hash_code(item);
        self.store.contains(&code)
    }

    /// Removes all items from the HashSet. Returns the HashSet to allow chaining.
    pub fn clear(&mut self) -> &mut Self {
        log::trace!("Clearing {} items from HashSet", self.len());
        self.store.clear();
        self
    }

    /// Invokes `callback` for every item in enumeration order. The item is passed as both the
    /// first and second argument, matching the shape of [`HashMap::for_each`].
    ///
    /// [`HashMap::for_each`]: crate::collections::hash::HashMap::for_each
    pub fn for_each<C>(&self, mut callback: C) -> &Self
    where
        C: FnMut(&T, &T, &Self),
    {
        for (key, value) in self.entries() {
            callback(key, value, self);
        }
        self
    }

    /// Returns an iterator over all items in the HashSet as `(item, item)` pairs.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries(self.store.slots())
    }

    /// Returns an iterator over all items in the HashSet, as references.
    pub fn values(&self) -> Iter<'_, T> {
        Iter(self.store.slots())
    }

    /// An alias of [`values`](HashSet::values).
    pub fn iter(&self) -> Iter<'_, T> {
        self.values()
    }
}

impl<T, F: HashFn<T>> HashCollection for HashSet<T, F> {
    type Key = T;

    type HashFn = F;

    fn policy(&self) -> &HashPolicy<F> {
        &self.policy
    }
}

impl<T, F: HashFn<T>> Set<T> for HashSet<T, F> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.has(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.values()
    }
}

impl<T, F: HashFn<T>> Extend<T> for HashSet<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.replace(item);
        }
    }
}

impl<T, F> Clone for HashSet<T, F>
where
    T: Clone,
    F: HashFn<T> + Clone,
    F::Code: Clone,
{
    fn clone(&self) -> Self {
        HashSet {
            policy: self.policy.clone(),
            store: self.store.clone(),
        }
    }
}

impl<T, F> HashSet<T, F>
where
    T: Clone,
    F: HashFn<T> + Clone,
{
    /// Collects borrowed items into a new HashSet that shares this set's hash function.
    fn collect_with_policy<'a, I>(&self, items: I) -> HashSet<T, F>
    where
        I: Iterator<Item = &'a T>,
        T: 'a,
    {
        let mut set = HashSet::new(self.policy.hash_key().clone());
        set.extend(items.cloned());
        set
    }
}

impl<T: Clone, F: HashFn<T> + Clone> BitOr for &HashSet<T, F> {
    type Output = HashSet<T, F>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.collect_with_policy(self.union(rhs))
    }
}

impl<T: Clone, F: HashFn<T> + Clone> BitAnd for &HashSet<T, F> {
    type Output = HashSet<T, F>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.collect_with_policy(self.intersection(rhs))
    }
}

impl<T: Clone, F: HashFn<T> + Clone> BitXor for &HashSet<T, F> {
    type Output = HashSet<T, F>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.collect_with_policy(self.symmetric_difference(rhs))
    }
}

impl<T: Clone, F: HashFn<T> + Clone> Sub for &HashSet<T, F> {
    type Output = HashSet<T, F>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.collect_with_policy(self.difference(rhs))
    }
}

impl<T: Debug, F: HashFn<T>> Debug for HashSet<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("items", &self.store)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T: Display, F: HashFn<T>> Display for HashSet<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
