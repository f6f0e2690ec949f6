//! The hash function shared by every hash-based collection in this module.
//!
//! A collection here never compares keys with [`Eq`]. Instead, it reduces every key to a hash code
//! using a caller-supplied [`HashFn`] and treats that code as the key's identity. Two keys which
//! produce the same code are the same key as far as the collection is concerned.

use std::any;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};

/// A function which reduces a key of type `K` to a hash code.
///
/// The hash code is the only notion of identity used by [`HashMap`](super::HashMap) and
/// [`HashSet`](super::HashSet). Two keys that the caller considers equal must produce equal codes.
/// The reverse isn't checked either: two distinguishable keys that happen to produce equal codes
/// are treated as the same key, and the later write replaces the earlier one. As such, a HashFn
/// should be injective over the keys that are actually stored.
///
/// This trait is implemented for every closure or function of the shape `Fn(&K) -> C`, so most
/// callers never need to implement it by hand.
pub trait HashFn<K: ?Sized> {
    /// The type of hash code produced. This is what the underlying store is keyed by.
    type Code: Hash + Eq;

    /// Computes the hash code for `key`.
    fn hash_code(&self, key: &K) -> Self::Code;
}

impl<K, C, F> HashFn<K> for F
where
    K: ?Sized,
    C: Hash + Eq,
    F: Fn(&K) -> C,
{
    type Code = C;

    fn hash_code(&self, key: &K) -> C {
        self(key)
    }
}

/// A [`HashFn`] which uses a [`BuildHasher`] to reduce any [`Hash`] key to a `u64`.
///
/// Unlike a hash-based collection that falls back to [`Eq`], the resulting code is still the sole
/// identity of a key, so distinct keys with colliding 64-bit hashes overwrite each other.
#[derive(Debug, Default, Clone)]
pub struct BuildHasherFn<B: BuildHasher>(pub B);

impl<K: Hash + ?Sized, B: BuildHasher> HashFn<K> for BuildHasherFn<B> {
    type Code = u64;

    fn hash_code(&self, key: &K) -> u64 {
        self.0.hash_one(key)
    }
}

/// Holds the hash function of a single collection. The function can't be replaced after
/// construction.
#[derive(Clone, Copy)]
pub struct HashPolicy<F> {
    hash_key: F,
}

impl<F> HashPolicy<F> {
    /// Creates a new HashPolicy around the provided hash function.
    pub const fn new(hash_key: F) -> HashPolicy<F> {
        HashPolicy { hash_key }
    }

    /// Returns a reference to the hash function.
    pub const fn hash_key(&self) -> &F {
        &self.hash_key
    }

    /// Applies the hash function to `key`.
    pub fn hash_code<K: ?Sized>(&self, key: &K) -> <F as HashFn<K>>::Code
    where
        F: HashFn<K>,
    {
        self.hash_key.hash_code(key)
    }
}

impl<F> Debug for HashPolicy<F> {
    // Closures don't implement Debug, so the type name is the best we can do.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashPolicy")
            .field("hash_key", &any::type_name::<F>())
            .finish()
    }
}

/// Shared behaviour of collections which identify their keys by a [`HashPolicy`].
pub trait HashCollection {
    /// The type of key this collection hashes.
    type Key;

    /// The hash function used by this collection.
    type HashFn: HashFn<Self::Key>;

    /// Returns the HashPolicy of this collection.
    fn policy(&self) -> &HashPolicy<Self::HashFn>;

    /// Returns a reference to the hash function of this collection.
    fn hash_key(&self) -> &Self::HashFn {
        self.policy().hash_key()
    }

    /// Computes the hash code that this collection would use to identify `key`.
    fn hash_code(&self, key: &Self::Key) -> <Self::HashFn as HashFn<Self::Key>>::Code {
        self.policy().hash_code(key)
    }
}

#[cfg(test)]
mod tests {
    use std::hash::RandomState;

    use super::*;

    #[test]
    fn test_closure_policy() {
        let policy = HashPolicy::new(|key: &u32| key % 3);

        assert_eq!(policy.hash_code(&7_u32), 1, "The hash code should be the closure's output.");
        assert_eq!(
            (policy.hash_key())(&5), 2,
            "The hash function should be accessible and callable."
        );
    }

    #[test]
    fn test_fn_item_policy() {
        fn first_char(key: &str) -> Option<char> {
            key.chars().next()
        }

        let policy = HashPolicy::new(first_char);
        assert_eq!(policy.hash_code("apple"), Some('a'));
        assert_eq!(policy.hash_code("avocado"), policy.hash_code("apple"));
        assert_eq!(policy.hash_code(""), None, "Empty hash codes are still valid codes.");
    }

    #[test]
    fn test_build_hasher_fn() {
        let policy = HashPolicy::new(BuildHasherFn(RandomState::new()));

        assert_eq!(
            policy.hash_code("key"), policy.hash_code("key"),
            "Equal keys should have equal hash codes when using the same hasher."
        );
        assert_eq!(
            HashFn::<[u8]>::hash_code(policy.hash_key(), &[1_u8, 2][..]),
            policy.hash_code(&[1_u8, 2][..])
        );
    }

    #[test]
    fn test_debug_names_type() {
        let policy = HashPolicy::new(BuildHasherFn(RandomState::new()));
        assert!(
            format!("{policy:?}").contains("BuildHasherFn"),
            "Debug output should name the hash function's type."
        );
    }
}
