//! Maps and sets that identify keys by a caller-supplied hash function instead of equality.
//!
//! # Purpose
//! A [`HashMap`](collections::hash::HashMap) or [`HashSet`](collections::hash::HashSet) in this
//! crate reduces each key to a hash code with the function it was constructed with, then treats
//! that code as the key's identity. Two keys with the same code are the same key: a later write
//! replaces the earlier entry entirely, key included. There is no chaining of colliding keys.
//!
//! ```
//! use hash_collections::collections::hash::HashSet;
//!
//! let mut set: HashSet<u32, _> = HashSet::new(|n: &u32| n % 3);
//! set.add(1).add(4);
//!
//! assert_eq!(set.values().collect::<Vec<_>>(), [&4]);
//! ```
//!
//! # Caller Obligations
//! Because no equality check is performed, these collections are only correct when the hash
//! function is injective over the keys that should be kept apart. Violating that doesn't produce an
//! error, colliding entries are silently replaced.
//!
//! # Error Handling
//! The hash function is checked at compile time through the [`HashFn`](collections::hash::HashFn)
//! trait, so construction can't fail. The only runtime error is
//! [`KeyNotFound`](collections::hash::map::KeyNotFound), returned when getting a value for a hash
//! code that has no entry. Following the rest of the crate, errors are strongly typed structs
//! that implement [`Error`](std::error::Error).
//!
//! # Logging
//! Replacements caused by colliding hash codes and clears are reported at the trace level through
//! the [`log`] facade. No logger is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
