//! Associative collection types keyed by hash codes.
//!
//! # Purpose
//! Rather than relying on [`Hash`](std::hash::Hash) and [`Eq`] implementations, these collections
//! accept a hash function at construction and identify every key purely by the code it produces.
//! This makes it possible to key a map by values which aren't comparable, or to deliberately treat
//! several distinct values as the same key.
//!
//! # Method
//! Each collection wraps an insertion-ordered store keyed by hash code. The store keeps payloads
//! in slots ordered by insertion and finds them through an [`indexmap`] index. Removal empties a
//! slot instead of shifting those after it, and the slots are compacted once most are empty, so
//! every operation stays `O(1)` amortized.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
