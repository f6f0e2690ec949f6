//! A module containing [`HashMap`] and associated types.
//!
//! Aside from the map itself, this includes the [`Entry`] type it stores, the [`KeyNotFound`]
//! error returned by lookups and types for owned and borrowed iteration over entries, keys or
//! values in a map.
//!
//! As a note, there is no mutable iterator over entries or keys because a stored key is only kept
//! for enumeration and changing it wouldn't change the hash code it is stored under.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod entry;
mod error;
mod hash_map;
mod iter;
mod tests;

pub use entry::*;
pub use error::*;
pub use hash_map::*;
pub use iter::*;
