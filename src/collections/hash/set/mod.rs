//! A module containing [`HashSet`] and associated types.
//!
//! These types provide owned and borrowed iteration over a set's items. Set operations on two
//! HashSets are provided through the [`Set`](crate::collections::traits::set::Set) trait.
//!
//! As a note, there is no mutable iterator over the items of a set because mutating them in place
//! could change their hash codes without moving them.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;

pub use hash_set::*;
pub use iter::*;
