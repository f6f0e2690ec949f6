//! Collections which use a caller-supplied hash function as the sole identity of their keys.
//!
//! [`HashMap`] and [`HashSet`] each hold a [`HashPolicy`] and never compare keys with [`Eq`].
//! Both implement [`HashCollection`] to expose their hash function.

mod policy;
#[cfg(any(feature = "map", feature = "set"))]
mod store;

#[cfg(feature = "map")]
pub mod map;
#[cfg(feature = "set")]
pub mod set;

pub use policy::*;

#[cfg(feature = "map")]
#[doc(inline)]
pub use map::HashMap;
#[cfg(feature = "set")]
#[doc(inline)]
pub use set::HashSet;
