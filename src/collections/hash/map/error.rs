use derive_more::{Display, Error};

/// Returned when looking up a key whose hash code has no entry in a [`HashMap`](super::HashMap).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No entry exists for the hash code of the provided key!")]
pub struct KeyNotFound;
