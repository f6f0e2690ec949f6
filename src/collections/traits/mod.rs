//! Traits shared by collections with similar behaviour.

pub mod set;
