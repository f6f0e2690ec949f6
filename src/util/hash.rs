/// A test key which carries its own hash code, allowing collisions to be produced on demand
/// between otherwise distinguishable keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualHash<T> {
    hash: u64,
    value: T,
}

impl<T> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }
}

/// A hash function which returns the code carried by a [`ManualHash`].
pub const fn manual_hash<T>(key: &ManualHash<T>) -> u64 {
    key.hash
}
