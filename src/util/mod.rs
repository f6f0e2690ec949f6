pub mod result;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod panic;
