//! Hash function implementations
//!
//! Seed expansion is defined in terms of SHA-1, so that is the only function
//! provided here.

pub mod sha1;

pub use sha1::Sha1;

/// Trait for cryptographic hash functions
pub trait HashFunction {
    /// Fixed-size digest produced by the function
    type Output: AsRef<[u8]> + Copy;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Finalizes the hash computation and returns the digest
    fn finalize(self) -> Self::Output;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Self::Output
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
