//! Constants for the hash function driving seed expansion

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Output size of SHA-1 in bits
pub const SHA1_OUTPUT_BITS: usize = SHA1_OUTPUT_SIZE * 8;

/// Internal block size of SHA-1 in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;
