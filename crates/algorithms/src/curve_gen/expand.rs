//! SHA-1 seed expansion
//!
//! For a target bit length L the seed is expanded into
//! `W0 || W1 || ... || Ws` where s = ⌊(L - 1) / 160⌋:
//!
//! - `W0` is the last ⌈h/8⌉ bytes of SHA-1(seed), h = L - 160·s, with the
//!   leading `(160 - h) mod 8 + 1` bits cleared,
//! - `Wi` is SHA-1 of the minimal big-endian encoding of seed + i.
//!
//! The mask clears one bit more than h alone would suggest. The published
//! NIST values depend on exactly this, so it must not be "corrected".

use alloc::vec::Vec;

use curvegen_params::hash::{SHA1_OUTPUT_BITS, SHA1_OUTPUT_SIZE};

use super::Seed;
use crate::arith::{field_int_from_be_bytes, FieldInt};
use crate::error::{validate, Result};
use crate::hash::{HashFunction, Sha1};

/// Concatenated hash output for one seed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedExpansion {
    blocks: usize,
    bytes: Vec<u8>,
    bit_length: usize,
}

impl SeedExpansion {
    /// Number of SHA-1 invocations, ⌈L / 160⌉
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// `W0 || ... || Ws` as one big-endian string
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Target bit length L
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Width of the concatenation in bits, always >= L
    pub fn expanded_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// The expansion read as a big-endian integer r
    pub fn to_field_int(&self) -> Result<FieldInt> {
        field_int_from_be_bytes(&self.bytes)
    }
}

/// Expand `seed` into a pseudorandom string covering `bit_length` bits
pub fn expand_seed(seed: &Seed, bit_length: usize) -> Result<SeedExpansion> {
    validate::parameter(bit_length >= 1, "bit_length", "must be at least 1")?;

    let s_count = (bit_length - 1) / SHA1_OUTPUT_BITS;
    let h_bits = bit_length - SHA1_OUTPUT_BITS * s_count;
    let h_bytes = (h_bits + 7) / 8;

    let mut bytes = Vec::with_capacity(h_bytes + s_count * SHA1_OUTPUT_SIZE);

    let mut digest = Sha1::digest(seed.as_bytes());
    let w0 = &mut digest[SHA1_OUTPUT_SIZE - h_bytes..];
    for i in 0..=((SHA1_OUTPUT_BITS - h_bits) % 8) {
        w0[0] &= !(1u8 << (7 - i));
    }
    bytes.extend_from_slice(w0);

    for i in 1..=s_count {
        let next = seed.add_u64(i as u64);
        bytes.extend_from_slice(&Sha1::digest(next.as_bytes()));
    }

    Ok(SeedExpansion {
        blocks: s_count + 1,
        bytes,
        bit_length,
    })
}
