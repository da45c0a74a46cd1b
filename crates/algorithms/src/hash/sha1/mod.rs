//! SHA-1 hash function
//!
//! FIPS 180-4 SHA-1. The function is broken for collision resistance and is
//! kept only because the published curve seeds were expanded with it.

use crate::hash::HashFunction;
use byteorder::{BigEndian, ByteOrder};
use curvegen_params::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};
use zeroize::Zeroize;

/// Initial hash values for SHA-1
const H0: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of twenty rounds
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// SHA-1 digest
pub type Sha1Digest = [u8; SHA1_OUTPUT_SIZE];

/// SHA-1 hash function
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    /// Chaining state
    state: [u32; 5],
    /// Pending partial block
    buffer: [u8; SHA1_BLOCK_SIZE],
    /// Bytes held in `buffer`
    buffered: usize,
    /// Total message length in bytes
    length: u64,
}

impl Sha1 {
    /// Creates a new SHA-1 hasher
    pub fn new() -> Self {
        Self {
            state: H0,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffered: 0,
            length: 0,
        }
    }

    fn compress(state: &mut [u32; 5], block: &[u8]) {
        let mut w = [0u32; 80];
        for (i, word) in w.iter_mut().take(16).enumerate() {
            *word = BigEndian::read_u32(&block[i * 4..]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *state;
        for (i, &wi) in w.iter().enumerate() {
            let f = match i / 20 {
                0 => (b & c) | (!b & d),
                2 => (b & c) | (b & d) | (c & d),
                _ => b ^ c ^ d,
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(K[i / 20])
                .wrapping_add(wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d, e]) {
            *s = s.wrapping_add(v);
        }
    }

    fn absorb(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = core::cmp::min(SHA1_BLOCK_SIZE - self.buffered, data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < SHA1_BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            Self::compress(&mut self.state, &block);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(SHA1_BLOCK_SIZE);
        for block in &mut blocks {
            Self::compress(&mut self.state, block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    fn pad_and_finish(&mut self) -> Sha1Digest {
        let bit_length = self.length.wrapping_mul(8);

        let mut block = [0u8; SHA1_BLOCK_SIZE];
        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] = 0x80;

        // No room left for the 64-bit length: flush and start a fresh block.
        if self.buffered + 1 > SHA1_BLOCK_SIZE - 8 {
            Self::compress(&mut self.state, &block);
            block = [0u8; SHA1_BLOCK_SIZE];
        }

        BigEndian::write_u64(&mut block[SHA1_BLOCK_SIZE - 8..], bit_length);
        Self::compress(&mut self.state, &block);

        let mut digest = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut digest);
        digest
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashFunction for Sha1 {
    type Output = Sha1Digest;

    fn new() -> Self {
        Sha1::new()
    }

    fn update(&mut self, data: &[u8]) -> &mut Self {
        self.absorb(data);
        self
    }

    fn finalize(mut self) -> Self::Output {
        let digest = self.pad_and_finish();
        self.zeroize();
        digest
    }
}
