//! Seeds and their big-endian integer arithmetic
//!
//! A seed is hashed as its exact bytes, but offsets are applied to it as an
//! unsigned big-endian integer. Arithmetic results always use the minimal
//! encoding: leading zero bytes are dropped, and zero is the empty string.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::arith::strip_leading_zeros;
use crate::error::{Error, Result};

/// An arbitrary-length seed
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Seed(Vec<u8>);

impl Seed {
    /// Wrap raw seed bytes as given
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode a seed from hex, keeping any leading zero bytes
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        hex::decode(hex_str)
            .map(Self)
            .map_err(|_| Error::param("seed", "Invalid hexadecimal string"))
    }

    /// Lower-case hex of the exact seed bytes
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// The exact seed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }


    /// seed + value, minimally encoded
    pub fn add_u64(&self, value: u64) -> Seed {
        let mut out = strip_leading_zeros(&self.0).to_vec();
        let mut carry = value;
        let mut idx = out.len();

        while carry != 0 {
            if idx == 0 {
                out.insert(0, carry as u8);
                carry >>= 8;
                continue;
            }
            idx -= 1;
            let sum = out[idx] as u64 + (carry & 0xFF);
            out[idx] = sum as u8;
            carry = (carry >> 8) + (sum >> 8);
        }

        Seed(out)
    }

    /// seed - value, minimally encoded, or `None` if the result would be negative
    pub fn checked_sub_u64(&self, value: u64) -> Option<Seed> {
        let mut out = strip_leading_zeros(&self.0).to_vec();
        let mut borrow = value;
        let mut idx = out.len();

        while borrow != 0 {
            if idx == 0 {
                return None;
            }
            idx -= 1;
            let low = borrow & 0xFF;
            let current = out[idx] as u64;
            if current >= low {
                out[idx] = (current - low) as u8;
                borrow >>= 8;
            } else {
                out[idx] = (current + 0x100 - low) as u8;
                borrow = (borrow >> 8) + 1;
            }
        }

        Some(Seed(strip_leading_zeros(&out).to_vec()))
    }

    /// seed + delta for a signed delta, or `None` below zero
    pub fn checked_offset(&self, delta: i64) -> Option<Seed> {
        if delta >= 0 {
            Some(self.add_u64(delta.unsigned_abs()))
        } else {
            self.checked_sub_u64(delta.unsigned_abs())
        }
    }
}

impl From<Vec<u8>> for Seed {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Seed {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
