//! Bounded big-integer modular arithmetic
//!
//! Values are `crypto-bigint` 2048-bit unsigned integers. Any modulus that fits
//! in [`FieldInt`] is accepted; products are formed at double width before
//! reduction.

use alloc::vec::Vec;
use crypto_bigint::{Encoding, U2048};

use crate::error::{validate, Error, Result};

mod modulus;
pub use modulus::Modulus;

/// Integer type used for field elements and moduli
pub type FieldInt = U2048;

/// Width of [`FieldInt`] in bytes
pub const FIELD_INT_BYTES: usize = 256;

/// Largest supported modulus, in bits
pub const MAX_MODULUS_BITS: usize = FieldInt::BITS;

/// Drop leading zero bytes from a big-endian byte string
pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Interpret a big-endian byte string as an unsigned integer
///
/// Leading zero bytes are ignored; the remaining significant bytes must fit in
/// [`FIELD_INT_BYTES`].
pub fn field_int_from_be_bytes(bytes: &[u8]) -> Result<FieldInt> {
    let significant = strip_leading_zeros(bytes);
    validate::max_length("big-endian integer", significant.len(), FIELD_INT_BYTES)?;

    let mut padded = [0u8; FIELD_INT_BYTES];
    padded[FIELD_INT_BYTES - significant.len()..].copy_from_slice(significant);
    Ok(FieldInt::from_be_slice(&padded))
}

/// Minimal big-endian encoding of an integer (zero encodes as the empty string)
pub fn field_int_to_be_bytes(value: &FieldInt) -> Vec<u8> {
    strip_leading_zeros(&value.to_be_bytes()).to_vec()
}

/// Parse an unsigned integer from big-endian hex
pub fn field_int_from_hex(hex_str: &str) -> Result<FieldInt> {
    let bytes = hex::decode(hex_str)
        .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;
    field_int_from_be_bytes(&bytes)
}

/// Upper-case hex of the minimal big-endian encoding
pub fn field_int_to_hex(value: &FieldInt) -> alloc::string::String {
    hex::encode_upper(field_int_to_be_bytes(value))
}

/// Number of significant bits (zero has bit length 0)
pub fn bit_length(value: &FieldInt) -> usize {
    let bytes = value.to_be_bytes();
    let significant = strip_leading_zeros(&bytes);
    match significant.first() {
        Some(&top) => significant.len() * 8 - top.leading_zeros() as usize,
        None => 0,
    }
}

/// Number of trailing zero bits (zero yields the full width)
pub(crate) fn trailing_zeros(value: &FieldInt) -> usize {
    let bytes = value.to_be_bytes();
    let mut count = 0;
    for &byte in bytes.iter().rev() {
        if byte != 0 {
            return count + byte.trailing_zeros() as usize;
        }
        count += 8;
    }
    count
}
