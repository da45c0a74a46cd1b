//! Arithmetic modulo a caller-supplied modulus

use crypto_bigint::{Encoding, NonZero};

use super::{bit_length, strip_leading_zeros, trailing_zeros, FieldInt};
use crate::error::{validate, Error, Result};

/// Non-residue candidates tried by Tonelli-Shanks before giving up.
/// For a prime modulus the first one is always tiny; exhausting the bound
/// means the modulus is composite.
const NON_RESIDUE_SEARCH_LIMIT: u64 = 4096;

/// A modulus p with 2 <= p < 2^2048
///
/// Operations accept unreduced operands and always return values in [0, p).
/// p is not required to be prime, but square roots are only guaranteed to be
/// found when it is.
#[derive(Clone, Debug)]
pub struct Modulus {
    value: FieldInt,
    divisor: NonZero<FieldInt>,
    bits: usize,
}

impl Modulus {
    /// Validate and wrap a modulus
    pub fn new(value: FieldInt) -> Result<Self> {
        let bits = bit_length(&value);
        validate::parameter(bits >= 2, "p", "modulus must be at least 2")?;
        let divisor = Option::<NonZero<FieldInt>>::from(NonZero::new(value))
            .ok_or_else(|| Error::param("p", "modulus must be non-zero"))?;

        Ok(Self {
            value,
            divisor,
            bits,
        })
    }

    /// The modulus itself
    pub fn value(&self) -> &FieldInt {
        &self.value
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// x mod p
    pub fn reduce(&self, x: &FieldInt) -> FieldInt {
        if *x < self.value {
            return *x;
        }
        x.rem(&self.divisor)
    }

    /// (a + b) mod p
    pub fn add(&self, a: &FieldInt, b: &FieldInt) -> FieldInt {
        self.reduce(a).add_mod(&self.reduce(b), &self.value)
    }

    /// (a - b) mod p
    pub fn sub(&self, a: &FieldInt, b: &FieldInt) -> FieldInt {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a.wrapping_sub(&b)
        } else {
            a.wrapping_add(&self.value.wrapping_sub(&b))
        }
    }

    /// -a mod p
    pub fn neg(&self, a: &FieldInt) -> FieldInt {
        self.sub(&FieldInt::ZERO, a)
    }

    /// (a · b) mod p
    ///
    /// The product is formed at double width, so any modulus that fits in
    /// [`FieldInt`] is supported.
    pub fn mul(&self, a: &FieldInt, b: &FieldInt) -> FieldInt {
        let (lo, hi) = self.reduce(a).mul_wide(&self.reduce(b));
        if hi == FieldInt::ZERO {
            return self.reduce(&lo);
        }
        let (remainder, _) = FieldInt::const_rem_wide((lo, hi), &self.value);
        remainder
    }

    /// a² mod p
    pub fn square(&self, a: &FieldInt) -> FieldInt {
        self.mul(a, a)
    }

    /// (a · k) mod p for a small constant k
    pub fn mul_small(&self, a: &FieldInt, k: u64) -> FieldInt {
        self.mul(a, &FieldInt::from_u64(k))
    }

    /// base^exp mod p by left-to-right square-and-multiply
    pub fn pow(&self, base: &FieldInt, exp: &FieldInt) -> FieldInt {
        let base = self.reduce(base);
        let exp_bytes = exp.to_be_bytes();

        let mut result = self.reduce(&FieldInt::ONE);
        for &byte in strip_leading_zeros(&exp_bytes) {
            for bit in (0..8).rev() {
                result = self.square(&result);
                if (byte >> bit) & 1 == 1 {
                    result = self.mul(&result, &base);
                }
            }
        }
        result
    }

    /// a⁻¹ mod p, or `None` when gcd(a, p) ≠ 1
    ///
    /// Extended Euclid with the Bézout coefficient of `a` kept reduced mod p,
    /// so it is correct for composite moduli as well.
    pub fn invert(&self, a: &FieldInt) -> Option<FieldInt> {
        let mut r0 = self.reduce(a);
        let mut r1 = self.value;
        let mut s0 = FieldInt::ONE;
        let mut s1 = FieldInt::ZERO;

        // r_i ≡ s_i · a (mod p) holds for both rows throughout.
        while r1 != FieldInt::ZERO {
            let divisor = Option::<NonZero<FieldInt>>::from(NonZero::new(r1))?;
            let (quotient, remainder) = r0.div_rem(&divisor);
            r0 = r1;
            r1 = remainder;

            let s2 = self.sub(&s0, &self.mul(&quotient, &s1));
            s0 = s1;
            s1 = s2;
        }

        (r0 == FieldInt::ONE).then_some(s0)
    }

    /// Euler's criterion: whether a is a square mod p (zero counts as a square)
    pub fn is_square(&self, a: &FieldInt) -> bool {
        let a = self.reduce(a);
        if a == FieldInt::ZERO || self.value == FieldInt::from_u8(2) {
            return true;
        }
        let half = self.value.wrapping_sub(&FieldInt::ONE).shr_vartime(1);
        self.pow(&a, &half) == FieldInt::ONE
    }

    /// A square root of a mod p, or `None` if a is a non-residue
    ///
    /// Uses a^((p+1)/4) when p ≡ 3 (mod 4) and Tonelli-Shanks otherwise.
    /// The result is always checked by squaring it.
    pub fn sqrt(&self, a: &FieldInt) -> Option<FieldInt> {
        let a = self.reduce(a);
        if a == FieldInt::ZERO {
            return Some(FieldInt::ZERO);
        }
        if self.value == FieldInt::from_u8(2) {
            return Some(a);
        }
        if !self.is_square(&a) {
            return None;
        }

        let root = if self.low_bits(2) == 3 {
            // (p + 1) / 4 without overflowing at full width
            let exp = self.value.shr_vartime(2).wrapping_add(&FieldInt::ONE);
            self.pow(&a, &exp)
        } else {
            self.tonelli_shanks(&a)?
        };

        (self.square(&root) == a).then_some(root)
    }

    fn low_bits(&self, count: u32) -> u8 {
        self.value.to_be_bytes()[super::FIELD_INT_BYTES - 1] & ((1u8 << count) - 1)
    }

    fn tonelli_shanks(&self, a: &FieldInt) -> Option<FieldInt> {
        let p_minus_one = self.value.wrapping_sub(&FieldInt::ONE);

        // p - 1 = q · 2^s with q odd
        let s = trailing_zeros(&p_minus_one);
        let q = p_minus_one.shr_vartime(s);

        let z = self.find_non_residue()?;
        let mut m = s;
        let mut c = self.pow(&z, &q);
        let mut t = self.pow(a, &q);
        let mut root = self.pow(a, &q.wrapping_add(&FieldInt::ONE).shr_vartime(1));

        while t != FieldInt::ONE {
            // least i in (0, m) with t^(2^i) = 1
            let mut i = 0;
            let mut t_pow = t;
            while t_pow != FieldInt::ONE {
                t_pow = self.square(&t_pow);
                i += 1;
                if i >= m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = self.square(&b);
            }

            m = i;
            c = self.square(&b);
            t = self.mul(&t, &c);
            root = self.mul(&root, &b);
        }

        Some(root)
    }

    fn find_non_residue(&self) -> Option<FieldInt> {
        let p_minus_one = self.value.wrapping_sub(&FieldInt::ONE);
        let half = p_minus_one.shr_vartime(1);

        for candidate in 2..NON_RESIDUE_SEARCH_LIMIT {
            let z = FieldInt::from_u64(candidate);
            if z >= self.value {
                break;
            }
            if self.pow(&z, &half) == p_minus_one {
                return Some(z);
            }
        }
        None
    }
}
