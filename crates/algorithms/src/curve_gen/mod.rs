//! Seed-driven curve coefficient generation
//!
//! Implements the prime-field curve generation of ANSI X9.62 (1998) Annex
//! A.3.3, the procedure behind the NIST P-curves:
//!
//! 1. expand the seed into r with L = bitlen(p) bits ([`expand_seed`]),
//! 2. solve r·b² ≡ a³ (mod p) for b ([`solve`]),
//! 3. reject the seed if 4a³ + 27b² ≡ 0 (mod p) ([`check_nonsingular`]).
//!
//! The pipeline is strictly linear. Each step either hands its output to the
//! next or fails with one of the three [`Rejection`](crate::Rejection) kinds,
//! which are final for that (p, a, seed) triple.

mod expand;
mod seed;
mod singular;
mod solve;

pub use expand::{expand_seed, SeedExpansion};
pub use seed::Seed;
pub use singular::check_nonsingular;
pub use solve::{solve, ModularSolution};

use curvegen_params::search::DEFAULT_A_OFFSET;

use crate::arith::{FieldInt, Modulus};
use crate::error::Result;

/// Successful generation output
///
/// `b1` and `b2 = p - b1` both satisfy r·b² ≡ a³ (mod p); which one a
/// standard picked is outside the procedure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveCoefficients {
    r: FieldInt,
    b1: FieldInt,
    b2: FieldInt,
}

impl CurveCoefficients {
    /// Seed-derived value r
    pub fn r(&self) -> &FieldInt {
        &self.r
    }

    /// First root of r·b² ≡ a³
    pub fn b1(&self) -> &FieldInt {
        &self.b1
    }

    /// Second root, p - b1
    pub fn b2(&self) -> &FieldInt {
        &self.b2
    }

    /// Whether `b` is one of the two roots
    pub fn contains_b(&self, b: &FieldInt) -> bool {
        self.b1 == *b || self.b2 == *b
    }

    /// Check r·b1² ≡ r·b2² ≡ a³ (mod p) and b1 + b2 = p
    pub fn satisfies(&self, modulus: &Modulus, a: &FieldInt) -> bool {
        let a_cubed = modulus.pow(a, &FieldInt::from_u8(3));
        let lhs1 = modulus.mul(&self.r, &modulus.square(&self.b1));
        let lhs2 = modulus.mul(&self.r, &modulus.square(&self.b2));
        lhs1 == a_cubed
            && lhs2 == a_cubed
            && self.b1.wrapping_add(&self.b2) == *modulus.value()
    }
}

/// Generation for one fixed (p, a), reusable across many seeds
#[derive(Clone, Debug)]
pub struct CurveGenerator {
    modulus: Modulus,
    a: FieldInt,
}

impl CurveGenerator {
    /// Validate p once for all subsequent seeds
    pub fn new(p: &FieldInt, a: &FieldInt) -> Result<Self> {
        Ok(Self {
            modulus: Modulus::new(*p)?,
            a: *a,
        })
    }

    /// Generator with a = p - 3
    pub fn with_default_a(p: &FieldInt) -> Result<Self> {
        let modulus = Modulus::new(*p)?;
        let a = default_a(&modulus);
        Ok(Self { modulus, a })
    }

    /// The validated modulus
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Coefficient a as supplied
    pub fn a(&self) -> &FieldInt {
        &self.a
    }

    /// Run the pipeline for one seed
    pub fn generate(&self, seed: &Seed) -> Result<CurveCoefficients> {
        let expansion = expand_seed(seed, self.modulus.bits())?;
        let r = expansion.to_field_int()?;

        let solution = solve(&self.modulus, &self.a, &r)?;
        solution.check_nonsingular(&self.modulus)?;

        Ok(CurveCoefficients {
            r,
            b1: solution.b1,
            b2: solution.b2,
        })
    }
}

/// The conventional coefficient a = p - 3 (reduced mod p)
pub fn default_a(modulus: &Modulus) -> FieldInt {
    modulus.neg(&FieldInt::from_u8(DEFAULT_A_OFFSET))
}

/// Derive curve coefficients for (p, a, seed)
pub fn generate(p: &FieldInt, a: &FieldInt, seed: &Seed) -> Result<CurveCoefficients> {
    CurveGenerator::new(p, a)?.generate(seed)
}

/// Derive curve coefficients for (p, p - 3, seed)
pub fn generate_with_default_a(p: &FieldInt, seed: &Seed) -> Result<CurveCoefficients> {
    CurveGenerator::with_default_a(p)?.generate(seed)
}
