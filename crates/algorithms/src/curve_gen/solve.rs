//! Solving r·b² ≡ a³ (mod p) for b

use super::singular::check_nonsingular;
use crate::arith::{FieldInt, Modulus};
use crate::error::{Error, Result};

/// Both roots of r·b² ≡ a³ together with the intermediates the
/// non-singularity check needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModularSolution {
    /// a³ mod p
    pub a_cubed: FieldInt,
    /// a³·r⁻¹ mod p, i.e. b²
    pub b_squared: FieldInt,
    /// The root returned by the square-root routine
    pub b1: FieldInt,
    /// p - b1
    pub b2: FieldInt,
}

impl ModularSolution {
    /// Fail with [`Error::SingularCurve`] if 4a³ + 27b² ≡ 0 (mod p)
    pub fn check_nonsingular(&self, modulus: &Modulus) -> Result<()> {
        check_nonsingular(modulus, &self.a_cubed, &self.b_squared)
    }
}

/// Solve for b given p, a and the seed-derived r
pub fn solve(modulus: &Modulus, a: &FieldInt, r: &FieldInt) -> Result<ModularSolution> {
    let a_cubed = modulus.pow(a, &FieldInt::from_u8(3));
    let r_inv = modulus
        .invert(r)
        .ok_or(Error::NoInverse { context: "r" })?;
    let b_squared = modulus.mul(&a_cubed, &r_inv);

    let b1 = modulus
        .sqrt(&b_squared)
        .ok_or(Error::NoSquareRoot { context: "b" })?;
    let b2 = modulus.value().wrapping_sub(&b1);

    Ok(ModularSolution {
        a_cubed,
        b_squared,
        b1,
        b2,
    })
}
