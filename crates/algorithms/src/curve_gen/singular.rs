//! Discriminant check for y² = x³ + ax + b

use crate::arith::{FieldInt, Modulus};
use crate::error::{Error, Result};

/// Reject the curve if 4a³ + 27b² ≡ 0 (mod p)
pub fn check_nonsingular(modulus: &Modulus, a_cubed: &FieldInt, b_squared: &FieldInt) -> Result<()> {
    let discriminant = modulus.add(
        &modulus.mul_small(a_cubed, 4),
        &modulus.mul_small(b_squared, 27),
    );
    if discriminant == FieldInt::ZERO {
        return Err(Error::SingularCurve);
    }
    Ok(())
}
