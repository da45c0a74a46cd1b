//! # curvegen
//!
//! Verifiable ("nothing-up-my-sleeve") generation of short Weierstrass curve
//! coefficients from a published seed, following the SHA-1 based procedure of
//! ANSI X9.62 / IEEE 1363 that produced the NIST P-curves.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`curvegen-params`]: Published seed vectors and size constants
//! - [`curvegen-algorithms`]: SHA-1, modular arithmetic and the generation pipeline
//! - [`curvegen-seedsearch`]: Seed neighbourhood search (feature `search`)
//!
//! ## Example
//!
//! ```
//! use curvegen::prelude::*;
//!
//! let p = FieldInt::from_be_hex(concat!(
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "0000000000000000fffffffffffffffffffffffffffffffeffffffffffffffff",
//! ));
//! let seed = Seed::from_hex("3045AE6FC8422F64ED579528D38120EAE12196D5").unwrap();
//! let coefficients = generate_with_default_a(&p, &seed).unwrap();
//! assert_eq!(coefficients.b1().wrapping_add(coefficients.b2()), p);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use curvegen_algorithms as algorithms;
pub use curvegen_params as params;

#[cfg(feature = "search")]
pub use curvegen_seedsearch as seedsearch;

/// Common imports for curvegen users
pub mod prelude {
    pub use curvegen_algorithms::arith::{FieldInt, Modulus};
    pub use curvegen_algorithms::curve_gen::{
        expand_seed, generate, generate_with_default_a, CurveCoefficients, CurveGenerator, Seed,
        SeedExpansion,
    };
    pub use curvegen_algorithms::error::{Error, Rejection, Result};
}
