//! Verifiable curve coefficient generation primitives
//!
//! This crate implements the seed-driven procedure used to derive the NIST
//! prime-curve coefficient `b` from a published seed: a SHA-1 chain expands
//! the seed into a value `r` of the field's bit length, and `b` is solved from
//! `r·b² ≡ a³ (mod p)`, rejecting singular curves.
//!
//! Everything here is a pure function of its inputs. There is no I/O, no
//! shared state and no logging, so callers may evaluate any number of seeds
//! in parallel.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Rejection, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha1};

// Bounded big-integer modular arithmetic
pub mod arith;
pub use arith::{FieldInt, Modulus};

// Seed expansion and coefficient solving
pub mod curve_gen;
pub use curve_gen::{
    default_a, expand_seed, generate, generate_with_default_a, CurveCoefficients,
    CurveGenerator, Seed, SeedExpansion,
};
