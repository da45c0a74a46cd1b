//! Constant values for the curvegen workspace
//!
//! This crate has no dependencies and is always `no_std`.

#![no_std]
#![deny(missing_docs)]

pub mod hash;
pub mod nist;
pub mod search;
