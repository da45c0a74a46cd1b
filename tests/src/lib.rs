//! Test harness for the curvegen crates
pub mod suites;
