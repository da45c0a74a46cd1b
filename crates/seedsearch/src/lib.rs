//! Seed neighbourhood search
//!
//! Evaluates every seed in `[start - margin, start + margin]` with the curve
//! generator and reports which ones yield usable coefficients. Seeds are
//! independent, so candidates are evaluated on the rayon pool and collected
//! back in offset order before reporting.

pub mod config;
pub mod error;
pub mod report;
pub mod search;

pub use config::{Args, SearchConfig};
pub use error::{Result, SearchError};
pub use report::Reporter;
pub use search::{search, Candidate, SearchSummary};
