//! Error types for the search driver

use thiserror::Error;

/// Errors raised while configuring or running a search
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A hex argument could not be decoded
    #[error("invalid hex for {flag}: {source}")]
    Hex {
        /// Flag carrying the bad value
        flag: &'static str,
        /// Decoder error
        source: hex::FromHexError,
    },

    /// The candidate seed would be negative
    #[error("seed offset {offset} is below zero")]
    SeedUnderflow {
        /// Offset from the start seed
        offset: i64,
    },

    /// Invalid generation input or a rejected seed
    #[error(transparent)]
    Generation(#[from] curvegen_algorithms::Error),
}

impl SearchError {
    /// Whether this error is a per-seed outcome rather than a configuration error
    pub fn is_per_seed(&self) -> bool {
        match self {
            SearchError::SeedUnderflow { .. } => true,
            SearchError::Generation(e) => e.is_rejection(),
            SearchError::Hex { .. } => false,
        }
    }
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
