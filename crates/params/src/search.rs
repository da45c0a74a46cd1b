//! Defaults for the seed neighbourhood search

/// Default half-width of the searched seed range
pub const DEFAULT_SEARCH_MARGIN: u32 = 100;

/// Amount subtracted from p to obtain the default coefficient a (a = p - 3)
pub const DEFAULT_A_OFFSET: u8 = 3;
