//! Error handling for curve generation

use alloc::borrow::Cow;

use core::fmt;

/// The error type for curve generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The value has no inverse modulo p (it shares a factor with p)
    NoInverse {
        /// Value that could not be inverted
        context: &'static str,
    },

    /// The value is a quadratic non-residue modulo p
    NoSquareRoot {
        /// Value whose root was requested
        context: &'static str,
    },

    /// 4a³ + 27b² ≡ 0 (mod p): the curve equation is singular
    SingularCurve,
}

/// The three ways a seed can be rejected by the generation pipeline
///
/// Each one is definitive for its (p, a, seed) triple; the only remedy is a
/// different seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// r is not invertible modulo p
    NoInverse,
    /// a³·r⁻¹ is a quadratic non-residue modulo p
    NoSquareRoot,
    /// The resulting curve is singular
    SingularCurve,
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Classify this error as a seed rejection, if it is one
    ///
    /// Returns `None` for errors caused by invalid caller input.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Error::NoInverse { .. } => Some(Rejection::NoInverse),
            Error::NoSquareRoot { .. } => Some(Rejection::NoSquareRoot),
            Error::SingularCurve => Some(Rejection::SingularCurve),
            _ => None,
        }
    }

    /// Whether a different seed could succeed where this one failed
    pub fn is_rejection(&self) -> bool {
        self.rejection().is_some()
    }
}

/// Result type for curve generation operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected at most {}, got {}",
                    context, expected, actual
                )
            }
            Error::NoInverse { context } => {
                write!(f, "bad seed: error computing {}-inverse", context)
            }
            Error::NoSquareRoot { context } => {
                write!(f, "bad seed: error computing {}", context)
            }
            Error::SingularCurve => write!(f, "bad seed: 4a^3 + 27b^2 ≡ 0 (mod p)"),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rejection::NoInverse => "no inverse",
            Rejection::NoSquareRoot => "no square root",
            Rejection::SingularCurve => "singular curve",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
