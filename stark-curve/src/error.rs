//! Error types.

use core::fmt;

/// Error type.
///
/// Each variant names the check that rejected the input. Arithmetic and
/// signing failures are never corrected silently.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A private key or nonce is zero or not less than the group order.
    InvalidScalar,

    /// A message hash is not less than `2^251`.
    InvalidMessageHash,

    /// An integer does not fit in the base field.
    FieldOverflow,

    /// Inversion of zero was requested.
    DivisionByZero,

    /// The signature component `r` came out zero or not less than `2^251`.
    ///
    /// Sign again with a fresh nonce.
    ZeroOrOutOfRangeR,

    /// The signature component `s` came out zero.
    ///
    /// Sign again with a fresh nonce.
    ZeroS,

    /// Coordinates do not describe a point on the curve.
    PointNotOnCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidScalar => "scalar is zero or not less than the group order",
            Error::InvalidMessageHash => "message hash is out of range",
            Error::FieldOverflow => "value is not less than the field modulus",
            Error::DivisionByZero => "division by zero",
            Error::ZeroOrOutOfRangeR => "signature r is zero or out of range",
            Error::ZeroS => "signature s is zero",
            Error::PointNotOnCurve => "point is not on the curve",
        })
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "ecdsa")]
impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
