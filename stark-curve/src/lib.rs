#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Overview
//!
//! The STARK curve is the short Weierstrass curve `y² = x³ + x + β` over the
//! 252-bit prime field `p = 2^251 + 17·2^192 + 1`. Its group has prime order
//! `n` and cofactor 1.
//!
//! This crate provides:
//!
//! - [`get_public_key`]: derive the x-coordinate public key of a private key
//! - [`pedersen_hash`]: the fixed-point Pedersen hash of two field elements
//! - [`sign`] / [`verify`]: ECDSA-style signatures over the curve
//! - [`messages`]: order and transfer message hashes of the StarkEx
//!   perpetual protocol, built on [`pedersen_hash`]
//!
//! All operations are pure functions of their inputs and are safe to call
//! concurrently.

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod arithmetic;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

#[cfg(feature = "messages")]
pub mod messages;

#[cfg(feature = "pedersen")]
pub mod pedersen;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

mod error;

pub use bigint::{self, U256};
pub use elliptic_curve;
pub use ff;
pub use subtle;

pub use crate::{
    arithmetic::{AffinePoint, ProjectivePoint, field::FieldElement, scalar::Scalar},
    error::{Error, Result},
};

use elliptic_curve::{FieldBytesEncoding, consts::U32};

#[cfg(feature = "ecdsa")]
pub use crate::ecdsa::{Signature, get_public_key, sign, verify};

#[cfg(feature = "pedersen")]
pub use crate::pedersen::pedersen_hash;

/// Modulus of the STARK curve's base field serialized as hexadecimal.
///
/// ```text
/// p = 2^251 + 17·2^192 + 1
/// ```
const MODULUS_HEX: &str = "0800000000000011000000000000000000000000000000000000000000000001";

/// Order of the STARK curve's elliptic curve group (i.e. scalar modulus)
/// serialized as hexadecimal.
///
/// ```text
/// n = 0800000000000010 FFFFFFFFFFFFFFFF B781126DCAE7B232 1E66A241ADC64D2F
/// ```
const ORDER_HEX: &str = "0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f";

/// Exclusive upper bound (`2^251`) on message hashes and signature `r` values.
pub const ELEMENT_UPPER_BOUND: U256 =
    U256::from_be_hex("0800000000000000000000000000000000000000000000000000000000000000");

/// STARK elliptic curve.
///
/// Its equation is `y² = x³ + αx + β` over a 252-bit prime field where:
///
/// ```text
/// α = 1
/// β = 0x06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct StarkCurve;

impl StarkCurve {
    /// Modulus of the base field.
    pub const MODULUS: U256 = U256::from_be_hex(MODULUS_HEX);

    /// Order of the elliptic curve group (i.e. scalar modulus).
    pub const ORDER: U256 = U256::from_be_hex(ORDER_HEX);
}

impl elliptic_curve::Curve for StarkCurve {
    /// 252-bit field elements are serialized as 32 bytes.
    type FieldBytesSize = U32;

    /// 256-bit integer type used for internally representing field elements.
    type Uint = U256;

    /// Order of the STARK curve's elliptic curve group (i.e. scalar modulus).
    const ORDER: U256 = U256::from_be_hex(ORDER_HEX);
}

impl elliptic_curve::PrimeCurve for StarkCurve {}

/// STARK curve field element serialized as bytes.
///
/// Byte array containing a serialized field element value (base field or
/// scalar).
pub type FieldBytes = elliptic_curve::FieldBytes<StarkCurve>;

/// SEC1-encoded STARK curve point.
pub type EncodedPoint = elliptic_curve::sec1::EncodedPoint<StarkCurve>;

/// Non-zero STARK curve scalar field element.
pub type NonZeroScalar = elliptic_curve::NonZeroScalar<StarkCurve>;

impl FieldBytesEncoding<StarkCurve> for U256 {}
