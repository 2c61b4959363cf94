//! ECDSA signatures over the STARK curve, as used by Starknet and StarkEx.
//!
//! Public keys are the bare x-coordinate of the signer's curve point, and
//! message hashes are integers below `2^251`.
//!
//! ## ⚠️ Nonce hazard
//!
//! [`sign`] takes the per-signature nonce `k` from the caller. Signing two
//! different messages with the same `k`, or with a `k` an attacker can
//! predict, reveals the private key. Prefer
//! [`SigningKey::sign_prehash_deterministic`], which derives `k` from the key
//! and message as described in [RFC 6979].
//!
//! ## Usage
#![cfg_attr(feature = "rfc6979", doc = "```")]
#![cfg_attr(not(feature = "rfc6979"), doc = "```ignore")]
//! use stark_curve::{U256, ecdsa::{SigningKey, VerifyingKey}};
//!
//! let private_key =
//!     U256::from_be_hex("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc");
//! let msg_hash =
//!     U256::from_be_hex("0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f");
//!
//! // Signing
//! let signing_key = SigningKey::from_uint(&private_key)?;
//! let signature = signing_key.sign_prehash_deterministic(&msg_hash)?;
//! let public_key = signing_key.verifying_key().x();
//!
//! // Verifying
//! let verifying_key = VerifyingKey::from_x(&public_key)?;
//! assert!(verifying_key.verify_prehash(&msg_hash, &signature));
//! # Ok::<(), stark_curve::Error>(())
//! ```
//!
//! [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979

#[cfg(feature = "rfc6979")]
mod nonce;
mod signing;
mod verifying;

pub use signature;

#[cfg(feature = "rfc6979")]
pub use self::nonce::generate_k;
pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{ELEMENT_UPPER_BOUND, Error, Result, Scalar, U256};
use core::fmt::{self, Debug};
use signature::SignatureEncoding;

/// STARK curve signature serialized as bytes: `r ‖ s`, each 32 bytes big endian.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// STARK curve signature.
///
/// Both components are non-zero scalars below the group order `n`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    /// Size of an encoded signature in bytes.
    pub const BYTE_SIZE: usize = 64;

    /// Create a [`Signature`] from its `r` and `s` scalars.
    ///
    /// Returns [`Error::InvalidScalar`] if either is zero.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self> {
        if bool::from(r.is_zero() | s.is_zero()) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self { r, s })
    }

    /// Create a [`Signature`] from its `r` and `s` integers.
    ///
    /// Returns [`Error::InvalidScalar`] unless both lie in `[1, n - 1]`.
    pub fn from_uints(r: &U256, s: &U256) -> Result<Self> {
        Self::from_scalars(nonzero_scalar(r)?, nonzero_scalar(s)?)
    }

    /// Parse a signature from a byte array.
    pub fn from_bytes(bytes: &SignatureBytes) -> Result<Self> {
        let (r, s) = bytes.split_at(Self::BYTE_SIZE / 2);
        Self::from_uints(&U256::from_be_slice(r), &U256::from_be_slice(s))
    }

    /// Parse a signature from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SignatureBytes::try_from(bytes)
            .map_err(|_| Error::InvalidScalar)?
            .try_into()
    }

    /// Serialize this signature as bytes.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(Self::BYTE_SIZE / 2);
        r_bytes.copy_from_slice(&self.r.to_bytes());
        s_bytes.copy_from_slice(&self.s.to_bytes());
        ret
    }

    /// The `r` component of this signature.
    pub fn r(&self) -> U256 {
        self.r.to_uint()
    }

    /// The `s` component of this signature.
    pub fn s(&self) -> U256 {
        self.s.to_uint()
    }

    /// Split the signature into its `r` and `s` scalars.
    pub fn split_scalars(&self) -> (Scalar, Scalar) {
        (self.r, self.s)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stark_curve::ecdsa::Signature(")?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

impl TryFrom<SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(&signature)
    }
}

impl TryFrom<&SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: &SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(signature)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes)
    }
}

/// Derives the public key (x-coordinate of `private_key·G`) of a private key.
///
/// Returns [`Error::InvalidScalar`] unless `private_key` lies in `[1, n - 1]`.
pub fn get_public_key(private_key: &U256) -> Result<U256> {
    Ok(SigningKey::from_uint(private_key)?.verifying_key().x())
}

/// Signs `msg_hash` with `private_key` using the caller-supplied nonce `k`.
///
/// # ⚠️ Warning
///
/// `k` must be secret, uniformly random, and never reused: two signatures
/// sharing a nonce reveal the private key. Use
/// [`SigningKey::sign_prehash_deterministic`] unless the nonce is managed
/// elsewhere.
///
/// [`Error::ZeroOrOutOfRangeR`] and [`Error::ZeroS`] mean the nonce produced
/// an unusable signature and the caller must retry with a fresh `k`.
pub fn sign(private_key: &U256, msg_hash: &U256, k: &U256) -> Result<Signature> {
    let secret_scalar = nonzero_scalar(private_key)?;
    signing::sign_prehash_with_nonce(&secret_scalar, msg_hash, k)
}

/// Checks an `(r, s)` signature of `msg_hash` against the x-coordinate
/// `public_key`.
///
/// Malformed inputs (out of range components, a public key with no curve
/// point) yield `false`.
pub fn verify(public_key: &U256, msg_hash: &U256, r: &U256, s: &U256) -> bool {
    let Ok(signature) = Signature::from_uints(r, s) else {
        return false;
    };

    match VerifyingKey::from_x(public_key) {
        Ok(verifying_key) => verifying_key.verify_prehash(msg_hash, &signature),
        Err(_) => false,
    }
}

/// Parses an integer in `[1, n - 1]`.
fn nonzero_scalar(w: &U256) -> Result<Scalar> {
    Option::<Scalar>::from(Scalar::from_uint(w))
        .filter(|scalar| !bool::from(scalar.is_zero()))
        .ok_or(Error::InvalidScalar)
}

/// Parses a message hash, which must be below `2^251`.
fn message_hash_scalar(msg_hash: &U256) -> Result<Scalar> {
    if msg_hash >= &ELEMENT_UPPER_BOUND {
        return Err(Error::InvalidMessageHash);
    }

    Ok(Scalar::reduce(msg_hash))
}

#[cfg(test)]
mod tests {
    use super::{Signature, get_public_key, nonzero_scalar, sign, verify};
    use crate::{
        Error, StarkCurve, U256,
        bigint::Encoding,
        test_vectors::ecdsa::{ECDSA_TEST_VECTORS, RFC6979_TEST_VECTORS},
    };
    use hex_literal::hex;

    #[test]
    fn signature_rejects_zero_components() {
        assert_eq!(
            Signature::from_uints(&U256::ZERO, &U256::ONE),
            Err(Error::InvalidScalar)
        );
        assert_eq!(
            Signature::from_uints(&U256::ONE, &StarkCurve::ORDER),
            Err(Error::InvalidScalar)
        );
    }

    #[test]
    fn signature_bytes() {
        let bytes = hex!(
            "034ffbd2cd71fce104a13e8003bbd4a17aee31371a6fe72eff0efcd195f19ff3"
            "042e2665aca21934bca93eb1d589734759e58d43ee609514f05d608019d2711b"
        );
        let signature = Signature::from_bytes(&bytes).unwrap();
        assert_eq!(
            signature.r(),
            U256::from_be_hex("034ffbd2cd71fce104a13e8003bbd4a17aee31371a6fe72eff0efcd195f19ff3")
        );
        assert_eq!(signature.to_bytes(), bytes);
        assert_eq!(Signature::try_from(&bytes[..]).unwrap(), signature);
        assert!(Signature::try_from(&bytes[1..]).is_err());
    }

    #[test]
    fn explicit_nonce_vectors() {
        for vector in ECDSA_TEST_VECTORS {
            let d = U256::from_be_slice(&vector.d);
            let m = U256::from_be_slice(&vector.m);
            let q_x = U256::from_be_slice(&vector.q_x);

            assert_eq!(get_public_key(&d).unwrap(), q_x);

            let signature = sign(&d, &m, &U256::from_be_slice(&vector.k)).unwrap();
            assert_eq!(signature.r().to_be_bytes(), vector.r);
            assert_eq!(signature.s().to_be_bytes(), vector.s);
            assert!(verify(&q_x, &m, &signature.r(), &signature.s()));
        }
    }

    #[cfg(feature = "rfc6979")]
    #[test]
    fn deterministic_vectors() {
        for vector in RFC6979_TEST_VECTORS {
            let d = U256::from_be_slice(&vector.d);
            let m = U256::from_be_slice(&vector.m);

            let k = super::generate_k(&m, &d, None);
            assert_eq!(k.to_bytes(), vector.k);

            let signing_key = super::SigningKey::from_uint(&d).unwrap();
            let signature = signing_key.sign_prehash_deterministic(&m).unwrap();
            assert_eq!(signature.r().to_be_bytes(), vector.r);
            assert_eq!(signature.s().to_be_bytes(), vector.s);
        }
    }

    #[test]
    fn scalar_range() {
        assert!(nonzero_scalar(&U256::ONE).is_ok());
        assert!(nonzero_scalar(&StarkCurve::ORDER.wrapping_sub(&U256::ONE)).is_ok());
        assert_eq!(nonzero_scalar(&U256::ZERO), Err(Error::InvalidScalar));
        assert_eq!(nonzero_scalar(&StarkCurve::ORDER), Err(Error::InvalidScalar));
    }
}
