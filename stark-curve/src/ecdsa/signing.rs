//! Support for signing STARK curve signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Check the private key d ∈ [1, n-1].
//! 2. Check the message hash h < 2^251.
//! 3. Check the nonce k ∈ [1, n-1].
//! 4. Set R ← kG and r ← x(R) mod n.
//! 5. If r = 0 or r ≥ 2^251, fail: the caller retries with a fresh k.
//! 6. Set s ← k⁻¹(h + r·d) mod n.
//! 7. If s = 0, fail: the caller retries with a fresh k.
//! 8. Return (r, s).
//! ```

#![allow(non_snake_case)]

use super::{Signature, VerifyingKey, message_hash_scalar, nonzero_scalar};
use crate::{AffinePoint, Error, ProjectivePoint, Result, Scalar, U256};
use core::fmt::{self, Debug};
use elliptic_curve::ops::MulByGenerator;
use rand_core::CryptoRngCore;
use signature::KeypairRef;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "rfc6979")]
use {super::generate_k, signature::hazmat::PrehashSigner};

/// STARK curve secret key used for signing message hashes and producing
/// signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following trait which is the
/// primary API for signing:
///
/// - [`PrehashSigner`]: sign the raw 32-byte big endian message hash,
///   deriving the nonce per [RFC 6979]
///
/// [`PrehashSigner`]: signature::hazmat::PrehashSigner
/// [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979
#[derive(Clone)]
pub struct SigningKey {
    /// Secret scalar `d ∈ [1, n-1]`.
    secret_scalar: Scalar,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a random signing key.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        loop {
            let candidate = <Scalar as ff::Field>::random(&mut *rng);
            if let Ok(signing_key) = Self::from_scalar(candidate) {
                return signing_key;
            }
        }
    }

    /// Create a signing key from an integer private key.
    ///
    /// Returns [`Error::InvalidScalar`] unless it lies in `[1, n - 1]`.
    pub fn from_uint(private_key: &U256) -> Result<Self> {
        Self::from_scalar(nonzero_scalar(private_key)?)
    }

    /// Parse signing key from big endian-encoded bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Self::from_uint(&U256::from_be_slice(bytes))
    }

    /// Create a signing key from a non-zero scalar.
    pub fn from_scalar(secret_scalar: Scalar) -> Result<Self> {
        if bool::from(secret_scalar.is_zero()) {
            return Err(Error::InvalidScalar);
        }

        let public_point = AffinePoint::from(ProjectivePoint::mul_by_generator(&secret_scalar));
        let verifying_key = VerifyingKey::from_affine(public_point)?;

        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Serialize as bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.secret_scalar.to_bytes()
    }

    /// Borrow the secret [`Scalar`] value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &Scalar {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign `msg_hash` with the caller-supplied nonce `k`.
    ///
    /// # ⚠️ Warning
    ///
    /// Reusing `k` across messages, or using a predictable `k`, reveals the
    /// private key.
    pub fn sign_prehash_with_nonce(&self, msg_hash: &U256, k: &U256) -> Result<Signature> {
        sign_prehash_with_nonce(&self.secret_scalar, msg_hash, k)
    }

    /// Sign `msg_hash` with a nonce derived from the key and message hash.
    ///
    /// Nonces come from [`generate_k`] seeded with nothing, then `1`, `2`, ...
    /// until one yields a usable signature.
    #[cfg(feature = "rfc6979")]
    pub fn sign_prehash_deterministic(&self, msg_hash: &U256) -> Result<Signature> {
        let private_key = self.secret_scalar.to_uint();
        let mut seed: Option<U256> = None;

        loop {
            let k = generate_k(msg_hash, &private_key, seed.as_ref());

            match sign_prehash_with_nonce(&self.secret_scalar, msg_hash, &k.to_uint()) {
                Err(Error::ZeroOrOutOfRangeR | Error::ZeroS) => {
                    seed = Some(seed.map_or(U256::ONE, |seed| seed.wrapping_add(&U256::ONE)));
                }
                result => return result,
            }
        }
    }
}

/// Signing with an explicit nonce; see the module documentation for the
/// numbered steps.
pub(super) fn sign_prehash_with_nonce(d: &Scalar, msg_hash: &U256, k: &U256) -> Result<Signature> {
    // 1. Check the private key d ∈ [1, n-1].
    if bool::from(d.is_zero()) {
        return Err(Error::InvalidScalar);
    }

    // 2. Check the message hash h < 2^251.
    let h = message_hash_scalar(msg_hash)?;

    // 3. Check the nonce k ∈ [1, n-1].
    let k = nonzero_scalar(k)?;

    // 4. Set R ← kG and r ← x(R) mod n.
    let R = AffinePoint::from(ProjectivePoint::mul_by_generator(&k));
    let r = match R.x() {
        Some(x) => Scalar::reduce_field_element(&x),
        None => return Err(Error::ZeroOrOutOfRangeR),
    };

    // 5. If r = 0 or r ≥ 2^251, fail.
    if bool::from(r.is_zero() | !r.is_element_bounded()) {
        return Err(Error::ZeroOrOutOfRangeR);
    }

    // 6. Set s ← k⁻¹(h + r·d) mod n.
    let s = k.invert_unchecked() * (h + r * d);

    // 7. If s = 0, fail.
    if bool::from(s.is_zero()) {
        return Err(Error::ZeroS);
    }

    // 8. Return (r, s).
    Signature::from_scalars(r, s)
}

//
// `*Signer` trait impls
//

#[cfg(feature = "rfc6979")]
impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        let prehash = <[u8; 32]>::try_from(prehash).map_err(|_| signature::Error::new())?;
        Ok(self.sign_prehash_deterministic(&U256::from_be_slice(&prehash))?)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_scalar.ct_eq(&other.secret_scalar)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_scalar.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

/// Constant-time comparison
impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}
