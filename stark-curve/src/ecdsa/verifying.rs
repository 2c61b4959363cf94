//! Support for verifying STARK curve signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. If r ∉ [1, n-1] or s ∉ [1, n-1] or h ≥ 2^251, return NO.
//! 2. Recover Q from the public key x-coordinate; if none exists, return NO.
//! 3. Set w ← s⁻¹, u1 ← h·w and u2 ← r·w (all mod n).
//! 4. Set P± ← u1·G ± u2·Q. Candidates equal to O are discarded.
//! 5. If x(P+) mod n = r or x(P−) mod n = r, return YES.
//! 6. Return NO.
//! ```
//!
//! A public key names both `Q` and `−Q`, so step 4 evaluates the
//! candidate for each.

use super::{Signature, message_hash_scalar};
use crate::{AffinePoint, Error, FieldElement, ProjectivePoint, Result, Scalar, U256};
use elliptic_curve::ops::MulByGenerator;
use signature::hazmat::PrehashVerifier;

/// STARK curve public key used for verifying signatures are valid for a given
/// message hash.
///
/// ## Usage
///
/// The [`signature`] crate defines the following trait which is the
/// primary API for verifying:
///
/// - [`PrehashVerifier`]: verify a signature over a raw 32-byte big endian
///   message hash
#[derive(Clone, Copy, Debug)]
pub struct VerifyingKey {
    /// Public key: the x-coordinate of the signer's point.
    x: FieldElement,

    /// Curve point for `x`, cached.
    point: AffinePoint,

    /// Projective form of `point`, cached for scalar multiplication.
    q: ProjectivePoint,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a public key x-coordinate.
    ///
    /// Returns [`Error::FieldOverflow`] if `x ≥ p` and
    /// [`Error::PointNotOnCurve`] if no curve point has this x-coordinate.
    pub fn from_x(x: &U256) -> Result<Self> {
        let x = Option::<FieldElement>::from(FieldElement::from_uint(x)).ok_or(Error::FieldOverflow)?;
        let point = AffinePoint::from_x(&x)?;
        let q = point.to_projective()?;
        Ok(Self { x, point, q })
    }

    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns [`Error::PointNotOnCurve`] if the point is the identity or does
    /// not satisfy the curve equation.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        match point {
            AffinePoint::Finite { x, .. } => {
                let q = point.to_projective()?;
                Ok(Self { x, point, q })
            }
            AffinePoint::Infinity => Err(Error::PointNotOnCurve),
        }
    }

    /// The public key as an integer: the x-coordinate of its curve point.
    pub fn x(&self) -> U256 {
        self.x.to_uint()
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Check `signature` over `msg_hash`.
    ///
    /// Any `r ∈ [1, n-1]` is accepted, including `r ∈ [2^251, n)`, which the
    /// Starknet verifier rejects along with `s ≥ 2^251`.
    pub fn verify_prehash(&self, msg_hash: &U256, signature: &Signature) -> bool {
        // 1. r, s ∈ [1, n-1] hold for any `Signature`; check h < 2^251.
        let (r, s) = signature.split_scalars();
        let Ok(h) = message_hash_scalar(msg_hash) else {
            return false;
        };

        // 2. Q was recovered when the key was constructed.

        // 3. Set w ← s⁻¹, u1 ← h·w and u2 ← r·w.
        let w = s.invert_unchecked();
        let u1 = h * w;
        let u2 = r * w;

        // 4. Set P± ← u1·G ± u2·Q.
        let u1_g = ProjectivePoint::mul_by_generator(&u1);
        let u2_q = self.q * u2;

        // 5. Accept if either candidate's x mod n equals r.
        [u1_g + u2_q, u1_g - u2_q]
            .iter()
            .any(|candidate| match AffinePoint::from(candidate).x() {
                Some(x) => Scalar::reduce_field_element(&x) == r,
                None => false,
            })
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        let prehash = <[u8; 32]>::try_from(prehash).map_err(|_| signature::Error::new())?;

        if Self::verify_prehash(self, &U256::from_be_slice(&prehash), signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

//
// Other trait impls
//

/// Keys are equal when they name the same x-coordinate.
impl PartialEq for VerifyingKey {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Eq for VerifyingKey {}

impl From<&VerifyingKey> for AffinePoint {
    fn from(verifying_key: &VerifyingKey) -> AffinePoint {
        verifying_key.point
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::{AffinePoint, Error, StarkCurve, U256};

    #[test]
    fn from_x_rejects_overflow() {
        assert_eq!(
            VerifyingKey::from_x(&StarkCurve::MODULUS),
            Err(Error::FieldOverflow)
        );
    }

    #[test]
    fn from_x_rejects_point_not_on_curve() {
        // x³ + x + β is a non-residue for x = 0
        assert_eq!(
            VerifyingKey::from_x(&U256::ZERO),
            Err(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn from_affine_rejects_identity() {
        assert_eq!(
            VerifyingKey::from_affine(AffinePoint::Infinity),
            Err(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn from_affine_rejects_point_not_on_curve() {
        let g = AffinePoint::GENERATOR;
        let bogus = AffinePoint::Finite {
            x: g.x().unwrap(),
            y: g.y().unwrap().double(),
        };
        assert_eq!(
            VerifyingKey::from_affine(bogus),
            Err(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn both_branches_name_the_same_key() {
        let g = AffinePoint::GENERATOR;
        let from_point = VerifyingKey::from_affine(g).unwrap();
        let from_negation = VerifyingKey::from_affine(-g).unwrap();
        assert_eq!(from_point, from_negation);
        assert_eq!(
            VerifyingKey::from_x(&from_point.x()).unwrap().as_affine(),
            &-g
        );
    }
}
