//! Pedersen hash over the STARK curve.
//!
//! ```text
//! H(a, b) = x(S + a_low·P0 + a_high·P1 + b_low·P2 + b_high·P3)
//! ```
//!
//! where `S` is the shift point, `P0..P3` are fixed curve points, and each
//! input is split into its least-significant 248 bits (`low`) and its
//! remaining 4 bits (`high`).
//!
//! ## Usage
//!
//! ```
//! use stark_curve::{U256, pedersen_hash};
//!
//! let digest = pedersen_hash(&U256::ZERO, &U256::ZERO)?;
//! assert_eq!(
//!     digest,
//!     U256::from_be_hex("049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804")
//! );
//! # Ok::<(), stark_curve::Error>(())
//! ```

use crate::{AffinePoint, Error, FieldElement, ProjectivePoint, Result, Scalar, U256};

/// Mask selecting the bits of the most significant limb below bit 248.
const LOW_PART_MASK: u64 = 0x00ff_ffff_ffff_ffff;

/// Number of bits of the most significant limb below bit 248.
const LOW_PART_TOP_BITS: u32 = 56;

/// Shift point, the starting accumulator of every hash.
pub const SHIFT_POINT: AffinePoint = constant_point(
    "049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804",
    "03ca0cfe4b3bc6ddf346d49d06ea0ed34e621062c0e056c1d0405d266e10268a",
);

/// Multiplied by the low 248 bits of the first input.
pub const P0: AffinePoint = constant_point(
    "0234287dcbaffe7f969c748655fca9e58fa8120b6d56eb0c1080d17957ebe47b",
    "03b056f100f96fb21e889527d41f4e39940135dd7a6c94cc6ed0268ee89e5615",
);

/// Multiplied by the high 4 bits of the first input.
pub const P1: AffinePoint = constant_point(
    "04fa56f376c83db33f9dab2656558f3399099ec1de5e3018b7a6932dba8aa378",
    "03fa0984c931c9e38113e0c0e47e4401562761f92a7a23b45168f4e80ff5b54d",
);

/// Multiplied by the low 248 bits of the second input.
pub const P2: AffinePoint = constant_point(
    "04ba4cc166be8dec764910f75b45f74b40c690c74709e90f3aa372f0bd2d6997",
    "0040301cf5c1751f4b971e46c4ede85fcac5c59a5ce5ae7c48151f27b24b219c",
);

/// Multiplied by the high 4 bits of the second input.
pub const P3: AffinePoint = constant_point(
    "054302dcb0e6cc1c6e44cca8f61a63bb2ca65048d53fb325d36ff12c49a58202",
    "01b77b3e37d13504b348046268d8ae25ce98ad783c25561a879dcc77e99c2426",
);

const fn constant_point(x: &str, y: &str) -> AffinePoint {
    AffinePoint::Finite {
        x: FieldElement::from_hex(x),
        y: FieldElement::from_hex(y),
    }
}

/// Computes the Pedersen hash of two integers.
///
/// Returns [`Error::FieldOverflow`] if either input is not a canonical field
/// element, i.e. is `≥ p`.
pub fn pedersen_hash(a: &U256, b: &U256) -> Result<U256> {
    let a = Option::<FieldElement>::from(FieldElement::from_uint(a)).ok_or(Error::FieldOverflow)?;
    let b = Option::<FieldElement>::from(FieldElement::from_uint(b)).ok_or(Error::FieldOverflow)?;
    Ok(pedersen_hash_elements(&a, &b).to_uint())
}

/// Computes the Pedersen hash of two field elements.
pub fn pedersen_hash_elements(a: &FieldElement, b: &FieldElement) -> FieldElement {
    let (a_low, a_high) = split(a);
    let (b_low, b_high) = split(b);

    // The constant points all lie on the curve.
    let [shift, p0, p1, p2, p3] = [SHIFT_POINT, P0, P1, P2, P3]
        .map(|point| point.to_projective().unwrap_or(ProjectivePoint::IDENTITY));
    let point = shift + p0 * a_low + p1 * a_high + p2 * b_low + p3 * b_high;

    // The sum is the identity only for a discrete-log relation among the
    // constant points; map it to zero rather than fail.
    AffinePoint::from(point).x().unwrap_or_default()
}

/// Splits a field element into its low 248 bits and high 4 bits.
fn split(fe: &FieldElement) -> (Scalar, Scalar) {
    let [l0, l1, l2, l3] = fe.to_canonical();
    let low = Scalar::from_canonical(&[l0, l1, l2, l3 & LOW_PART_MASK]);
    let high = Scalar::from_u64(l3 >> LOW_PART_TOP_BITS);
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::{P0, P1, P2, P3, SHIFT_POINT, pedersen_hash, pedersen_hash_elements, split};
    use crate::{
        Error, FieldElement, Scalar, StarkCurve, U256, test_vectors::pedersen::PEDERSEN_TEST_VECTORS,
    };

    #[test]
    fn constant_points_are_on_curve() {
        for point in [SHIFT_POINT, P0, P1, P2, P3] {
            assert!(point.is_on_curve());
            assert!(point.to_projective().is_ok());
        }
    }

    #[test]
    fn hash_of_zeros_is_shift_point() {
        let digest = pedersen_hash_elements(&FieldElement::ZERO, &FieldElement::ZERO);
        assert_eq!(Some(digest), SHIFT_POINT.x());
    }

    #[test]
    fn known_answers() {
        for (a, b, expected) in PEDERSEN_TEST_VECTORS {
            let a = U256::from_be_slice(a);
            let b = U256::from_be_slice(b);
            assert_eq!(pedersen_hash(&a, &b).unwrap(), U256::from_be_slice(expected));
        }
    }

    #[test]
    fn split_top_bits() {
        // p - 1 = 2^251 + 17·2^192
        let (low, high) = split(&-FieldElement::ONE);
        assert_eq!(high, Scalar::from(8u64));
        assert_eq!(
            low.to_uint(),
            U256::from_be_hex("0000000000000011000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn rejects_overflowing_inputs() {
        let p = StarkCurve::MODULUS;
        assert_eq!(pedersen_hash(&p, &U256::ZERO), Err(Error::FieldOverflow));
        assert_eq!(pedersen_hash(&U256::ZERO, &p), Err(Error::FieldOverflow));
        assert!(pedersen_hash(&p.wrapping_sub(&U256::ONE), &U256::ZERO).is_ok());
    }
}
