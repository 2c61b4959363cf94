//! Pure Rust implementation of group operations on the STARK curve.
//!
//! Curve parameters can be found in the [Starknet documentation].
//!
//! [Starknet documentation]: https://docs.starknet.io/architecture-and-concepts/cryptography/

#[macro_use]
mod macros;

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod scalar;
pub(crate) mod util;

pub use self::affine::AffinePoint;

use self::{field::FieldElement, scalar::Scalar};
use crate::StarkCurve;
use elliptic_curve::CurveArithmetic;
use primeorder::{PrimeCurveParams, point_arithmetic};

/// Elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<StarkCurve>;

/// α = 1
const CURVE_EQUATION_A: FieldElement = FieldElement::ONE;

/// β = 0x06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89
const CURVE_EQUATION_B: FieldElement =
    FieldElement::from_hex("06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89");

/// Base point of the STARK curve.
///
/// ```text
/// Gₓ = 0x01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca
/// Gᵧ = 0x005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f
/// ```
const GENERATOR: (FieldElement, FieldElement) = (
    FieldElement::from_hex("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
    FieldElement::from_hex("005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f"),
);

impl CurveArithmetic for StarkCurve {
    type AffinePoint = primeorder::AffinePoint<StarkCurve>;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl PrimeCurveParams for StarkCurve {
    type FieldElement = FieldElement;
    type PointArithmetic = point_arithmetic::EquationAIsGeneric;

    const EQUATION_A: FieldElement = CURVE_EQUATION_A;
    const EQUATION_B: FieldElement = CURVE_EQUATION_B;
    const GENERATOR: (FieldElement, FieldElement) = GENERATOR;
}

#[cfg(test)]
mod tests {
    use super::{
        AffinePoint, CURVE_EQUATION_A, CURVE_EQUATION_B, FieldElement, GENERATOR, ProjectivePoint,
        Scalar,
    };
    use crate::{
        StarkCurve, U256,
        test_vectors::group::{ADD_TEST_VECTORS, MUL_TEST_VECTORS},
    };
    use elliptic_curve::group::Group;

    fn assert_affine_eq(point: &ProjectivePoint, vector: &([u8; 32], [u8; 32])) {
        let expected = AffinePoint::Finite {
            x: FieldElement::from_bytes(&vector.0).unwrap(),
            y: FieldElement::from_bytes(&vector.1).unwrap(),
        };
        assert_eq!(AffinePoint::from(point), expected);
    }

    #[test]
    fn generator_is_on_curve() {
        let (x, y) = GENERATOR;
        assert_eq!(y.square(), x.square() * x + CURVE_EQUATION_A * x + CURVE_EQUATION_B);
    }

    #[test]
    fn affine_to_projective() {
        let basepoint_affine = AffinePoint::GENERATOR;
        let basepoint_projective = ProjectivePoint::GENERATOR;

        assert_eq!(basepoint_affine.to_projective().unwrap(), basepoint_projective);
        assert_eq!(AffinePoint::from(basepoint_projective), basepoint_affine);
        assert_eq!(AffinePoint::from(ProjectivePoint::IDENTITY), AffinePoint::Infinity);
        assert_eq!(
            AffinePoint::Infinity.to_projective().unwrap(),
            ProjectivePoint::IDENTITY
        );
    }

    #[test]
    fn projective_identity_addition() {
        let identity = ProjectivePoint::IDENTITY;
        let generator = ProjectivePoint::GENERATOR;

        assert_eq!(identity + &generator, generator);
        assert_eq!(generator + &identity, generator);
        assert_eq!(identity + &identity, identity);
    }

    #[test]
    fn test_vector_repeated_add() {
        let generator = ProjectivePoint::GENERATOR;
        let mut p = generator;

        for vector in ADD_TEST_VECTORS {
            assert_affine_eq(&p, vector);
            p += &generator;
        }
    }

    #[test]
    fn test_vector_double_generator() {
        let mut p = ProjectivePoint::GENERATOR;

        // ADD_TEST_VECTORS[i] is [i + 1] G
        for (i, vector) in ADD_TEST_VECTORS.iter().enumerate() {
            if (i + 1).is_power_of_two() {
                assert_affine_eq(&p, vector);
                p = p.double();
            }
        }
    }

    #[test]
    fn projective_add_vs_double() {
        let generator = ProjectivePoint::GENERATOR;
        assert_eq!(generator + &generator, generator.double());
    }

    #[test]
    fn projective_double_and_sub() {
        let generator = ProjectivePoint::GENERATOR;
        assert_eq!(generator.double() - &generator, generator);
    }

    #[test]
    fn point_plus_negation_is_identity() {
        let generator = ProjectivePoint::GENERATOR;
        assert!(bool::from((generator + &(-generator)).is_identity()));
    }

    #[test]
    fn test_vector_scalar_mult() {
        let generator = ProjectivePoint::GENERATOR;

        for (k, coords) in ADD_TEST_VECTORS
            .iter()
            .enumerate()
            .map(|(k, coords)| (Scalar::from(k as u64 + 1), *coords))
            .chain(
                MUL_TEST_VECTORS
                    .iter()
                    .map(|(k, x, y)| (Scalar::from_bytes(k).unwrap(), (*x, *y))),
            )
        {
            assert_affine_eq(&(generator * &k), &coords);
        }
    }

    #[test]
    fn scalar_mult_by_zero_is_identity() {
        assert_eq!(
            ProjectivePoint::GENERATOR * Scalar::ZERO,
            ProjectivePoint::IDENTITY
        );
    }

    #[test]
    fn scalar_mult_by_order_minus_one_is_negation() {
        let minus_one = Scalar::from_uint(&StarkCurve::ORDER.wrapping_sub(&U256::ONE)).unwrap();
        assert_eq!(
            ProjectivePoint::GENERATOR * minus_one,
            -ProjectivePoint::GENERATOR
        );
    }
}
