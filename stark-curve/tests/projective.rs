//! Projective arithmetic tests.

use proptest::prelude::*;
use stark_curve::{
    AffinePoint, ProjectivePoint, Scalar, U256,
    elliptic_curve::{group::Group, ops::MulByGenerator},
};

#[test]
fn order_times_generator_is_identity() {
    let minus_one = -Scalar::ONE;
    let p = ProjectivePoint::GENERATOR * minus_one + ProjectivePoint::GENERATOR;
    assert!(bool::from(p.is_identity()));
}

#[test]
fn identity_is_neutral() {
    let g = ProjectivePoint::GENERATOR;
    assert_eq!(g + ProjectivePoint::IDENTITY, g);
    assert_eq!(ProjectivePoint::IDENTITY.double(), ProjectivePoint::IDENTITY);
    assert_eq!(-ProjectivePoint::IDENTITY, ProjectivePoint::IDENTITY);
}

#[test]
fn sum_of_points() {
    let g = ProjectivePoint::GENERATOR;
    let sum: ProjectivePoint = [g, g, g].iter().sum();
    assert_eq!(sum, g * Scalar::from(3u64));
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
        let mut bytes = bytes;
        bytes[0] &= 0x07;
        Scalar::reduce(&U256::from_be_slice(&bytes))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn mul_distributes_over_scalar_addition(a in scalar(), b in scalar()) {
        let g = ProjectivePoint::GENERATOR;
        prop_assert_eq!(g * (a + b), g * a + g * b);
    }

    #[test]
    fn mul_composes(a in scalar(), b in scalar()) {
        let g = ProjectivePoint::GENERATOR;
        prop_assert_eq!((g * a) * b, g * (a * b));
    }

    #[test]
    fn addition_is_associative(a in scalar(), b in scalar(), c in scalar()) {
        let g = ProjectivePoint::GENERATOR;
        let (p, q, r) = (g * a, g * b, g * c);
        prop_assert_eq!((p + q) + r, p + (q + r));
    }

    #[test]
    fn results_stay_on_curve(a in scalar()) {
        let p = AffinePoint::from(ProjectivePoint::mul_by_generator(&a));
        prop_assert!(p.is_on_curve());
        prop_assert_eq!(AffinePoint::GENERATOR.try_mul(&a).unwrap(), p);
    }
}
