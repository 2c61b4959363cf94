#![no_main]
use libfuzzer_sys::fuzz_target;
use stark_curve::{
    FieldElement, Scalar,
    ff::{Field, PrimeField},
};

fn test_field<F: PrimeField>(fe1: F, fe2: F, fe3: F) {
    // Associativity
    assert_eq!(fe1 + (fe2 + fe3), (fe1 + fe2) + fe3);
    assert_eq!(fe1 * (fe2 * fe3), (fe1 * fe2) * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!(fe1 + F::ZERO, fe1);
    assert_eq!(fe1 * F::ONE, fe1);
    assert_eq!(fe1 - fe1, F::ZERO);

    // Distributivity
    assert_eq!(fe1 * (fe2 + fe3), fe1 * fe2 + fe1 * fe3);

    // Inverse, square, sqrt
    assert_eq!(fe1 + (-fe1), F::ZERO);
    let fe1_sq = fe1.square();
    if !bool::from(fe1.is_zero()) {
        assert_eq!(fe1_sq * fe1.invert().unwrap(), fe1);
        assert_eq!(fe1_sq.sqrt().unwrap().square(), fe1_sq);
    }

    // Double, odd
    let fe1_double = fe1.double();
    assert_eq!(fe1_double, fe1 + fe1);
    assert_eq!(F::from_repr(fe1.to_repr()).unwrap(), fe1);
}

fn reduce_bytes(bytes: &[u8]) -> [u8; 32] {
    let mut repr: [u8; 32] = bytes.try_into().unwrap_or([0; 32]);
    repr[0] &= 0x07;
    repr
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let chunks: [[u8; 32]; 3] = core::array::from_fn(|i| reduce_bytes(&data[i * 32..(i + 1) * 32]));

    let fe = chunks.map(|repr| FieldElement::from_bytes(&repr).unwrap());
    test_field(fe[0], fe[1], fe[2]);

    let scalars = chunks.map(|repr| Scalar::from_bytes(&repr).unwrap());
    test_field(scalars[0], scalars[1], scalars[2]);
});
