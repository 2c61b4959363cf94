#![no_main]
use libfuzzer_sys::fuzz_target;
use stark_curve::{Error, FieldElement, StarkCurve, U256, pedersen::pedersen_hash_elements, pedersen_hash};

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let a = U256::from_be_slice(&data[0..32]);
    let b = U256::from_be_slice(&data[32..64]);

    match pedersen_hash(&a, &b) {
        Ok(digest) => {
            assert!(a < StarkCurve::MODULUS && b < StarkCurve::MODULUS);
            assert!(digest < StarkCurve::MODULUS);

            // Integer and field element entry points agree
            let fa = FieldElement::from_uint(&a).unwrap();
            let fb = FieldElement::from_uint(&b).unwrap();
            assert_eq!(pedersen_hash_elements(&fa, &fb).to_uint(), digest);
        }
        Err(err) => {
            assert_eq!(err, Error::FieldOverflow);
            assert!(a >= StarkCurve::MODULUS || b >= StarkCurve::MODULUS);
        }
    }
});
