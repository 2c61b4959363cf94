//! STARK curve ECDSA tests

#![cfg(feature = "ecdsa")]

use proptest::prelude::*;
use stark_curve::{
    AffinePoint, Error, ProjectivePoint, Scalar, StarkCurve, U256,
    ecdsa::{Signature, SigningKey, VerifyingKey},
    elliptic_curve::ops::MulByGenerator,
    get_public_key, sign, verify,
};

const PRIVATE_KEY: U256 =
    U256::from_be_hex("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79");
const PUBLIC_KEY: U256 =
    U256::from_be_hex("02c5dbad71c92a45cc4b40573ae661f8147869a91d57b8d9b8f48c8af7f83159");
const MSG_HASH: U256 =
    U256::from_be_hex("06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76");
const K: U256 =
    U256::from_be_hex("04daebba599f860daee8f6e100601d98873052e1c61530c630cc4375c6bd48e3");
const R: U256 =
    U256::from_be_hex("034ffbd2cd71fce104a13e8003bbd4a17aee31371a6fe72eff0efcd195f19ff3");
const S: U256 =
    U256::from_be_hex("042e2665aca21934bca93eb1d589734759e58d43ee609514f05d608019d2711b");

#[test]
fn public_key_test_vector() {
    let private_key =
        U256::from_be_hex("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc");
    assert_eq!(
        get_public_key(&private_key).unwrap(),
        U256::from_be_hex("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43")
    );
    assert_eq!(get_public_key(&PRIVATE_KEY).unwrap(), PUBLIC_KEY);
}

#[test]
fn public_key_rejects_out_of_range() {
    assert_eq!(get_public_key(&U256::ZERO), Err(Error::InvalidScalar));
    assert_eq!(get_public_key(&StarkCurve::ORDER), Err(Error::InvalidScalar));
}

/// Picks `d = -h·r⁻¹ mod n` for a fixed nonce, so that `h + r·d ≡ 0`.
fn zero_s_key(k: &Scalar, h: &Scalar) -> Scalar {
    let x = AffinePoint::from(ProjectivePoint::mul_by_generator(k))
        .x()
        .unwrap();
    let r = Scalar::reduce_field_element(&x);
    -(*h * r.invert().unwrap())
}

#[test]
fn sign_rejects_zero_s() {
    let k = Scalar::from(12345u64);
    let h = Scalar::from(777u64);
    let d = zero_s_key(&k, &h);

    assert_eq!(
        sign(&d.to_uint(), &h.to_uint(), &k.to_uint()),
        Err(Error::ZeroS)
    );

    // A different nonce signs the same hash with the same key.
    let signature = sign(&d.to_uint(), &h.to_uint(), &K).unwrap();
    let public_key = get_public_key(&d.to_uint()).unwrap();
    assert!(verify(
        &public_key,
        &h.to_uint(),
        &signature.r(),
        &signature.s()
    ));
}

#[cfg(feature = "rfc6979")]
#[test]
fn deterministic_signing_recovers_from_zero_s_key() {
    let k = Scalar::from(12345u64);
    let h = Scalar::from(777u64);
    let signing_key = SigningKey::from_scalar(zero_s_key(&k, &h)).unwrap();

    let signature = signing_key
        .sign_prehash_deterministic(&h.to_uint())
        .unwrap();
    assert!(
        signing_key
            .verifying_key()
            .verify_prehash(&h.to_uint(), &signature)
    );
}

#[test]
fn sign_test_vector() {
    let signature = sign(&PRIVATE_KEY, &MSG_HASH, &K).unwrap();
    assert_eq!(signature.r(), R);
    assert_eq!(signature.s(), S);
}

#[test]
fn sign_rejects_out_of_range_private_key() {
    assert_eq!(sign(&U256::ZERO, &MSG_HASH, &K), Err(Error::InvalidScalar));
    assert_eq!(
        sign(&StarkCurve::ORDER, &MSG_HASH, &K),
        Err(Error::InvalidScalar)
    );
}

#[test]
fn sign_rejects_out_of_range_message_hash() {
    assert_eq!(
        sign(&PRIVATE_KEY, &stark_curve::ELEMENT_UPPER_BOUND, &K),
        Err(Error::InvalidMessageHash)
    );
    assert_eq!(
        sign(&PRIVATE_KEY, &StarkCurve::MODULUS, &K),
        Err(Error::InvalidMessageHash)
    );
}

#[test]
fn verify_test_vector() {
    assert!(verify(&PUBLIC_KEY, &MSG_HASH, &R, &S));
}

#[test]
fn verify_rejects_tampering() {
    let one = U256::ONE;
    assert!(!verify(&PUBLIC_KEY.wrapping_add(&one), &MSG_HASH, &R, &S));
    assert!(!verify(&PUBLIC_KEY, &MSG_HASH.wrapping_add(&one), &R, &S));
    assert!(!verify(&PUBLIC_KEY, &MSG_HASH, &R.wrapping_add(&one), &S));
    assert!(!verify(&PUBLIC_KEY, &MSG_HASH, &R, &S.wrapping_add(&one)));
}

#[test]
fn verify_rejects_malformed_inputs() {
    let n = StarkCurve::ORDER;
    assert!(!verify(&PUBLIC_KEY, &MSG_HASH, &U256::ZERO, &S));
    assert!(!verify(&PUBLIC_KEY, &MSG_HASH, &R, &U256::ZERO));
    assert!(!verify(&PUBLIC_KEY, &MSG_HASH, &n, &S));
    assert!(!verify(&PUBLIC_KEY, &MSG_HASH, &R, &n));
    assert!(!verify(&PUBLIC_KEY, &stark_curve::ELEMENT_UPPER_BOUND, &R, &S));
    assert!(!verify(&StarkCurve::MODULUS, &MSG_HASH, &R, &S));
    assert!(!verify(&U256::ZERO, &MSG_HASH, &R, &S));
}

#[test]
fn verify_accepts_negated_public_point() {
    // A key built from -Q names the same public key as Q.
    let signing_key = SigningKey::from_uint(&PRIVATE_KEY).unwrap();
    let negated = VerifyingKey::from_affine(-*signing_key.verifying_key().as_affine()).unwrap();
    let signature = signing_key.sign_prehash_with_nonce(&MSG_HASH, &K).unwrap();
    assert!(negated.verify_prehash(&MSG_HASH, &signature));
}

#[test]
fn reused_nonce_reveals_private_key() {
    let h1 = MSG_HASH;
    let h2 = U256::from_u64(0x1234_5678);
    let sig1 = sign(&PRIVATE_KEY, &h1, &K).unwrap();
    let sig2 = sign(&PRIVATE_KEY, &h2, &K).unwrap();
    assert_eq!(sig1.r(), sig2.r());

    let (r, s1) = sig1.split_scalars();
    let (_, s2) = sig2.split_scalars();
    let h1 = Scalar::reduce(&h1);
    let h2 = Scalar::reduce(&h2);

    // k = (h1 - h2) / (s1 - s2), d = (s1·k - h1) / r
    let k = (h1 - h2) * (s1 - s2).invert().unwrap();
    let d = (s1 * k - h1) * r.invert().unwrap();

    assert_eq!(k.to_uint(), K);
    assert_eq!(d.to_uint(), PRIVATE_KEY);
}

#[cfg(feature = "rfc6979")]
mod deterministic {
    use super::{MSG_HASH, PRIVATE_KEY};
    use stark_curve::{U256, ecdsa::SigningKey, verify};

    #[test]
    fn starknet_reference_signature() {
        let signing_key = SigningKey::from_uint(&PRIVATE_KEY).unwrap();
        let signature = signing_key.sign_prehash_deterministic(&MSG_HASH).unwrap();
        assert_eq!(
            signature.r(),
            U256::from_be_hex("061ec782f76a66f6984efc3a1b6d152a124c701c00abdd2bf76641b4135c770f")
        );
        assert_eq!(
            signature.s(),
            U256::from_be_hex("04e44e759cea02c23568bb4d8a09929bbca8768ab68270d50c18d214166ccd9a")
        );
    }

    #[test]
    fn zero_message_hash() {
        let private_key =
            U256::from_be_hex("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc");
        let signing_key = SigningKey::from_uint(&private_key).unwrap();
        let signature = signing_key.sign_prehash_deterministic(&U256::ZERO).unwrap();
        assert_eq!(
            signature.r(),
            U256::from_be_hex("005501cb3b19658d23128baf8bcfa2e45c12525b44eec10a3f485dbb40a82065")
        );
        assert_eq!(
            signature.s(),
            U256::from_be_hex("02d67d973b258c5923ef085c7d9b9416ec146170865773aad9bffa2236500227")
        );
        assert!(verify(
            &signing_key.verifying_key().x(),
            &U256::ZERO,
            &signature.r(),
            &signature.s()
        ));
    }
}

prop_compose! {
    /// Integer below 2^251.
    fn element()(bytes in any::<[u8; 32]>()) -> U256 {
        let mut bytes = bytes;
        bytes[0] &= 0x07;
        U256::from_be_slice(&bytes)
    }
}

proptest! {
    #[test]
    fn sign_and_verify(private_key in element(), msg_hash in element(), k in element()) {
        prop_assume!(private_key != U256::ZERO && k != U256::ZERO);

        let signature = sign(&private_key, &msg_hash, &k);
        prop_assume!(!matches!(signature, Err(Error::ZeroOrOutOfRangeR | Error::ZeroS)));
        let signature = signature.unwrap();

        let public_key = get_public_key(&private_key).unwrap();
        prop_assert!(verify(&public_key, &msg_hash, &signature.r(), &signature.s()));
    }

    #[test]
    fn reject_invalid_signature(private_key in element(), k in element(), byte in 0usize..64, bit in 0usize..8) {
        prop_assume!(private_key != U256::ZERO && k != U256::ZERO);

        let signature = sign(&private_key, &MSG_HASH, &k);
        prop_assume!(signature.is_ok());
        let mut signature_bytes = signature.unwrap().to_bytes();

        // tweak signature to make it invalid
        signature_bytes[byte] ^= 1 << bit;

        let public_key = get_public_key(&private_key).unwrap();
        if let Ok(signature) = Signature::from_bytes(&signature_bytes) {
            prop_assert!(!verify(&public_key, &MSG_HASH, &signature.r(), &signature.s()));
        }
    }
}
