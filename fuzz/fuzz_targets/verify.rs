#![no_main]
use libfuzzer_sys::fuzz_target;
use stark_curve::{U256, get_public_key, sign, verify};

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    let words: [U256; 4] =
        core::array::from_fn(|i| U256::from_be_slice(&data[i * 32..(i + 1) * 32]));

    // Arbitrary inputs never panic
    let _ = verify(&words[0], &words[1], &words[2], &words[3]);

    // Whenever signing succeeds, the signature verifies
    let (private_key, msg_hash, k) = (&words[0], &words[1], &words[2]);
    if let Ok(signature) = sign(private_key, msg_hash, k) {
        let public_key = get_public_key(private_key).unwrap();
        assert!(verify(&public_key, msg_hash, &signature.r(), &signature.s()));
    }
});
