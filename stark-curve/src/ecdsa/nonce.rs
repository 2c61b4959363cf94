//! Deterministic nonce generation.
//!
//! Nonces are drawn from the HMAC-DRBG of [RFC 6979 § 3.2] instantiated with
//! SHA-256, which makes signatures reproducible and removes the dependency
//! on a random number generator at signing time.
//!
//! [RFC 6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.2

use crate::{Scalar, U256};
use bigint::Encoding;
use rfc6979::HmacDrbg;
use sha2::Sha256;
use zeroize::Zeroizing;

/// `256 - bitlen(n)`: each 32-byte draw is truncated to the bit length of `n`.
const DRAW_SHIFT: usize = 4;

/// Derives the signing nonce for `msg_hash` under `private_key`.
///
/// The HMAC-DRBG is seeded with the private key as entropy input, the message
/// hash as nonce, and the big-endian bytes of `seed` (leading zeros stripped)
/// as personalization string. Draws outside `[1, n - 1]` are discarded.
///
/// Distinct seeds give independent nonces for the same key and message, which
/// is how a signer retries after an unusable nonce.
pub fn generate_k(msg_hash: &U256, private_key: &U256, seed: Option<&U256>) -> Scalar {
    let seed_bytes = seed.map(U256::to_be_bytes).unwrap_or_default();
    let seed_start = seed_bytes
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(seed_bytes.len());

    let entropy = Zeroizing::new(private_key.to_be_bytes());
    let mut drbg = HmacDrbg::<Sha256>::new(
        &entropy[..],
        &msg_hash.to_be_bytes(),
        &seed_bytes[seed_start..],
    );

    let mut bytes = Zeroizing::new([0u8; 32]);

    loop {
        drbg.fill_bytes(&mut bytes[..]);
        let candidate = U256::from_be_bytes(*bytes).shr_vartime(DRAW_SHIFT);

        if let Some(k) = Option::<Scalar>::from(Scalar::from_uint(&candidate)) {
            if !bool::from(k.is_zero()) {
                return k;
            }
        }
    }
}
