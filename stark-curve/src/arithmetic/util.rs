//! Helper functions.
//!
//! Multiprecision arithmetic over four little-endian 64-bit limbs, shared by
//! the base field and the scalar field.

use bigint::{Encoding, U256};
use subtle::Choice;

/// Little-endian 256-bit integer.
pub(crate) type Limbs = [u64; 4];

/// Computes `a + b + carry`, returning the result along with the new carry. 64-bit version.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow. 64-bit version.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Subtracts `modulus` from the 320-bit value `l` if `l >= modulus`.
///
/// `l` must be less than `2 * modulus`.
#[inline]
pub(crate) const fn sub_inner(l: [u64; 5], modulus: &Limbs) -> Limbs {
    let (w0, borrow) = sbb(l[0], modulus[0], 0);
    let (w1, borrow) = sbb(l[1], modulus[1], borrow);
    let (w2, borrow) = sbb(l[2], modulus[2], borrow);
    let (w3, borrow) = sbb(l[3], modulus[3], borrow);
    let (_, borrow) = sbb(l[4], 0, borrow);

    // If underflow occurred on the final limb, borrow = 0xfff...fff, otherwise
    // borrow = 0x000...000. Thus, we use it as a mask to conditionally add the
    // modulus.
    let (w0, carry) = adc(w0, modulus[0] & borrow, 0);
    let (w1, carry) = adc(w1, modulus[1] & borrow, carry);
    let (w2, carry) = adc(w2, modulus[2] & borrow, carry);
    let (w3, _) = adc(w3, modulus[3] & borrow, carry);

    [w0, w1, w2, w3]
}

/// Returns `a + b mod modulus`.
#[inline]
pub(crate) const fn add_mod(a: &Limbs, b: &Limbs, modulus: &Limbs) -> Limbs {
    let (w0, carry) = adc(a[0], b[0], 0);
    let (w1, carry) = adc(a[1], b[1], carry);
    let (w2, carry) = adc(a[2], b[2], carry);
    let (w3, w4) = adc(a[3], b[3], carry);

    sub_inner([w0, w1, w2, w3, w4], modulus)
}

/// Returns `a - b mod modulus`.
#[inline]
pub(crate) const fn sub_mod(a: &Limbs, b: &Limbs, modulus: &Limbs) -> Limbs {
    let (w0, borrow) = sbb(a[0], b[0], 0);
    let (w1, borrow) = sbb(a[1], b[1], borrow);
    let (w2, borrow) = sbb(a[2], b[2], borrow);
    let (w3, borrow) = sbb(a[3], b[3], borrow);

    let (w0, carry) = adc(w0, modulus[0] & borrow, 0);
    let (w1, carry) = adc(w1, modulus[1] & borrow, carry);
    let (w2, carry) = adc(w2, modulus[2] & borrow, carry);
    let (w3, _) = adc(w3, modulus[3] & borrow, carry);

    [w0, w1, w2, w3]
}

/// Montgomery multiplication: returns `a * b * R^-1 mod modulus` with `R = 2^256`.
///
/// Coarsely integrated operand scanning. `m_prime` is `-modulus^-1 mod 2^64`.
/// The result is fully reduced whenever `a * b < modulus * R`.
pub(crate) const fn mont_mul(a: &Limbs, b: &Limbs, modulus: &Limbs, m_prime: u64) -> Limbs {
    let mut t = [0u64; 6];
    let mut i = 0;

    while i < 4 {
        let mut carry = 0;
        let mut j = 0;
        while j < 4 {
            let (w, c) = mac(t[j], a[j], b[i], carry);
            t[j] = w;
            carry = c;
            j += 1;
        }
        let (w, c) = adc(t[4], carry, 0);
        t[4] = w;
        t[5] = c;

        let k = t[0].wrapping_mul(m_prime);
        let (_, mut carry) = mac(t[0], k, modulus[0], 0);
        let mut j = 1;
        while j < 4 {
            let (w, c) = mac(t[j], k, modulus[j], carry);
            t[j - 1] = w;
            carry = c;
            j += 1;
        }
        let (w, c) = adc(t[4], carry, 0);
        t[3] = w;
        t[4] = t[5] + c;
        t[5] = 0;

        i += 1;
    }

    sub_inner([t[0], t[1], t[2], t[3], t[4]], modulus)
}

/// Returns `a < b` in constant time.
#[inline]
pub(crate) const fn lt(a: &Limbs, b: &Limbs) -> u64 {
    let (_, borrow) = sbb(a[0], b[0], 0);
    let (_, borrow) = sbb(a[1], b[1], borrow);
    let (_, borrow) = sbb(a[2], b[2], borrow);
    let (_, borrow) = sbb(a[3], b[3], borrow);
    borrow & 1
}

/// Returns `a < b` as a [`Choice`].
#[inline]
pub(crate) fn ct_lt(a: &Limbs, b: &Limbs) -> Choice {
    Choice::from(lt(a, b) as u8)
}

/// Decodes a big-endian byte array.
pub(crate) const fn from_be_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 32 {
        limbs[3 - i / 8] = (limbs[3 - i / 8] << 8) | bytes[i] as u64;
        i += 1;
    }
    limbs
}

/// Encodes as a big-endian byte array.
pub(crate) const fn to_be_bytes(limbs: &Limbs) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        bytes[i] = (limbs[3 - i / 8] >> (56 - 8 * (i % 8))) as u8;
        i += 1;
    }
    bytes
}

/// Decodes big-endian hex of at most 64 digits, for defining constants.
///
/// # Panics
///
/// - When hex is malformed
/// - When input is longer than 64 digits
pub(crate) const fn from_be_hex(hex: &str) -> Limbs {
    let hex = hex.as_bytes();
    assert!(hex.len() <= 64, "hex is too long");

    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < hex.len() {
        let digit = match hex[hex.len() - 1 - i] {
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => c - b'a' + 10,
            c @ b'A'..=b'F' => c - b'A' + 10,
            _ => panic!("invalid hex digit"),
        };
        limbs[i / 16] |= (digit as u64) << (4 * (i % 16));
        i += 1;
    }
    limbs
}

/// Converts a [`U256`] into limbs.
#[inline]
pub(crate) fn from_uint(uint: &U256) -> Limbs {
    from_be_bytes(&uint.to_be_bytes())
}

/// Converts limbs into a [`U256`].
#[inline]
pub(crate) fn to_uint(limbs: &Limbs) -> U256 {
    U256::from_be_bytes(to_be_bytes(limbs))
}
