//! Field arithmetic modulo p = 2^{251} + 17·2^{192} + 1

#![allow(clippy::assign_op_pattern, clippy::op_ref)]

use super::util::Limbs;
use crate::{FieldBytes, MODULUS_HEX};
use ff::{Field, PrimeField};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Constant representing the modulus.
const MODULUS: Limbs = [0x1, 0x0, 0x0, 0x0800_0000_0000_0011];

/// R = 2^256 mod p
const R: Limbs = [
    0xffff_ffff_ffff_ffe1,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x07ff_ffff_ffff_fdf0,
];

/// R^2 = 2^512 mod p
const R_2: Limbs = [
    0xffff_fd73_7e00_0401,
    0x0000_0001_330f_ffff,
    0xffff_ffff_ff6f_8000,
    0x07ff_d4ab_5e00_8810,
];

/// -p^-1 mod 2^64
const M_PRIME: u64 = 0xffff_ffff_ffff_ffff;

/// p - 2
const MODULUS_MINUS_TWO: Limbs = [
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x0800_0000_0000_0010,
];

/// (t - 1) / 2, where p - 1 = t·2^192
const T_MINUS_ONE_DIV_TWO: Limbs = [0x0400_0000_0000_0008, 0, 0, 0];

impl_mont_field!(
    name: FieldElement,
    modulus: MODULUS,
    r: R,
    r2: R_2,
    m_prime: M_PRIME,
    modulus_minus_two: MODULUS_MINUS_TWO,
    doc: "An element in the finite field modulo p = 2^{251} + 17·2^{192} + 1."
);

impl FieldElement {
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// p - 1 has 2-adicity 192, so this is the constant-time Tonelli-Shanks
    /// algorithm from <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5).
    pub fn sqrt(&self) -> CtOption<Self> {
        let w = self.pow_vartime(&T_MINUS_ONE_DIV_TWO);

        let mut v = Self::S;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = Self::ROOT_OF_UNITY;

        for max_v in (1..=Self::S).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&Self::ONE);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&Self::ONE));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }
}

impl Field for FieldElement {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        // Rejection sampling over 252-bit strings accepts with probability ~1/2.
        let mut bytes = [0u8; 32];
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0x0f;
            if let Some(fe) = Option::from(Self::from_bytes(&bytes)) {
                return fe;
            }
        }
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl PrimeField for FieldElement {
    type Repr = FieldBytes;

    const MODULUS: &'static str = MODULUS_HEX;
    const NUM_BITS: u32 = 252;
    const CAPACITY: u32 = 251;
    const TWO_INV: Self =
        Self::from_hex("0400000000000008800000000000000000000000000000000000000000000001");
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(3);
    const S: u32 = 192;
    const ROOT_OF_UNITY: Self =
        Self::from_hex("005282db87529cfa3f0464519c8b0fa5ad187148e11a61616070024f42f8ef94");
    const ROOT_OF_UNITY_INV: Self =
        Self::from_hex("003ae6a386329b25973ebc68dbf446534e6428affe8c0f24d90af58616019ce1");
    const DELTA: Self =
        Self::from_hex("00f66926e0ff773515a10661aa1f4d7e5cd6a000cc515a33cea96fa9c5262e50");

    #[inline]
    fn from_repr(bytes: FieldBytes) -> CtOption<Self> {
        Self::from_bytes(&bytes.into())
    }

    #[inline]
    fn to_repr(&self) -> FieldBytes {
        self.to_bytes().into()
    }

    #[inline]
    fn is_odd(&self) -> Choice {
        self.is_odd()
    }
}
