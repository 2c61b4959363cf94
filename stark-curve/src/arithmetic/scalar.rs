//! Scalar field arithmetic modulo n = 0x0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f

#![allow(clippy::assign_op_pattern, clippy::op_ref)]

use super::{field::FieldElement, util::Limbs};
use crate::{FieldBytes, NonZeroScalar, ORDER_HEX, StarkCurve, U256};
use core::{cmp::Ordering, ops::ShrAssign};
use elliptic_curve::{
    ScalarPrimitive,
    ops::{Invert, Reduce},
    scalar::{FromUintUnchecked, IsHigh},
};
use ff::{Field, PrimeField};
use rand_core::RngCore;
use subtle::{Choice, ConstantTimeEq, CtOption};

/// Constant representing the modulus
/// n = 0x0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f
const MODULUS: Limbs = [
    0x1e66_a241_adc6_4d2f,
    0xb781_126d_cae7_b232,
    0xffff_ffff_ffff_ffff,
    0x0800_0000_0000_0010,
];

/// R = 2^256 mod n
const R: Limbs = [
    0x5192_5a0b_f4fc_a74f,
    0xc75e_c4b4_6df1_6bee,
    0x0000_0000_0000_0008,
    0x07ff_ffff_ffff_fdf1,
];

/// R^2 = 2^512 mod n
const R_2: Limbs = [
    0x6021_b3f1_ea1c_688d,
    0x509c_f64d_14ce_60b9,
    0xbaf0_ab4c_f78b_babb,
    0x07d9_e57c_2333_766e,
];

/// -n^-1 mod 2^64
const M_PRIME: u64 = 0xbb6b_3c4c_e8bd_e631;

/// n - 2
const MODULUS_MINUS_TWO: Limbs = [
    0x1e66_a241_adc6_4d2d,
    0xb781_126d_cae7_b232,
    0xffff_ffff_ffff_ffff,
    0x0800_0000_0000_0010,
];

/// (n - 1) / 2
const HALF_ORDER: Limbs = [
    0x0f33_5120_d6e3_2697,
    0xdbc0_8936_e573_d919,
    0x7fff_ffff_ffff_ffff,
    0x0400_0000_0000_0008,
];

/// (n + 1) / 4
const MODULUS_PLUS_ONE_DIV_FOUR: Limbs = [
    0x8799_a890_6b71_934c,
    0xede0_449b_72b9_ec8c,
    0x3fff_ffff_ffff_ffff,
    0x0200_0000_0000_0004,
];

impl_mont_field!(
    name: Scalar,
    modulus: MODULUS,
    r: R,
    r2: R_2,
    m_prime: M_PRIME,
    modulus_minus_two: MODULUS_MINUS_TWO,
    doc: "Scalars are elements in the finite field modulo n, the order of the STARK curve group."
);

impl Scalar {
    /// Reduces an arbitrary 256-bit integer modulo n.
    pub fn reduce(w: &U256) -> Self {
        Self::from_canonical(&super::util::from_uint(w))
    }

    /// Reduces the canonical value of a base field element modulo n.
    ///
    /// p > n, so x-coordinates of curve points may exceed the group order.
    pub fn reduce_field_element(fe: &FieldElement) -> Self {
        Self::from_canonical(&fe.to_canonical())
    }

    /// Returns the square root of self mod n, or `None` if no square root exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        // n ≡ 3 mod 4, so by Euler's criterion a candidate root is
        // self^((n + 1) / 4), which is only valid if it squares back to self.
        let sqrt = self.pow_vartime(&MODULUS_PLUS_ONE_DIV_FOUR);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Returns `self < 2^251` in constant time.
    pub(crate) fn is_element_bounded(&self) -> Choice {
        super::util::ct_lt(
            &self.to_canonical(),
            &super::util::from_uint(&crate::ELEMENT_UPPER_BOUND),
        )
    }
}

impl Field for Scalar {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0u8; 32];
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0x0f;
            if let Some(scalar) = Option::from(Self::from_bytes(&bytes)) {
                return scalar;
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

impl PrimeField for Scalar {
    type Repr = FieldBytes;

    const MODULUS: &'static str = ORDER_HEX;
    const NUM_BITS: u32 = 252;
    const CAPACITY: u32 = 251;
    const TWO_INV: Self =
        Self::from_hex("04000000000000087fffffffffffffffdbc08936e573d9190f335120d6e32698");
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(3);
    const S: u32 = 1;
    const ROOT_OF_UNITY: Self =
        Self::from_hex("0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2e");
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY;
    const DELTA: Self = Self::from_u64(9);

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

impl AsRef<Scalar> for Scalar {
    fn as_ref(&self) -> &Scalar {
        self
    }
}

impl From<NonZeroScalar> for Scalar {
    fn from(scalar: NonZeroScalar) -> Self {
        *scalar.as_ref()
    }
}

impl From<ScalarPrimitive<StarkCurve>> for Scalar {
    fn from(w: ScalarPrimitive<StarkCurve>) -> Self {
        Scalar::from(&w)
    }
}

impl From<&ScalarPrimitive<StarkCurve>> for Scalar {
    fn from(w: &ScalarPrimitive<StarkCurve>) -> Scalar {
        Scalar::from_canonical(&super::util::from_uint(w.as_uint()))
    }
}

impl From<Scalar> for ScalarPrimitive<StarkCurve> {
    fn from(scalar: Scalar) -> ScalarPrimitive<StarkCurve> {
        ScalarPrimitive::from(&scalar)
    }
}

impl From<&Scalar> for ScalarPrimitive<StarkCurve> {
    fn from(scalar: &Scalar) -> ScalarPrimitive<StarkCurve> {
        ScalarPrimitive::new(scalar.to_uint()).unwrap()
    }
}

impl From<Scalar> for FieldBytes {
    fn from(scalar: Scalar) -> Self {
        scalar.to_repr()
    }
}

impl From<&Scalar> for FieldBytes {
    fn from(scalar: &Scalar) -> Self {
        scalar.to_repr()
    }
}

impl Invert for Scalar {
    type Output = CtOption<Self>;

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}

impl FromUintUnchecked for Scalar {
    type Uint = U256;

    fn from_uint_unchecked(uint: Self::Uint) -> Self {
        Self::reduce(&uint)
    }
}

impl IsHigh for Scalar {
    fn is_high(&self) -> Choice {
        super::util::ct_lt(&HALF_ORDER, &self.to_canonical())
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_uint().cmp(&other.to_uint())
    }
}

impl Reduce<U256> for Scalar {
    type Bytes = FieldBytes;

    fn reduce(w: U256) -> Self {
        Self::reduce(&w)
    }

    #[inline]
    fn reduce_bytes(bytes: &FieldBytes) -> Self {
        Self::reduce(&U256::from_be_slice(bytes))
    }
}

impl ShrAssign<usize> for Scalar {
    fn shr_assign(&mut self, rhs: usize) {
        *self = Self::from_canonical(&super::util::from_uint(&self.to_uint().shr_vartime(rhs)));
    }
}
