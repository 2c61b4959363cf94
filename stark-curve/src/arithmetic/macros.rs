//! Macros for defining field element types.

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! field_op {
    ($fe:ident, $op:ident, $func:ident, $inner_func:ident) => {
        impl ::core::ops::$op for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: $fe) -> $fe {
                <$fe>::$inner_func(&self, &rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(&self, rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(self, rhs)
            }
        }
    };
}

/// Emit a `core::ops` assignment trait wrapper for an inherent method.
macro_rules! field_op_assign {
    ($fe:ident, $op:ident, $func:ident, $inner_func:ident) => {
        impl ::core::ops::$op for $fe {
            #[inline]
            fn $func(&mut self, rhs: $fe) {
                *self = <$fe>::$inner_func(self, &rhs);
            }
        }

        impl ::core::ops::$op<&$fe> for $fe {
            #[inline]
            fn $func(&mut self, rhs: &$fe) {
                *self = <$fe>::$inner_func(self, rhs);
            }
        }
    };
}

/// Define a 256-bit prime field element type stored in Montgomery form.
///
/// Accepts the following parameters:
///
/// - name of the field element type
/// - modulus as little-endian limbs
/// - `R = 2^256 mod m`
/// - `R^2 = 2^512 mod m`
/// - `m' = -m^-1 mod 2^64`
/// - `m - 2`, the inversion exponent
/// - documentation string for the type
macro_rules! impl_mont_field {
    (
        name: $fe:ident,
        modulus: $modulus:expr,
        r: $r:expr,
        r2: $r2:expr,
        m_prime: $m_prime:expr,
        modulus_minus_two: $mm2:expr,
        doc: $doc:expr
    ) => {
        #[doc = $doc]
        ///
        /// The internal representation is in little-endian order. Elements are always in
        /// Montgomery form; i.e., `x` is stored as `xR mod m`, with `R = 2^256`.
        #[derive(Clone, Copy)]
        pub struct $fe(pub(crate) $crate::arithmetic::util::Limbs);

        impl $fe {
            /// Zero element.
            pub const ZERO: Self = Self([0; 4]);

            /// Multiplicative identity.
            pub const ONE: Self = Self($r);

            /// Converts an arbitrary 256-bit integer into Montgomery form,
            /// reducing it modulo `m`.
            #[inline]
            pub(crate) const fn from_canonical(w: &$crate::arithmetic::util::Limbs) -> Self {
                Self($crate::arithmetic::util::mont_mul(w, &$r2, &$modulus, $m_prime))
            }

            /// Translates out of the Montgomery domain.
            #[inline]
            pub(crate) const fn to_canonical(self) -> $crate::arithmetic::util::Limbs {
                $crate::arithmetic::util::mont_mul(&self.0, &[1, 0, 0, 0], &$modulus, $m_prime)
            }

            /// Convert a `u64` into a [`
            #[doc = stringify!($fe)]
            /// `].
            pub const fn from_u64(w: u64) -> Self {
                Self::from_canonical(&[w, 0, 0, 0])
            }

            /// Decode a [`
            #[doc = stringify!($fe)]
            /// `] from big endian hex-encoded bytes.
            ///
            /// This is primarily intended for defining constants using hex literals.
            ///
            /// # Panics
            ///
            /// - When hex is malformed
            /// - If input overflows the modulus
            pub const fn from_hex(hex: &str) -> Self {
                let w = $crate::arithmetic::util::from_be_hex(hex);
                assert!(
                    $crate::arithmetic::util::lt(&w, &$modulus) == 1,
                    "hex overflows the modulus"
                );
                Self::from_canonical(&w)
            }

            /// Create a [`
            #[doc = stringify!($fe)]
            /// `] from a canonical big-endian representation.
            ///
            /// Returns `None` if the encoded value is not less than the modulus.
            pub fn from_bytes(bytes: &[u8; 32]) -> ::subtle::CtOption<Self> {
                let w = $crate::arithmetic::util::from_be_bytes(bytes);
                ::subtle::CtOption::new(
                    Self::from_canonical(&w),
                    $crate::arithmetic::util::ct_lt(&w, &$modulus),
                )
            }

            /// Returns the big-endian encoding of this [`
            #[doc = stringify!($fe)]
            /// `].
            pub fn to_bytes(self) -> [u8; 32] {
                $crate::arithmetic::util::to_be_bytes(&self.to_canonical())
            }

            /// Decode [`
            #[doc = stringify!($fe)]
            /// `] from [`U256`](::bigint::U256) converting it into Montgomery form.
            ///
            /// Returns `None` if the value is not less than the modulus.
            pub fn from_uint(uint: &::bigint::U256) -> ::subtle::CtOption<Self> {
                let w = $crate::arithmetic::util::from_uint(uint);
                ::subtle::CtOption::new(
                    Self::from_canonical(&w),
                    $crate::arithmetic::util::ct_lt(&w, &$modulus),
                )
            }

            /// Returns the canonical integer value of this [`
            #[doc = stringify!($fe)]
            /// `].
            pub fn to_uint(self) -> ::bigint::U256 {
                $crate::arithmetic::util::to_uint(&self.to_canonical())
            }

            /// Determine if this [`
            #[doc = stringify!($fe)]
            /// `] is zero.
            ///
            /// # Returns
            ///
            /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
            pub fn is_zero(&self) -> ::subtle::Choice {
                ::subtle::ConstantTimeEq::ct_eq(self, &Self::ZERO)
            }

            /// Determine if this [`
            #[doc = stringify!($fe)]
            /// `] is odd: `self mod 2 == 1`.
            ///
            /// # Returns
            ///
            /// If odd, return `Choice(1)`.  Otherwise, return `Choice(0)`.
            pub fn is_odd(&self) -> ::subtle::Choice {
                ::subtle::Choice::from((self.to_canonical()[0] & 1) as u8)
            }

            /// Determine if this [`
            #[doc = stringify!($fe)]
            /// `] is even: `self mod 2 == 0`.
            pub fn is_even(&self) -> ::subtle::Choice {
                !self.is_odd()
            }

            /// Add elements.
            #[inline]
            pub const fn add(&self, rhs: &Self) -> Self {
                Self($crate::arithmetic::util::add_mod(&self.0, &rhs.0, &$modulus))
            }

            /// Double element (add it to itself).
            #[inline]
            #[must_use]
            pub const fn double(&self) -> Self {
                self.add(self)
            }

            /// Subtract elements.
            #[inline]
            pub const fn sub(&self, rhs: &Self) -> Self {
                Self($crate::arithmetic::util::sub_mod(&self.0, &rhs.0, &$modulus))
            }

            /// Negate element.
            #[inline]
            pub const fn neg(&self) -> Self {
                Self::ZERO.sub(self)
            }

            /// Multiply elements.
            #[inline]
            pub const fn multiply(&self, rhs: &Self) -> Self {
                Self($crate::arithmetic::util::mont_mul(&self.0, &rhs.0, &$modulus, $m_prime))
            }

            /// Compute modular square.
            #[inline]
            #[must_use]
            pub const fn square(&self) -> Self {
                self.multiply(self)
            }

            /// Returns `self^(2^n) mod m`.
            pub const fn sqn(&self, n: usize) -> Self {
                let mut x = *self;
                let mut i = 0;
                while i < n {
                    x = x.square();
                    i += 1;
                }
                x
            }

            /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
            ///
            /// **This operation is variable time with respect to the exponent `exp`.**
            ///
            /// If the exponent is fixed, this operation is constant time.
            pub fn pow_vartime(&self, exp: &[u64]) -> Self {
                let mut res = Self::ONE;
                for e in exp.iter().rev() {
                    for i in (0..64).rev() {
                        res = res.square();

                        if ((*e >> i) & 1) == 1 {
                            res = res.multiply(self);
                        }
                    }
                }
                res
            }

            /// Returns the multiplicative inverse of self.
            ///
            /// Does not check that self is non-zero.
            pub(crate) fn invert_unchecked(&self) -> Self {
                // Fermat's Little Theorem: a^(m-2) * a ≡ 1 mod m.
                self.pow_vartime(&$mm2)
            }

            /// Returns the multiplicative inverse of self, if self is non-zero.
            pub fn invert(&self) -> ::subtle::CtOption<Self> {
                ::subtle::CtOption::new(self.invert_unchecked(), !self.is_zero())
            }

            /// Returns the multiplicative inverse of self.
            ///
            /// Fails with [`Error::DivisionByZero`]($crate::Error::DivisionByZero)
            /// if self is zero.
            pub fn try_invert(&self) -> $crate::Result<Self> {
                Option::from(self.invert()).ok_or($crate::Error::DivisionByZero)
            }
        }

        field_op!($fe, Add, add, add);
        field_op!($fe, Sub, sub, sub);
        field_op!($fe, Mul, mul, multiply);
        field_op_assign!($fe, AddAssign, add_assign, add);
        field_op_assign!($fe, SubAssign, sub_assign, sub);
        field_op_assign!($fe, MulAssign, mul_assign, multiply);

        impl ::core::ops::Neg for $fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(&self)
            }
        }

        impl ::core::ops::Neg for &$fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(self)
            }
        }

        impl ::core::iter::Sum for $fe {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(::core::ops::Add::add).unwrap_or(Self::ZERO)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $fe> for $fe {
            fn sum<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl ::core::iter::Product for $fe {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(::core::ops::Mul::mul).unwrap_or(Self::ONE)
            }
        }

        impl<'a> ::core::iter::Product<&'a $fe> for $fe {
            fn product<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().product()
            }
        }

        impl ::subtle::ConditionallySelectable for $fe {
            fn conditional_select(a: &Self, b: &Self, choice: ::subtle::Choice) -> Self {
                Self([
                    <u64 as ::subtle::ConditionallySelectable>::conditional_select(&a.0[0], &b.0[0], choice),
                    <u64 as ::subtle::ConditionallySelectable>::conditional_select(&a.0[1], &b.0[1], choice),
                    <u64 as ::subtle::ConditionallySelectable>::conditional_select(&a.0[2], &b.0[2], choice),
                    <u64 as ::subtle::ConditionallySelectable>::conditional_select(&a.0[3], &b.0[3], choice),
                ])
            }
        }

        impl ::subtle::ConstantTimeEq for $fe {
            fn ct_eq(&self, other: &Self) -> ::subtle::Choice {
                ::subtle::ConstantTimeEq::ct_eq(&self.0[0], &other.0[0])
                    & ::subtle::ConstantTimeEq::ct_eq(&self.0[1], &other.0[1])
                    & ::subtle::ConstantTimeEq::ct_eq(&self.0[2], &other.0[2])
                    & ::subtle::ConstantTimeEq::ct_eq(&self.0[3], &other.0[3])
            }
        }

        impl PartialEq for $fe {
            fn eq(&self, other: &Self) -> bool {
                ::subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl Eq for $fe {}

        impl Default for $fe {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl ::core::fmt::Debug for $fe {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}(0x", stringify!($fe))?;
                for byte in self.to_bytes() {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, ")")
            }
        }

        /// Formats as `0x`-prefixed, zero-padded lowercase hex.
        impl ::core::fmt::Display for $fe {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "0x")?;
                for byte in self.to_bytes() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl From<u64> for $fe {
            fn from(n: u64) -> $fe {
                Self::from_u64(n)
            }
        }

        impl From<$fe> for ::bigint::U256 {
            fn from(fe: $fe) -> ::bigint::U256 {
                fe.to_uint()
            }
        }

        impl From<&$fe> for ::bigint::U256 {
            fn from(fe: &$fe) -> ::bigint::U256 {
                fe.to_uint()
            }
        }

        impl ::zeroize::DefaultIsZeroes for $fe {}
    };
}
