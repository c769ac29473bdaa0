// ============================================================================
// Magnitude Backends
// Per-primitive operations behind the generic value types
// ============================================================================
//
// The generic `Int` and `Float` types never touch a primitive directly; every
// width- or signedness-specific operation goes through these traits. Adding a
// declared type means adding one line to a macro invocation below.

use super::errors::Magnitude;
use super::kind::NumericType;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primitive integer representation of a declared integer type.
///
/// The primitive's range is exactly the declared range, so every checked
/// primitive operation that succeeds produced the mathematical result.
pub trait IntBackend:
    Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Into<Magnitude>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    const TYPE: NumericType;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
    const BITS: u32;

    /// Exact value in the unbounded domain.
    fn widen(self) -> BigInt;

    /// Exact conversion back; `None` when out of the primitive's range.
    fn narrow(wide: &BigInt) -> Option<Self>;

    /// Nearest double.
    fn to_f64(self) -> f64;

    fn is_negative(self) -> bool;

    /// Non-negative values that fit a shift amount or exponent.
    fn to_u32(self) -> Option<u32>;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    /// Truncating division; `None` for a zero divisor or `MIN / -1`.
    fn checked_div(self, rhs: Self) -> Option<Self>;
    /// Truncated remainder; `None` for a zero divisor or `MIN % -1`.
    fn checked_rem(self, rhs: Self) -> Option<Self>;
    fn checked_pow(self, exp: u32) -> Option<Self>;

    /// `self * 2^n` when exactly representable.
    fn shl_exact(self, n: u32) -> Option<Self>;

    /// Flooring shift by `n < BITS`.
    fn shr_floor(self, n: u32) -> Self;
}

/// Marker for backends whose declared type is signed.
pub trait SignedBackend: IntBackend {
    fn checked_neg(self) -> Option<Self>;
}

macro_rules! int_backend {
    ($($t:ty => $ty:ident, $narrow:ident, $signed:expr);* $(;)?) => {
        $(
            impl IntBackend for $t {
                const TYPE: NumericType = NumericType::$ty;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn widen(self) -> BigInt {
                    BigInt::from(self)
                }

                #[inline]
                fn narrow(wide: &BigInt) -> Option<Self> {
                    wide.$narrow()
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                #[allow(unused_comparisons)]
                fn is_negative(self) -> bool {
                    $signed && self < 0
                }

                #[inline]
                fn to_u32(self) -> Option<u32> {
                    u32::try_from(self).ok()
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }

                #[inline]
                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_rem(self, rhs)
                }

                #[inline]
                fn checked_pow(self, exp: u32) -> Option<Self> {
                    <$t>::checked_pow(self, exp)
                }

                #[inline]
                fn shl_exact(self, n: u32) -> Option<Self> {
                    if n >= Self::BITS {
                        return if self == 0 { Some(0) } else { None };
                    }
                    let shifted = self.wrapping_shl(n);
                    // Round-trips only if no significant bit (or the sign) was lost.
                    if shifted.wrapping_shr(n) == self {
                        Some(shifted)
                    } else {
                        None
                    }
                }

                #[inline]
                fn shr_floor(self, n: u32) -> Self {
                    self.wrapping_shr(n)
                }
            }
        )*
    };
}

int_backend! {
    i8 => I8, to_i8, true;
    i16 => I16, to_i16, true;
    i32 => I32, to_i32, true;
    i64 => I64, to_i64, true;
    i128 => I128, to_i128, true;
    u8 => U8, to_u8, false;
    u16 => U16, to_u16, false;
    u32 => U32, to_u32, false;
    u64 => U64, to_u64, false;
    u128 => U128, to_u128, false;
}

macro_rules! signed_backend {
    ($($t:ty),*) => {
        $(
            impl SignedBackend for $t {
                #[inline]
                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }
        )*
    };
}

signed_backend!(i8, i16, i32, i64, i128);

// ============================================================================
// Word-Sized Backends
// ============================================================================
//
// `Isize` and `Usize` are declared as 64 bits wide on every host, so they
// cannot borrow the pointer-width primitives. Each is a newtype over the
// 64-bit primitive that reports its own declared type.

macro_rules! word_backend {
    ($($name:ident($t:ty) => $ty:ident);* $(;)?) => {
        $(
            #[doc = concat!("64-bit representation of the declared `", stringify!($ty), "` type.")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
            #[cfg_attr(feature = "serde", serde(transparent))]
            #[repr(transparent)]
            pub struct $name(pub $t);

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }

            impl From<$name> for Magnitude {
                #[inline]
                fn from(value: $name) -> Self {
                    Magnitude::from(value.0)
                }
            }

            impl BitAnd for $name {
                type Output = Self;

                #[inline]
                fn bitand(self, rhs: Self) -> Self {
                    $name(self.0 & rhs.0)
                }
            }

            impl BitOr for $name {
                type Output = Self;

                #[inline]
                fn bitor(self, rhs: Self) -> Self {
                    $name(self.0 | rhs.0)
                }
            }

            impl BitXor for $name {
                type Output = Self;

                #[inline]
                fn bitxor(self, rhs: Self) -> Self {
                    $name(self.0 ^ rhs.0)
                }
            }

            impl Not for $name {
                type Output = Self;

                #[inline]
                fn not(self) -> Self {
                    $name(!self.0)
                }
            }

            impl IntBackend for $name {
                const TYPE: NumericType = NumericType::$ty;
                const MIN: Self = $name(<$t>::MIN);
                const MAX: Self = $name(<$t>::MAX);
                const ZERO: Self = $name(0);
                const ONE: Self = $name(1);
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn widen(self) -> BigInt {
                    BigInt::from(self.0)
                }

                #[inline]
                fn narrow(wide: &BigInt) -> Option<Self> {
                    <$t as IntBackend>::narrow(wide).map($name)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self.0 as f64
                }

                #[inline]
                fn is_negative(self) -> bool {
                    IntBackend::is_negative(self.0)
                }

                #[inline]
                fn to_u32(self) -> Option<u32> {
                    IntBackend::to_u32(self.0)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    self.0.checked_add(rhs.0).map($name)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    self.0.checked_sub(rhs.0).map($name)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    self.0.checked_mul(rhs.0).map($name)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    self.0.checked_div(rhs.0).map($name)
                }

                #[inline]
                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    self.0.checked_rem(rhs.0).map($name)
                }

                #[inline]
                fn checked_pow(self, exp: u32) -> Option<Self> {
                    self.0.checked_pow(exp).map($name)
                }

                #[inline]
                fn shl_exact(self, n: u32) -> Option<Self> {
                    IntBackend::shl_exact(self.0, n).map($name)
                }

                #[inline]
                fn shr_floor(self, n: u32) -> Self {
                    $name(IntBackend::shr_floor(self.0, n))
                }
            }
        )*
    };
}

word_backend! {
    IsizeRepr(i64) => Isize;
    UsizeRepr(u64) => Usize;
}

impl SignedBackend for IsizeRepr {
    #[inline]
    fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(IsizeRepr)
    }
}

/// Primitive float representation of a declared float type.
///
/// Arithmetic is carried out in `f64` for every float width and narrowed
/// only after the result has been admitted.
pub trait FloatBackend:
    Copy + PartialOrd + Debug + Display + Default + Send + Sync + 'static
{
    const TYPE: NumericType;
    const MIN: f64;
    const MAX: f64;
    const ZERO: Self;

    fn widen(self) -> f64;

    /// Round to the nearest representable value.
    fn narrow(wide: f64) -> Self;
}

impl FloatBackend for f32 {
    const TYPE: NumericType = NumericType::F32;
    const MIN: f64 = f32::MIN as f64;
    const MAX: f64 = f32::MAX as f64;
    const ZERO: Self = 0.0;

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(wide: f64) -> Self {
        wide as f32
    }
}

impl FloatBackend for f64 {
    const TYPE: NumericType = NumericType::F64;
    const MIN: f64 = f64::MIN;
    const MAX: f64 = f64::MAX;
    const ZERO: Self = 0.0;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(wide: f64) -> Self {
        wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_narrow() {
        assert_eq!(IntBackend::widen(-5i8), BigInt::from(-5));
        assert_eq!(<u8 as IntBackend>::narrow(&BigInt::from(255)), Some(255u8));
        assert_eq!(<u8 as IntBackend>::narrow(&BigInt::from(256)), None);
        assert_eq!(<i128 as IntBackend>::narrow(&BigInt::from(i128::MIN)), Some(i128::MIN));
    }

    #[test]
    fn test_shl_exact() {
        assert_eq!(IntBackend::shl_exact(2i16, 3), Some(16));
        assert_eq!(IntBackend::shl_exact(64i8, 1), None);
        assert_eq!(IntBackend::shl_exact(-64i8, 1), Some(-128));
        assert_eq!(IntBackend::shl_exact(0x80u8, 1), None);
        assert_eq!(IntBackend::shl_exact(0u32, 40), Some(0));
        assert_eq!(IntBackend::shl_exact(1u32, 32), None);
    }

    #[test]
    fn test_shr_floor() {
        assert_eq!(IntBackend::shr_floor(-3i16, 1), -2);
        assert_eq!(IntBackend::shr_floor(2i16, 3), 0);
        assert_eq!(IntBackend::shr_floor(0xF0u8, 4), 0x0F);
    }

    #[test]
    fn test_is_negative() {
        assert!(IntBackend::is_negative(-1i64));
        assert!(!IntBackend::is_negative(u64::MAX));
    }

    #[test]
    fn test_word_backends_are_64_bit() {
        assert_eq!(<IsizeRepr as IntBackend>::BITS, 64);
        assert_eq!(<UsizeRepr as IntBackend>::TYPE, NumericType::Usize);
        assert_eq!(IsizeRepr::MIN.widen(), BigInt::from(i64::MIN));
        assert_eq!(UsizeRepr::MAX.widen(), BigInt::from(u64::MAX));
        assert_eq!(
            <UsizeRepr as IntBackend>::narrow(&BigInt::from(1u64 << 40)),
            Some(UsizeRepr(1 << 40))
        );
        assert_eq!(<UsizeRepr as IntBackend>::narrow(&BigInt::from(-1)), None);
        assert_eq!(IntBackend::shr_floor(IsizeRepr(-3), 1), IsizeRepr(-2));
        assert_eq!(SignedBackend::checked_neg(IsizeRepr::MIN), None);
        assert_eq!(IsizeRepr(-7).to_string(), "-7");
    }

    #[test]
    fn test_float_bounds() {
        assert_eq!(<f32 as FloatBackend>::MAX, 3.4028234663852886e38);
        assert_eq!(<f64 as FloatBackend>::MIN, f64::MIN);
        assert_eq!(<f32 as FloatBackend>::narrow(1.5), 1.5f32);
    }
}
