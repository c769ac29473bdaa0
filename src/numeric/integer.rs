// ============================================================================
// Fixed-Width Integer
// Overflow-trapping integer value generic over width, signedness and bounds
// ============================================================================

use super::backend::{IntBackend, IsizeRepr, SignedBackend, UsizeRepr};
use super::errors::{Magnitude, NumericError, NumericResult, OverflowError};
use super::kind::NumericType;
use super::policy::{self, Bounds, Inclusive};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Largest overflow result, in bits, kept exactly in an error report.
/// Anything larger is reported as the expression that produced it.
const MATERIALIZE_BITS: u64 = 1 << 16;

/// Fixed-width integer with overflow trapping.
///
/// Stores a primitive of exactly the declared width. Every constructor and
/// every operation validates its result against the declared range under
/// the boundary rule `P` and returns a new value; nothing wraps, saturates
/// or clamps.
///
/// # Type Parameters
/// - `R`: primitive backend (`i8` ... `u128`, [`IsizeRepr`], [`UsizeRepr`])
/// - `P`: boundary rule, [`Inclusive`] by default
///
/// # Example
/// ```
/// use checked_runtime::numeric::I16;
///
/// let a = I16::new(20)?;
/// let b = I16::new(10)?;
/// assert_eq!(a.checked_add(b)?.value(), 30);
/// assert!(I16::new(32767)?.checked_add(I16::new(1)?).is_err());
/// # Ok::<(), checked_runtime::numeric::NumericError>(())
/// ```
#[repr(transparent)]
pub struct Int<R, P = Inclusive> {
    raw: R,
    _bounds: PhantomData<P>,
}

impl<R: IntBackend, P: Bounds> Int<R, P> {
    /// The declared type this instantiation represents.
    pub const TYPE: NumericType = R::TYPE;

    #[inline]
    pub(super) const fn wrap(raw: R) -> Self {
        Self {
            raw,
            _bounds: PhantomData,
        }
    }

    /// Validate a primitive result under `P`.
    #[inline]
    fn admit(raw: R) -> NumericResult<Self> {
        policy::check(P::KIND, R::TYPE, &raw, &R::MIN, &R::MAX)?;
        Ok(Self::wrap(raw))
    }

    /// Error for a result that does not fit the primitive at all.
    fn overflow(actual: impl Into<Magnitude>) -> NumericError {
        let err = OverflowError::new(R::TYPE, actual).with_bounds(P::KIND);
        policy::reject(P::KIND, &err);
        err.into()
    }

    fn guard_divisor(rhs: Self) -> NumericResult<()> {
        if rhs.raw == R::ZERO {
            tracing::debug!(ty = %R::TYPE, "division by zero");
            return Err(NumericError::divide_by_zero(R::TYPE));
        }
        Ok(())
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from the backing primitive.
    ///
    /// # Errors
    /// Returns `Overflow` if `raw` is not admitted by the boundary rule.
    #[inline]
    pub fn new(raw: R) -> NumericResult<Self> {
        Self::admit(raw)
    }

    /// Create from any integer magnitude, including ones wider than `R`.
    ///
    /// # Errors
    /// Returns `Overflow` carrying the magnitude if it is out of range.
    pub fn from_magnitude(magnitude: impl Into<BigInt>) -> NumericResult<Self> {
        let wide = magnitude.into();
        match R::narrow(&wide) {
            Some(raw) => Self::admit(raw),
            None => Err(Self::overflow(wide)),
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// The backing primitive.
    #[inline]
    pub const fn value(self) -> R {
        self.raw
    }

    /// Exact magnitude as a big integer.
    pub fn to_big_int(self) -> BigInt {
        self.raw.widen()
    }

    /// Nearest double (lossy above 2^53).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw.to_f64()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw == R::ZERO
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` with the exact sum if it is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        match self.raw.checked_add(rhs.raw) {
            Some(raw) => Self::admit(raw),
            None => Err(Self::overflow(self.raw.widen() + rhs.raw.widen())),
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` with the exact difference if it is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        match self.raw.checked_sub(rhs.raw) {
            Some(raw) => Self::admit(raw),
            None => Err(Self::overflow(self.raw.widen() - rhs.raw.widen())),
        }
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` with the exact product if it is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        match self.raw.checked_mul(rhs.raw) {
            Some(raw) => Self::admit(raw),
            None => Err(Self::overflow(self.raw.widen() * rhs.raw.widen())),
        }
    }

    /// Flooring division (rounds toward negative infinity).
    ///
    /// # Errors
    /// - `DivideByZero` if `rhs` is zero
    /// - `Overflow` for `MIN / -1`
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        Self::guard_divisor(rhs)?;

        let quotient = match self.raw.checked_div(rhs.raw) {
            Some(q) => q,
            None => return Err(Self::overflow(self.raw.widen() / rhs.raw.widen())),
        };

        let inexact = self
            .raw
            .checked_rem(rhs.raw)
            .is_some_and(|r| r != R::ZERO);
        if inexact && self.raw.is_negative() != rhs.raw.is_negative() {
            match quotient.checked_sub(R::ONE) {
                Some(q) => Self::admit(q),
                None => Err(Self::overflow(quotient.widen() - 1)),
            }
        } else {
            Self::admit(quotient)
        }
    }

    /// Truncated remainder; the sign follows the dividend.
    ///
    /// # Errors
    /// Returns `DivideByZero` if `rhs` is zero.
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        Self::guard_divisor(rhs)?;
        // Only MIN % -1 fails in the primitive, and its exact remainder is 0.
        Self::admit(self.raw.checked_rem(rhs.raw).unwrap_or(R::ZERO))
    }

    /// Checked exponentiation.
    ///
    /// A negative exponent yields the truncated reciprocal: `1` for base
    /// `1`, `1` or `-1` for base `-1`, and `0` for any other non-zero base.
    ///
    /// # Errors
    /// - `Overflow` if the power is out of range
    /// - `DivideByZero` for a zero base with a negative exponent
    pub fn checked_pow(self, rhs: Self) -> NumericResult<Self> {
        let base = self.raw;
        let odd_exponent = rhs.raw & R::ONE != R::ZERO;
        let minus_one = base.checked_add(R::ONE) == Some(R::ZERO);

        if rhs.raw.is_negative() {
            return match base {
                b if b == R::ZERO => {
                    tracing::debug!(ty = %R::TYPE, "zero raised to a negative power");
                    Err(NumericError::divide_by_zero(R::TYPE))
                }
                b if b == R::ONE => Self::admit(R::ONE),
                _ if minus_one => Self::admit(if odd_exponent { base } else { R::ONE }),
                _ => Self::admit(R::ZERO),
            };
        }

        match rhs.raw.to_u32() {
            Some(exp) => match base.checked_pow(exp) {
                Some(raw) => Self::admit(raw),
                None => Err(Self::overflow(exact_pow(base, exp))),
            },
            // Exponent beyond u32: only 0, 1 and -1 stay bounded.
            None if base == R::ZERO || base == R::ONE => Self::admit(base),
            None if minus_one => Self::admit(if odd_exponent { base } else { R::ONE }),
            None => Err(Self::overflow(Magnitude::Unmaterialized(format!(
                "{} ** {}",
                base, rhs.raw
            )))),
        }
    }

    // ========================================================================
    // Bitwise
    // ========================================================================

    #[inline]
    pub fn bit_or(self, rhs: Self) -> NumericResult<Self> {
        Self::admit(self.raw | rhs.raw)
    }

    #[inline]
    pub fn bit_and(self, rhs: Self) -> NumericResult<Self> {
        Self::admit(self.raw & rhs.raw)
    }

    #[inline]
    pub fn bit_xor(self, rhs: Self) -> NumericResult<Self> {
        Self::admit(self.raw ^ rhs.raw)
    }

    /// Complement of the declared width's bit pattern.
    #[inline]
    pub fn bit_not(self) -> NumericResult<Self> {
        Self::admit(!self.raw)
    }

    /// Exact left shift (`self * 2^rhs`). A negative amount shifts right.
    ///
    /// # Errors
    /// Returns `Overflow` if a significant bit would be shifted out.
    pub fn checked_shl(self, rhs: Self) -> NumericResult<Self> {
        if rhs.raw.is_negative() {
            self.shift_right((-rhs.raw.widen()).to_u32())
        } else {
            self.shift_left(rhs.raw.to_u32(), rhs.raw)
        }
    }

    /// Flooring right shift. A negative amount shifts left.
    ///
    /// # Errors
    /// Returns `Overflow` only for a negative amount whose left shift
    /// overflows, or when the result is rejected by the boundary rule.
    pub fn checked_shr(self, rhs: Self) -> NumericResult<Self> {
        if rhs.raw.is_negative() {
            let amount = -rhs.raw.widen();
            self.shift_left(amount.to_u32(), amount)
        } else {
            self.shift_right(rhs.raw.to_u32())
        }
    }

    fn shift_left(self, amount: Option<u32>, shown: impl fmt::Display) -> NumericResult<Self> {
        if self.raw == R::ZERO {
            return Self::admit(R::ZERO);
        }
        if let Some(raw) = amount.and_then(|n| self.raw.shl_exact(n)) {
            return Self::admit(raw);
        }

        let wide = self.raw.widen();
        let actual = match amount {
            Some(n) if wide.bits() + u64::from(n) <= MATERIALIZE_BITS => {
                Magnitude::Integer(wide << n)
            }
            _ => Magnitude::Unmaterialized(format!("{} << {}", self.raw, shown)),
        };
        Err(Self::overflow(actual))
    }

    fn shift_right(self, amount: Option<u32>) -> NumericResult<Self> {
        match amount {
            Some(n) if n < R::BITS => Self::admit(self.raw.shr_floor(n)),
            _ if self.raw.is_negative() => Self::admit(!R::ZERO),
            _ => Self::admit(R::ZERO),
        }
    }
}

impl<R: SignedBackend, P: Bounds> Int<R, P> {
    /// Checked negation (signed types only).
    ///
    /// # Errors
    /// Returns `Overflow` for `-MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        match self.raw.checked_neg() {
            Some(raw) => Self::admit(raw),
            None => Err(Self::overflow(-self.raw.widen())),
        }
    }
}

/// Exact power for an error report, or the expression if it is too large.
fn exact_pow<R: IntBackend>(base: R, exp: u32) -> Magnitude {
    let wide = base.widen();
    if wide.bits().saturating_mul(u64::from(exp)) <= MATERIALIZE_BITS {
        Magnitude::Integer(wide.pow(exp))
    } else {
        Magnitude::Unmaterialized(format!("{} ** {}", base, exp))
    }
}

// ============================================================================
// Constants (inclusive bounds only)
// ============================================================================

impl<R: IntBackend> Int<R, Inclusive> {
    pub const ZERO: Self = Self::wrap(R::ZERO);
    pub const ONE: Self = Self::wrap(R::ONE);
    pub const MIN: Self = Self::wrap(R::MIN);
    pub const MAX: Self = Self::wrap(R::MAX);
}

impl<R: IntBackend> Default for Int<R, Inclusive> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<R: IntBackend, P: Bounds> Clone for Int<R, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: IntBackend, P: Bounds> Copy for Int<R, P> {}

impl<R: IntBackend, P: Bounds> PartialEq for Int<R, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<R: IntBackend, P: Bounds> Eq for Int<R, P> {}

impl<R: IntBackend, P: Bounds> PartialOrd for Int<R, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: IntBackend, P: Bounds> Ord for Int<R, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<R: IntBackend, P: Bounds> Hash for Int<R, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<R: IntBackend, P: Bounds> fmt::Debug for Int<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", R::TYPE, self.raw)
    }
}

impl<R: IntBackend, P: Bounds> fmt::Display for Int<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

#[cfg(feature = "serde")]
impl<R, P> serde::Serialize for Int<R, P>
where
    R: IntBackend + serde::Serialize,
    P: Bounds,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R, P> serde::Deserialize<'de> for Int<R, P>
where
    R: IntBackend + serde::Deserialize<'de>,
    P: Bounds,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = R::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Declared Types
// ============================================================================

pub type I8 = Int<i8>;
pub type I16 = Int<i16>;
pub type I32 = Int<i32>;
pub type I64 = Int<i64>;
pub type I128 = Int<i128>;
/// 64 bits wide on every host.
pub type Isize = Int<IsizeRepr>;
pub type U8 = Int<u8>;
pub type U16 = Int<u16>;
pub type U32 = Int<u32>;
pub type U64 = Int<u64>;
pub type U128 = Int<u128>;
/// 64 bits wide on every host.
pub type Usize = Int<UsizeRepr>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::policy::{BoundsKind, Exclusive};
    use proptest::prelude::*;

    fn i16v(v: i16) -> I16 {
        I16::new(v).unwrap()
    }

    #[test]
    fn test_add() {
        assert_eq!(i16v(20).checked_add(i16v(10)).unwrap().value(), 30);
    }

    #[test]
    fn test_add_overflow_reports_value_and_bounds() {
        let err = i16v(32767).checked_add(i16v(1)).unwrap_err();
        assert_eq!(
            err,
            NumericError::Overflow(OverflowError {
                ty: NumericType::I16,
                actual: Magnitude::from(32768),
                min: Magnitude::from(-32768),
                max: Magnitude::from(32767),
                bounds: BoundsKind::Inclusive,
            })
        );
    }

    #[test]
    fn test_sub_mul() {
        assert_eq!(i16v(20).checked_sub(i16v(10)).unwrap().value(), 10);
        assert_eq!(i16v(20).checked_mul(i16v(4)).unwrap().value(), 80);
        assert!(U8::new(0).unwrap().checked_sub(U8::new(1).unwrap()).is_err());
    }

    #[test]
    fn test_wide_overflow_is_exact() {
        let err = U128::MAX.checked_mul(U128::MAX).unwrap_err();
        let max = BigInt::from(u128::MAX);
        match err {
            NumericError::Overflow(err) => assert_eq!(err.actual, Magnitude::Integer(&max * &max)),
            other => panic!("unexpected error: {other}"),
        }

        let err = I64::MIN.checked_sub(I64::ONE).unwrap_err();
        match err {
            NumericError::Overflow(err) => {
                assert_eq!(err.actual, Magnitude::Integer(BigInt::from(i64::MIN) - 1))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_div_floors() {
        assert_eq!(i16v(20).checked_div(i16v(10)).unwrap().value(), 2);
        assert_eq!(i16v(7).checked_div(i16v(2)).unwrap().value(), 3);
        assert_eq!(i16v(-7).checked_div(i16v(2)).unwrap().value(), -4);
        assert_eq!(i16v(7).checked_div(i16v(-2)).unwrap().value(), -4);
        assert_eq!(i16v(-7).checked_div(i16v(-2)).unwrap().value(), 3);
        assert_eq!(i16v(-8).checked_div(i16v(2)).unwrap().value(), -4);
    }

    #[test]
    fn test_div_min_by_minus_one() {
        let err = I8::MIN.checked_div(I8::new(-1).unwrap()).unwrap_err();
        assert_eq!(err, NumericError::overflow(NumericType::I8, 128));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = U8::new(200).unwrap().checked_div(U8::ZERO).unwrap_err();
        assert_eq!(err, NumericError::divide_by_zero(NumericType::U8));
        assert!(U8::new(200).unwrap().checked_rem(U8::ZERO).unwrap_err().is_divide_by_zero());
    }

    #[test]
    fn test_rem() {
        assert_eq!(i16v(20).checked_rem(i16v(10)).unwrap().value(), 0);
        assert_eq!(i16v(-7).checked_rem(i16v(2)).unwrap().value(), -1);
        assert_eq!(i16v(7).checked_rem(i16v(-2)).unwrap().value(), 1);
        assert_eq!(I32::MIN.checked_rem(I32::new(-1).unwrap()).unwrap().value(), 0);
    }

    #[test]
    fn test_pow() {
        assert_eq!(i16v(2).checked_pow(i16v(3)).unwrap().value(), 8);
        assert_eq!(i16v(-2).checked_pow(i16v(3)).unwrap().value(), -8);
        assert_eq!(i16v(5).checked_pow(i16v(0)).unwrap().value(), 1);
        assert_eq!(
            i16v(2).checked_pow(i16v(15)).unwrap_err(),
            NumericError::overflow(NumericType::I16, 32768)
        );
    }

    #[test]
    fn test_pow_negative_exponent() {
        assert_eq!(i16v(2).checked_pow(i16v(-1)).unwrap().value(), 0);
        assert_eq!(i16v(1).checked_pow(i16v(-5)).unwrap().value(), 1);
        assert_eq!(i16v(-1).checked_pow(i16v(-3)).unwrap().value(), -1);
        assert_eq!(i16v(-1).checked_pow(i16v(-4)).unwrap().value(), 1);
        assert!(i16v(0).checked_pow(i16v(-1)).unwrap_err().is_divide_by_zero());
    }

    #[test]
    fn test_pow_huge_exponent() {
        let huge = U64::new(u64::MAX).unwrap();
        assert_eq!(U64::ONE.checked_pow(huge).unwrap(), U64::ONE);
        assert_eq!(U64::ZERO.checked_pow(huge).unwrap(), U64::ZERO);
        let err = U64::new(2).unwrap().checked_pow(huge).unwrap_err();
        match err {
            NumericError::Overflow(err) => assert_eq!(
                err.actual,
                Magnitude::Unmaterialized(format!("2 ** {}", u64::MAX))
            ),
            other => panic!("unexpected error: {other}"),
        }
        let minus_one = I64::new(-1).unwrap();
        assert_eq!(minus_one.checked_pow(I64::MAX).unwrap(), minus_one);
    }

    #[test]
    fn test_shifts() {
        assert_eq!(i16v(2).checked_shl(i16v(3)).unwrap().value(), 16);
        assert_eq!(i16v(2).checked_shr(i16v(3)).unwrap().value(), 0);
        assert_eq!(i16v(-3).checked_shr(i16v(1)).unwrap().value(), -2);
        assert_eq!(i16v(-3).checked_shr(i16v(100)).unwrap().value(), -1);
        assert_eq!(i16v(16).checked_shl(i16v(-2)).unwrap().value(), 4);
        assert_eq!(i16v(1).checked_shr(i16v(-4)).unwrap().value(), 16);
        assert_eq!(i16v(0).checked_shl(i16v(1000)).unwrap().value(), 0);
    }

    #[test]
    fn test_shl_overflow() {
        let err = I8::new(64).unwrap().checked_shl(I8::ONE).unwrap_err();
        assert_eq!(err, NumericError::overflow(NumericType::I8, 128));

        let err = U8::new(1).unwrap().checked_shl(U8::new(8).unwrap()).unwrap_err();
        assert_eq!(err, NumericError::overflow(NumericType::U8, 256));
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(i16v(2).bit_or(i16v(3)).unwrap().value(), 3);
        assert_eq!(i16v(2).bit_and(i16v(3)).unwrap().value(), 2);
        assert_eq!(i16v(2).bit_xor(i16v(3)).unwrap().value(), 1);
        assert_eq!(i16v(2).bit_not().unwrap().value(), -3);
        assert_eq!(U8::new(2).unwrap().bit_not().unwrap().value(), 253);
    }

    #[test]
    fn test_neg() {
        assert_eq!(i16v(2).checked_neg().unwrap().value(), -2);
        assert_eq!(
            I16::MIN.checked_neg().unwrap_err(),
            NumericError::overflow(NumericType::I16, 32768)
        );
    }

    #[test]
    fn test_comparison() {
        assert!(i16v(2) == i16v(2));
        assert!(!(i16v(2) != i16v(2)));
        assert!(i16v(2) < i16v(10));
        assert!(!(i16v(2) > i16v(10)));
        assert!(i16v(2) <= i16v(10));
        assert!(i16v(10) >= i16v(10));
        assert_eq!(i16v(3).max(i16v(-3)), i16v(3));
    }

    #[test]
    fn test_from_magnitude() {
        assert_eq!(I16::from_magnitude(-32768).unwrap(), I16::MIN);
        assert_eq!(
            I16::from_magnitude(32768).unwrap_err(),
            NumericError::overflow(NumericType::I16, 32768)
        );
        assert!(U8::from_magnitude(-1).is_err());
        let past_u128 = BigInt::from(u128::MAX) + 1;
        assert!(U128::from_magnitude(past_u128).is_err());
    }

    macro_rules! boundary_tests {
        ($($name:ident: $alias:ty, $prim:ty);* $(;)?) => {
            $(
                #[test]
                fn $name() {
                    let min = <$prim as IntBackend>::MIN.widen();
                    let max = <$prim as IntBackend>::MAX.widen();

                    assert!(<$alias>::from_magnitude(min.clone()).is_ok());
                    assert!(<$alias>::from_magnitude(max.clone()).is_ok());
                    assert!(<$alias>::from_magnitude(&min - 1).is_err());
                    assert!(<$alias>::from_magnitude(&max + 1).is_err());

                    assert!(Int::<$prim, Exclusive>::new(<$prim as IntBackend>::MIN).is_err());
                    assert!(Int::<$prim, Exclusive>::new(<$prim as IntBackend>::MAX).is_err());
                    assert!(Int::<$prim, Exclusive>::from_magnitude(&min - 1).is_err());
                    assert!(Int::<$prim, Exclusive>::from_magnitude(&max + 1).is_err());
                }
            )*
        };
    }

    boundary_tests! {
        test_bounds_i8: I8, i8;
        test_bounds_i16: I16, i16;
        test_bounds_i32: I32, i32;
        test_bounds_i64: I64, i64;
        test_bounds_i128: I128, i128;
        test_bounds_isize: Isize, IsizeRepr;
        test_bounds_u8: U8, u8;
        test_bounds_u16: U16, u16;
        test_bounds_u32: U32, u32;
        test_bounds_u64: U64, u64;
        test_bounds_u128: U128, u128;
        test_bounds_usize: Usize, UsizeRepr;
    }

    #[test]
    fn test_exclusive_rejects_results_on_boundary() {
        type StrictI8 = Int<i8, Exclusive>;
        let a = StrictI8::new(100).unwrap();
        let b = StrictI8::new(27).unwrap();
        assert_eq!(
            a.checked_add(b).unwrap_err(),
            NumericError::Overflow(
                OverflowError::new(NumericType::I8, 127).with_bounds(BoundsKind::Exclusive)
            )
        );
        let err = StrictI8::new(100).unwrap().checked_mul(b).unwrap_err();
        assert_eq!(err.to_string(), "Int8 overflow: 2700 is outside (-128, 127)");
        assert_eq!(a.checked_add(StrictI8::new(26).unwrap()).unwrap().value(), 126);
    }

    #[test]
    fn test_word_types_independent_of_host() {
        let big = Isize::from_magnitude(1i64 << 40).unwrap();
        assert_eq!(big.value(), IsizeRepr(1 << 40));
        assert_eq!(Usize::MAX.to_big_int(), BigInt::from(u64::MAX));
        assert_eq!(Isize::MIN.to_big_int(), BigInt::from(i64::MIN));
        assert!(Usize::from_magnitude(BigInt::from(u64::MAX) + 1).is_err());
        assert_eq!(
            Isize::MAX.checked_add(Isize::ONE).unwrap_err(),
            NumericError::overflow(NumericType::Isize, BigInt::from(i64::MAX) + 1)
        );
        assert_eq!(Isize::new(IsizeRepr(-6)).unwrap().checked_neg().unwrap().value(), IsizeRepr(6));
        let one = Usize::ONE;
        let sixty_three = Usize::new(UsizeRepr(63)).unwrap();
        assert_eq!(one.checked_shl(sixty_three).unwrap().value(), UsizeRepr(1 << 63));
        assert_eq!(format!("{:?}", Usize::ONE), "Usize(1)");
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(i16v(-42).to_string(), "-42");
        assert_eq!(format!("{:?}", i16v(7)), "Int16(7)");
        assert_eq!(I128::TYPE, NumericType::I128);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(U128::MAX.to_big_int(), BigInt::from(u128::MAX));
        assert_eq!(i16v(-5).to_f64(), -5.0);
        assert!(I32::default().is_zero());
        assert_eq!(I8::new(5).unwrap().value(), 5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_revalidates() {
        assert_eq!(serde_json::from_str::<I8>("5").unwrap(), I8::new(5).unwrap());
        assert_eq!(serde_json::to_string(&I8::new(-5).unwrap()).unwrap(), "-5");
        assert!(serde_json::from_str::<I8>("128").is_err());
        assert!(serde_json::from_str::<U8>("-1").is_err());

        type StrictI8 = Int<i8, Exclusive>;
        let err = serde_json::from_str::<StrictI8>("127").unwrap_err();
        assert!(err.to_string().contains("Int8 overflow: 127 is outside (-128, 127)"));
        assert!(serde_json::from_str::<StrictI8>("-128").is_err());
        assert_eq!(serde_json::from_str::<StrictI8>("126").unwrap().value(), 126);

        assert_eq!(
            serde_json::from_str::<Usize>("1099511627776").unwrap().value(),
            UsizeRepr(1 << 40)
        );
        assert!(serde_json::from_str::<Int<UsizeRepr, Exclusive>>("0").is_err());
    }

    proptest! {
        #[test]
        fn prop_add_commutes(a in any::<i32>(), b in any::<i32>()) {
            let (x, y) = (I32::new(a).unwrap(), I32::new(b).unwrap());
            prop_assert_eq!(x.checked_add(y), y.checked_add(x));
        }

        #[test]
        fn prop_add_matches_exact_sum(a in any::<i64>(), b in any::<i64>()) {
            let exact = BigInt::from(a) + BigInt::from(b);
            match I64::new(a).unwrap().checked_add(I64::new(b).unwrap()) {
                Ok(sum) => prop_assert_eq!(sum.to_big_int(), exact),
                Err(NumericError::Overflow(err)) => prop_assert_eq!(err.actual, Magnitude::Integer(exact)),
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        #[test]
        fn prop_identities(a in any::<u16>()) {
            let x = U16::new(a).unwrap();
            prop_assert_eq!(x.checked_add(U16::ZERO).unwrap(), x);
            prop_assert_eq!(x.checked_sub(x).unwrap(), U16::ZERO);
        }

        #[test]
        fn prop_div_floors(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
            let (x, y) = (I32::new(a).unwrap(), I32::new(b).unwrap());
            if a == i32::MIN && b == -1 {
                prop_assert!(x.checked_div(y).is_err());
            } else {
                let q = i64::from(x.checked_div(y).unwrap().value());
                let (a, b) = (i64::from(a), i64::from(b));
                if b > 0 {
                    prop_assert!(q * b <= a && a < (q + 1) * b);
                } else {
                    prop_assert!(q * b >= a && a > (q + 1) * b);
                }
            }
        }

        #[test]
        fn prop_mul_matches_exact_product(a in any::<u128>(), b in any::<u128>()) {
            let exact = BigInt::from(a) * BigInt::from(b);
            let result = U128::new(a).unwrap().checked_mul(U128::new(b).unwrap());
            prop_assert_eq!(result.is_ok(), exact <= BigInt::from(u128::MAX));
        }
    }
}
